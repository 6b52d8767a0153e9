//! arkdeck - ArkhamDB card importer and Stream Deck configuration generator
//!
//! Command-line entry point. One run:
//!
//! 1. Initialize logging (daily-rotated file in `logs/` plus console)
//! 2. Gather the card list from the requested sources (deck, card ids, packs)
//! 3. Sort the list (descending by card code)
//! 4. Allocate cards onto the primary folder buttons
//! 5. Write the Stream Deck driver configuration file
//! 6. Cache the card images locally (unless `--skip-download`)
//!
//! Execution is single-threaded and synchronous; a failed fetch aborts the
//! run, while over-capacity input only truncates the output.

use anyhow::Result;
use arkdeck::cli::Cli;
use arkdeck::services::{client, collect_cards, emitter, sort_cards};
use arkdeck::{APP_NAME, ArkhamDbClient, ButtonAllocator, ImageCache, LayoutConfig, QueueOrder, VERSION};
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let _guard = arkdeck::logging::setup_logging("logs", APP_NAME, cli.debug)?;
    tracing::info!("Starting {} v{}", APP_NAME, VERSION);

    let api = ArkhamDbClient::new(client::ARKHAMDB_BASE_URL)?;

    let mut cards = collect_cards(&api, cli.deck.as_deref(), &cli.cards, &cli.packs)?;
    sort_cards(&mut cards);
    tracing::info!("Number of cards: {}", cards.len());

    let layout = LayoutConfig {
        images_dir: cli.images_dir.clone(),
        queue_order: if cli.legacy_order {
            QueueOrder::TailFirst
        } else {
            QueueOrder::FrontToBack
        },
        ..LayoutConfig::default()
    };

    let allocator = ButtonAllocator::new(layout);
    let allocation = allocator.allocate(&cards, &cli.folders, &cli.other_folders);
    tracing::info!(
        "Allocated {} cards across {} folders ({} skipped, {} unplaced)",
        allocation.placed,
        allocation.config.folder_list.len(),
        allocation.skipped,
        allocation.unplaced
    );

    emitter::write_config(&allocation.config, &cli.streamdeck_file)?;

    if cli.skip_download {
        tracing::info!("Skipping image download (--skip-download)");
    } else {
        let cache = ImageCache::new(client::ARKHAMDB_BASE_URL, &cli.cache_dir)?;
        let cached = cache.cache_card_images(&cards)?;
        tracing::info!("{} card images present in {}", cached, cli.cache_dir);
    }

    tracing::info!("Import complete");
    Ok(())
}
