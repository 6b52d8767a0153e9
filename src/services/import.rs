//! Card-list gathering and ordering.
//!
//! Builds the single ordered card list one run operates on: deck slots first
//! (each slot fetched as a full card record, in slot order), then explicit
//! card ids, then whole packs appended. Overlapping sources may yield
//! duplicate cards; duplicates are kept, not merged.

use crate::models::Card;
use crate::services::client::CardSource;
use anyhow::{Context, Result};

/// Gather the card list from the requested sources.
///
/// Any single failed fetch aborts the whole run.
pub fn collect_cards<S: CardSource>(
    source: &S,
    deck_id: Option<&str>,
    card_ids: &[String],
    pack_codes: &[String],
) -> Result<Vec<Card>> {
    let mut cards = Vec::new();

    if let Some(deck_id) = deck_id {
        let deck = source
            .fetch_deck(deck_id)
            .with_context(|| format!("Failed to load deck {}", deck_id))?;
        tracing::info!(
            "Loaded deck {} ({} slots)",
            deck_id,
            deck.slots.len()
        );

        for code in deck.card_codes() {
            let card = source
                .fetch_card(code)
                .with_context(|| format!("Failed to load card {} from deck {}", code, deck_id))?;
            cards.push(card);
        }
    }

    for id in card_ids {
        let card = source
            .fetch_card(id)
            .with_context(|| format!("Failed to load card {}", id))?;
        cards.push(card);
    }

    for pack_code in pack_codes {
        let mut pack = source
            .fetch_pack(pack_code)
            .with_context(|| format!("Failed to load pack {}", pack_code))?;
        tracing::info!("Loaded pack {} ({} cards)", pack_code, pack.len());
        cards.append(&mut pack);
    }

    Ok(cards)
}

/// Sort the card list descending by card code (legacy sort policy).
///
/// Any deterministic total order would do; descending-by-code is kept so
/// regenerated configurations match existing ones. Cards without a code
/// sort last.
pub fn sort_cards(cards: &mut [Card]) {
    cards.sort_by(|a, b| b.code.cmp(&a.code));
}
