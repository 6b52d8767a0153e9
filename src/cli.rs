use camino::Utf8PathBuf;
use clap::Parser;

/// ArkhamDB data import tool for the Stream Deck driver.
///
/// Gathers a card list from a deck, explicit card ids, and/or packs, assigns
/// the cards to Stream Deck folder buttons, writes the driver configuration
/// file, and caches the card images locally.
#[derive(Parser, Debug)]
#[command(name = "arkdeck", version, about = "ArkhamDB data import tool")]
pub struct Cli {
    /// Loads cards for a specified deck number
    #[arg(short, long, value_name = "DECK")]
    pub deck: Option<String>,

    /// Loads cards for the specified list of card ids
    #[arg(short, long, value_name = "CARDS", num_args = 1..)]
    pub cards: Vec<String>,

    /// Loads cards from a list of pack ids
    #[arg(short, long, value_name = "PACKS", num_args = 1..)]
    pub packs: Vec<String>,

    /// Stream Deck folder buttons to populate
    #[arg(short, long, value_name = "BUTTONS", num_args = 1.., required = true)]
    pub folders: Vec<u32>,

    /// Other Stream Deck folder buttons (listed in the main menu, not populated)
    #[arg(short, long, value_name = "BUTTONS", num_args = 1.., required = true)]
    pub other_folders: Vec<u32>,

    /// Stream Deck driver configuration output file
    #[arg(short, long, value_name = "FILE", required = true)]
    pub streamdeck_file: Utf8PathBuf,

    /// Directory the emitted configuration's image paths reference
    #[arg(long, value_name = "DIR", default_value = "arkham/images")]
    pub images_dir: Utf8PathBuf,

    /// Directory card images are downloaded into
    #[arg(long, value_name = "DIR", default_value = "images")]
    pub cache_dir: Utf8PathBuf,

    /// Write the configuration without downloading card images
    #[arg(long, default_value_t = false)]
    pub skip_download: bool,

    /// Consume the sorted card list from the tail (compatibility with older configurations)
    #[arg(long, default_value_t = false)]
    pub legacy_order: bool,

    /// Enable debug logging
    #[arg(long, default_value_t = false)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_full_argument_surface() {
        let cli = Cli::try_parse_from([
            "arkdeck",
            "--deck",
            "1761",
            "--cards",
            "01002",
            "01003",
            "--packs",
            "Core",
            "dwl",
            "--folders",
            "12",
            "13",
            "--other-folders",
            "5",
            "6",
            "7",
            "--streamdeck-file",
            "test_config.json",
        ])
        .unwrap();

        assert_eq!(cli.deck.as_deref(), Some("1761"));
        assert_eq!(cli.cards, vec!["01002", "01003"]);
        assert_eq!(cli.packs, vec!["Core", "dwl"]);
        assert_eq!(cli.folders, vec![12, 13]);
        assert_eq!(cli.other_folders, vec![5, 6, 7]);
        assert_eq!(cli.streamdeck_file, Utf8PathBuf::from("test_config.json"));
        assert!(!cli.skip_download);
        assert!(!cli.legacy_order);
    }

    #[test]
    fn test_folders_are_required() {
        let err = Cli::try_parse_from([
            "arkdeck",
            "--other-folders",
            "5",
            "--streamdeck-file",
            "out.json",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_card_sources_are_optional() {
        let cli = Cli::try_parse_from([
            "arkdeck",
            "--folders",
            "12",
            "--other-folders",
            "5",
            "--streamdeck-file",
            "out.json",
        ])
        .unwrap();
        assert!(cli.deck.is_none());
        assert!(cli.cards.is_empty());
        assert!(cli.packs.is_empty());
    }
}
