use indexmap::IndexMap;
use serde::Deserialize;

/// A single card record from the ArkhamDB public API.
///
/// The API returns loosely-populated JSON objects; every field we consume is
/// optional. Some cards (e.g., higher-xp variants) ship without any image.
/// Field names match the API payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Card {
    /// Unique card code, e.g., "01013"
    #[serde(default)]
    pub code: Option<String>,

    /// Display name
    #[serde(default)]
    pub name: Option<String>,

    /// Front image path, relative to the API base URL
    #[serde(default)]
    pub imagesrc: Option<String>,

    /// Back image path, relative to the API base URL
    #[serde(default)]
    pub backimagesrc: Option<String>,
}

impl Card {
    /// The image reference to use for this card: front preferred, back as fallback.
    pub fn image_ref(&self) -> Option<&str> {
        self.imagesrc
            .as_deref()
            .or(self.backimagesrc.as_deref())
    }

    /// Whether this card can be assigned to a button slot.
    ///
    /// A card without a code or without any image reference must be skipped,
    /// never zero-filled into a slot.
    pub fn is_placeable(&self) -> bool {
        self.code.is_some() && self.image_ref().is_some()
    }

    /// Human-readable label for log lines: name, falling back to code.
    pub fn label(&self) -> &str {
        self.name
            .as_deref()
            .or(self.code.as_deref())
            .unwrap_or("<unknown card>")
    }
}

/// A decklist response from the ArkhamDB API.
///
/// `slots` maps card code to copy count; the map preserves the API response
/// order so deck iteration stays deterministic.
#[derive(Debug, Clone, Deserialize)]
pub struct Deck {
    #[serde(default)]
    pub id: Option<u64>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub slots: IndexMap<String, u32>,
}

impl Deck {
    /// Card codes in this deck, in slot order.
    pub fn card_codes(&self) -> impl Iterator<Item = &str> {
        self.slots.keys().map(String::as_str)
    }
}
