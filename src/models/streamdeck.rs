use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

/// Top-level persisted Stream Deck driver configuration.
///
/// Field names are byte-compatible with the driver's existing configuration
/// file; do not rename them without migrating the driver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamDeckConfig {
    pub streamdeck_info: StreamDeckInfo,
    pub folder_list: Vec<Folder>,
}

/// Main-menu metadata: which top-level buttons open folders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamDeckInfo {
    /// Primary folder ids first, then secondary. Not deduplicated; the
    /// driver tolerates duplicate ids and dedup would change button wiring.
    pub main_folder_button_id_list: Vec<u32>,
}

/// One populated folder: a top-level button and its card buttons.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Folder {
    pub main_folder_button_id: u32,
    pub folder_contents: Vec<FolderEntry>,
}

/// One assigned button slot within a folder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderEntry {
    /// Slot index within the folder
    pub button_id: u32,

    /// Local image file path shown on the button
    pub image: Utf8PathBuf,

    /// Button label (the card code)
    pub text: String,

    /// Command executed when the button is pressed
    pub command: String,
}

impl StreamDeckConfig {
    /// Total number of assigned button slots across all folders.
    pub fn entry_count(&self) -> usize {
        self.folder_list.iter().map(|f| f.folder_contents.len()).sum()
    }
}
