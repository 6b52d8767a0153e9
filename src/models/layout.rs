use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

/// Order in which the allocator consumes the sorted card list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum QueueOrder {
    /// Consume the list front-to-back, preserving the caller's sort order.
    #[default]
    FrontToBack,

    /// Consume the list from the tail. This inverts the caller's sort order;
    /// only useful for byte-for-byte parity with configurations generated
    /// before front-to-back became the default.
    TailFirst,
}

/// Explicit allocator configuration.
///
/// Passed into the allocator explicitly (no process-wide constants) so it
/// can be tested with varied capacities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Number of button slots per Stream Deck folder
    #[serde(default = "default_slots_per_folder")]
    pub slots_per_folder: u32,

    /// Slot index reserved for the "back" navigation button, never assigned
    #[serde(default = "default_reserved_slot_index")]
    pub reserved_slot_index: u32,

    /// Directory the emitted configuration's image paths reference.
    /// May differ from the download cache directory.
    #[serde(default = "default_images_dir")]
    pub images_dir: Utf8PathBuf,

    /// Card queue consumption order
    #[serde(default)]
    pub queue_order: QueueOrder,

    /// Command prefix bound to each button; the resolved image path is
    /// appended as its argument
    #[serde(default = "default_open_command")]
    pub open_command: String,
}

impl LayoutConfig {
    /// Assignable slots per folder (one slot is reserved for navigation).
    pub fn folder_capacity(&self) -> u32 {
        self.slots_per_folder.saturating_sub(1)
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            slots_per_folder: default_slots_per_folder(),
            reserved_slot_index: default_reserved_slot_index(),
            images_dir: default_images_dir(),
            queue_order: QueueOrder::default(),
            open_command: default_open_command(),
        }
    }
}

fn default_slots_per_folder() -> u32 {
    15
}

fn default_reserved_slot_index() -> u32 {
    4
}

fn default_images_dir() -> Utf8PathBuf {
    Utf8PathBuf::from("arkham/images")
}

fn default_open_command() -> String {
    if cfg!(windows) {
        r"bin\open_url_cmd.bat".to_string()
    } else {
        "bin/open_url.sh".to_string()
    }
}
