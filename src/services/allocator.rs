//! Button allocator - the core of the import pipeline.
//!
//! Assigns each card in an ordered list to exactly one button slot in exactly
//! one folder, honoring the per-folder capacity and the reserved navigation
//! slot, and records which cards could not be placed.
//!
//! # Slot forfeiture on skip
//!
//! Slots and queue positions are paired strictly one-to-one within a folder
//! pass: a popped card that cannot be placed (no code, or no image) is
//! dropped and its slot's turn passes. The slot is not re-filled from later
//! queue elements and the skipped card is never revisited. This keeps the
//! assignment a single forward walk over both the queue and the slots.

use crate::models::{Card, Folder, FolderEntry, LayoutConfig, QueueOrder, StreamDeckConfig, StreamDeckInfo};
use std::collections::VecDeque;

/// Result of one allocation pass.
#[derive(Debug, Clone)]
pub struct Allocation {
    /// The configuration to emit
    pub config: StreamDeckConfig,

    /// Cards assigned to a button slot
    pub placed: usize,

    /// Cards popped but ineligible (no code or no image)
    pub skipped: usize,

    /// Cards left in the queue after all primary folders were exhausted
    pub unplaced: usize,
}

/// Assigns an ordered card list onto Stream Deck folders and button slots.
pub struct ButtonAllocator {
    layout: LayoutConfig,
}

impl ButtonAllocator {
    pub fn new(layout: LayoutConfig) -> Self {
        Self { layout }
    }

    /// Allocate `cards` onto the `primary` folders.
    ///
    /// `secondary` folders are listed in the emitted main menu but not
    /// populated by this pass (reserved for manual use). The combined menu
    /// id list is primary-first and intentionally not deduplicated.
    ///
    /// The run never fails: over-capacity input yields a truncated
    /// configuration with a positive `unplaced` count.
    pub fn allocate(&self, cards: &[Card], primary: &[u32], secondary: &[u32]) -> Allocation {
        let mut queue: VecDeque<&Card> = cards.iter().collect();

        let eligible = cards.iter().filter(|c| c.is_placeable()).count();
        let capacity = primary.len() * self.layout.folder_capacity() as usize;
        if eligible > capacity {
            tracing::warn!(
                "Folder capacity exceeded ({} eligible cards / {} slots); output will be truncated",
                eligible,
                capacity
            );
        }

        let mut folder_list = Vec::new();
        let mut placed = 0;
        let mut skipped = 0;

        for &folder_id in primary {
            let mut folder_contents = Vec::new();

            for slot in 0..self.layout.slots_per_folder {
                if slot == self.layout.reserved_slot_index {
                    continue;
                }

                let Some(card) = self.pop(&mut queue) else {
                    break;
                };

                let Some(code) = card.code.as_deref() else {
                    tracing::info!("Skipping card without code");
                    skipped += 1;
                    continue;
                };

                let Some(image) = card.image_ref() else {
                    tracing::info!("Skipping card without image: {}", card.label());
                    skipped += 1;
                    continue;
                };

                folder_contents.push(self.build_entry(slot, code, image));
                placed += 1;
            }

            // A folder that received nothing is omitted entirely.
            if !folder_contents.is_empty() {
                folder_list.push(Folder {
                    main_folder_button_id: folder_id,
                    folder_contents,
                });
            }

            if queue.is_empty() {
                break;
            }
        }

        let unplaced = queue.len();
        if unplaced > 0 {
            tracing::warn!("{} cards could not be placed", unplaced);
        }

        let mut main_folder_button_id_list = Vec::with_capacity(primary.len() + secondary.len());
        main_folder_button_id_list.extend_from_slice(primary);
        main_folder_button_id_list.extend_from_slice(secondary);

        Allocation {
            config: StreamDeckConfig {
                streamdeck_info: StreamDeckInfo {
                    main_folder_button_id_list,
                },
                folder_list,
            },
            placed,
            skipped,
            unplaced,
        }
    }

    fn pop<'a>(&self, queue: &mut VecDeque<&'a Card>) -> Option<&'a Card> {
        match self.layout.queue_order {
            QueueOrder::FrontToBack => queue.pop_front(),
            QueueOrder::TailFirst => queue.pop_back(),
        }
    }

    fn build_entry(&self, slot: u32, code: &str, image_ref: &str) -> FolderEntry {
        let file_name = image_ref.rsplit('/').next().unwrap_or(image_ref);
        let image = self.layout.images_dir.join(file_name);
        let command = format!("{} {}", self.layout.open_command, image);

        FolderEntry {
            button_id: slot,
            image,
            text: code.to_string(),
            command,
        }
    }
}
