//! Data models for the arkdeck application.
//!
//! This module contains all the core data structures used throughout the application:
//! - [`Card`]: A single card record from the ArkhamDB API, with optional image references
//! - [`Deck`]: A decklist response holding an ordered map of card slots
//! - [`LayoutConfig`]: Explicit allocator configuration (slot count, reserved index, paths)
//! - [`StreamDeckConfig`]: The persisted Stream Deck driver configuration schema
//!
//! # Architecture Note
//!
//! The models are designed to be:
//! - **Serializable**: API shapes derive `Deserialize`, the emitted configuration
//!   derives `Serialize`, with `#[serde(rename)]` matching the on-wire/on-disk names
//! - **Run-scoped**: Card and Deck values are built fresh per API response and live
//!   only for the duration of one run; nothing is persisted besides the emitted file

pub mod card;
pub mod layout;
pub mod streamdeck;

pub use card::{Card, Deck};
pub use layout::{LayoutConfig, QueueOrder};
pub use streamdeck::{Folder, FolderEntry, StreamDeckConfig, StreamDeckInfo};
