// arkdeck - ArkhamDB card importer and Stream Deck configuration generator
//
// This is the library crate containing the core business logic and data structures.
// The binary crate (main.rs) provides the CLI entry point.

pub mod cli;
pub mod logging;
pub mod models;
pub mod services;

// Re-export commonly used types for convenience
pub use models::{Card, Deck, LayoutConfig, QueueOrder, StreamDeckConfig};
pub use services::{Allocation, ArkhamDbClient, ButtonAllocator, CardSource, ImageCache};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
