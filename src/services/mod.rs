//! Services module - Pure business logic for the card import pipeline.
//!
//! This module contains all the core logic for turning ArkhamDB card data into
//! a Stream Deck configuration. The services are **framework-agnostic** and
//! have no dependencies on the CLI layer, making them testable and reusable.
//!
//! # Components
//!
//! - [`ArkhamDbClient`]: Blocking HTTP client for the ArkhamDB public API
//!   (single card, pack, decklist). Behind the [`CardSource`] trait so the
//!   import orchestration can be tested without a network.
//!
//! - [`collect_cards`] / [`sort_cards`]: Gather one card list from a deck id,
//!   explicit card ids, and pack codes, then apply the legacy sort policy
//!   (descending by card code). Duplicates across sources are kept.
//!
//! - [`ImageCache`]: Download-if-absent cache for card images. Idempotent;
//!   a file is written only after the full body has been fetched, so a
//!   failed download never leaves a partial file.
//!
//! - [`ButtonAllocator`]: The core. Assigns each card to exactly one button
//!   slot in exactly one folder, honoring the per-folder capacity and the
//!   reserved navigation slot, and reports skipped and unplaced cards.
//!
//! - [`emitter`]: Serializes the allocation into the driver's JSON
//!   configuration format.
//!
//! # Design Philosophy
//!
//! - **Synchronous**: one finite input list per run, every network call
//!   blocks until it completes or fails
//! - **Stateless**: all inputs are explicit parameters or constructor fields
//! - **Testable**: no hidden dependencies, no global constants

pub mod allocator;
pub mod client;
pub mod emitter;
pub mod image_cache;
pub mod import;

pub use allocator::{Allocation, ButtonAllocator};
pub use client::{ArkhamDbClient, CardSource, FetchError};
pub use image_cache::{DownloadError, ImageCache};
pub use import::{collect_cards, sort_cards};
