//! Configuration emitter.
//!
//! Serializes a [`StreamDeckConfig`] into the JSON format the Stream Deck
//! driver reads. `emit` is pure; `write_config` is the file-writing glue
//! used by the binary (the destination is overwritten unconditionally).

use crate::models::StreamDeckConfig;
use anyhow::{Context, Result};
use camino::Utf8Path;
use std::fs;

/// Serialize the configuration to JSON bytes.
pub fn emit(config: &StreamDeckConfig) -> Result<Vec<u8>> {
    serde_json::to_vec_pretty(config).context("Failed to serialize Stream Deck configuration")
}

/// Serialize the configuration and overwrite `path` with it.
pub fn write_config(config: &StreamDeckConfig, path: &Utf8Path) -> Result<()> {
    let bytes = emit(config)?;
    fs::write(path, bytes)
        .with_context(|| format!("Failed to write Stream Deck configuration: {}", path))?;

    tracing::info!("Wrote Stream Deck configuration to {}", path);
    Ok(())
}
