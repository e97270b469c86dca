//! Core type definitions for Blockboard.
//!
//! This crate defines the fundamental, canvas-agnostic types shared by the
//! schema synchronization engine and its collaborators:
//! - Block identifiers and block records (the canvas's view of a model)
//! - Schema documents with provenance tagging
//! - The project snapshot layout used for export/import
//!
//! Canvas geometry, node styling, and editor-widget internals belong to
//! their respective subsystems, not here.

mod block;
mod document;
mod snapshot;

pub use block::{Block, BlockId, BlockKind};
pub use document::{Provenance, SchemaDocument};
pub use snapshot::ProjectSnapshot;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unknown block kind: {0}")]
    UnknownBlockKind(String),
}
