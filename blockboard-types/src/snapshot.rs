//! Project snapshot — the export/import payload.
//!
//! The schema text and the block list are the two fields serialized together
//! for file export. File I/O itself belongs to the application shell; this
//! crate only defines the layout.

use crate::{Block, Result};
use serde::{Deserialize, Serialize};

/// Exported project state: schema text plus the block list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSnapshot {
    /// The schema document text at export time.
    pub schema: String,
    /// The editor-widget helper library at export time.
    #[serde(default)]
    pub auxiliary_library: String,
    /// All blocks visible on the canvas at export time.
    pub blocks: Vec<Block>,
}

impl ProjectSnapshot {
    /// Creates a snapshot from its parts.
    #[must_use]
    pub fn new(schema: impl Into<String>, blocks: Vec<Block>) -> Self {
        Self {
            schema: schema.into(),
            auxiliary_library: String::new(),
            blocks,
        }
    }

    /// Serializes the snapshot to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserializes a snapshot from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
