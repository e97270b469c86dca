//! Block records — the canvas's authoritative description of a model.
//!
//! The sync engine treats blocks as read-only input: the canvas creates,
//! renames (same id), and deletes them. No two blocks share an id.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Opaque stable identifier for a block, assigned by the canvas.
///
/// Treated as an uninterpreted string by the engine; its only obligations
/// are stability across renames and uniqueness within a project.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(String);

impl BlockId {
    /// Creates a block ID from an existing string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the underlying string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BlockId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for BlockId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// The kind of a block on the canvas.
///
/// Command blocks expand to two schema types (input and result); every
/// other kind expands to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Trigger,
    Command,
    Event,
    View,
    Ui,
    Processor,
}

impl BlockKind {
    /// All kinds, in canvas palette order.
    pub const ALL: [BlockKind; 6] = [
        BlockKind::Trigger,
        BlockKind::Command,
        BlockKind::Event,
        BlockKind::View,
        BlockKind::Ui,
        BlockKind::Processor,
    ];

    /// Returns the lowercase wire name of this kind.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::Trigger => "trigger",
            BlockKind::Command => "command",
            BlockKind::Event => "event",
            BlockKind::View => "view",
            BlockKind::Ui => "ui",
            BlockKind::Processor => "processor",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlockKind {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "trigger" => Ok(BlockKind::Trigger),
            "command" => Ok(BlockKind::Command),
            "event" => Ok(BlockKind::Event),
            "view" => Ok(BlockKind::View),
            "ui" => Ok(BlockKind::Ui),
            "processor" => Ok(BlockKind::Processor),
            other => Err(crate::Error::UnknownBlockKind(other.to_string())),
        }
    }
}

/// A typed block on the canvas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Stable identifier, unchanged across renames.
    pub id: BlockId,
    /// Display title, user-editable at any time.
    pub title: String,
    /// The block's kind.
    pub kind: BlockKind,
}

impl Block {
    /// Creates a new block record.
    #[must_use]
    pub fn new(id: impl Into<BlockId>, title: impl Into<String>, kind: BlockKind) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            kind,
        }
    }
}
