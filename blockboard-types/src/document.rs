//! Schema document snapshots and provenance tagging.
//!
//! The document is a value, not a handle: every update replaces the whole
//! snapshot. Provenance records which editor produced the current text so
//! the embedded editor widget can skip re-deriving its own edits.

use serde::{Deserialize, Serialize};

/// Who produced the current schema text.
///
/// Not persisted identity state — it only governs whether the embedded
/// editor widget should re-derive its internal view from the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Provenance {
    /// The editor widget's visual tree editor changed the text.
    #[serde(rename = "external-tree-edit")]
    ExternalTreeEdit,
    /// The editor widget's raw text editor changed the text.
    #[serde(rename = "external-text-edit")]
    ExternalTextEdit,
    /// The sync engine reconciled the text against the block registry.
    #[serde(rename = "system")]
    System,
}

impl Provenance {
    /// Whether this provenance originated outside the sync engine.
    #[must_use]
    pub fn is_external(&self) -> bool {
        matches!(self, Provenance::ExternalTreeEdit | Provenance::ExternalTextEdit)
    }
}

/// A snapshot of the schema document held by the synchronization controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaDocument {
    /// The SDL text the engine reconciles against the block registry.
    pub text: String,
    /// Helper-library text consumed by the editor widget. Opaque to the
    /// engine: stored and surfaced, never parsed or mutated.
    pub auxiliary_library_text: String,
    /// Who produced `text`.
    pub provenance: Provenance,
}

impl SchemaDocument {
    /// Creates a system-provenance document with no auxiliary library.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            auxiliary_library_text: String::new(),
            provenance: Provenance::System,
        }
    }

    /// Creates an empty system-provenance document.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(String::new())
    }

    /// Returns a copy with different text and the given provenance,
    /// keeping the auxiliary library.
    #[must_use]
    pub fn with_text(&self, text: impl Into<String>, provenance: Provenance) -> Self {
        Self {
            text: text.into(),
            auxiliary_library_text: self.auxiliary_library_text.clone(),
            provenance,
        }
    }
}

impl Default for SchemaDocument {
    fn default() -> Self {
        Self::empty()
    }
}
