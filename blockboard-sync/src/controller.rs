//! Synchronization controller.
//!
//! Owns the authoritative [`SchemaDocument`] and orchestrates one sync
//! cycle: parse → plan → apply → print → store. Single-writer: either the
//! canvas drives [`SyncController::sync`] or the editor widget drives
//! [`SyncController::update_document`]; nothing runs in the background.

use crate::apply::apply_plan;
use crate::config::ControllerConfig;
use crate::error::SyncResult;
use crate::plan::compute_plan;
use blockboard_sdl::{parse, print};
use blockboard_types::{Block, ProjectSnapshot, Provenance, SchemaDocument};
use tracing::{debug, info, warn};

/// Owns the schema document and reconciles it against the block registry.
#[derive(Debug, Clone)]
pub struct SyncController {
    config: ControllerConfig,
    document: SchemaDocument,
    /// The block list from the most recent sync, paired with the schema
    /// text on export.
    blocks: Vec<Block>,
}

impl SyncController {
    /// Creates a controller holding an empty document.
    #[must_use]
    pub fn new(config: ControllerConfig) -> Self {
        Self {
            config,
            document: SchemaDocument::empty(),
            blocks: Vec::new(),
        }
    }

    /// Creates a controller around an existing document (e.g. a loaded
    /// project).
    #[must_use]
    pub fn with_document(config: ControllerConfig, document: SchemaDocument) -> Self {
        Self {
            config,
            document,
            blocks: Vec::new(),
        }
    }

    /// The current document snapshot.
    #[must_use]
    pub fn document(&self) -> &SchemaDocument {
        &self.document
    }

    /// The current schema text (export accessor for the canvas).
    #[must_use]
    pub fn schema_text(&self) -> &str {
        &self.document.text
    }

    /// Reconciles the document with the canvas's current block list.
    ///
    /// Automatic path: errors are logged and swallowed, and the prior
    /// document is retained unchanged. This runs on every block-registry
    /// change and must never take down the editing session.
    pub fn sync(&mut self, blocks: &[Block]) {
        if let Err(error) = self.try_sync(blocks) {
            warn!(%error, "sync failed; keeping previous schema document");
        }
    }

    /// Reconciliation with errors propagated — the interactive path used
    /// by [`SyncController::import`].
    pub fn try_sync(&mut self, blocks: &[Block]) -> SyncResult<()> {
        // Always diff against the most recently stored text. Diffing a
        // stale snapshot would silently discard an external edit.
        let doc = parse(&self.document.text)?;
        let plan = compute_plan(&doc, blocks);
        if plan.is_empty() {
            debug!(blocks = blocks.len(), "schema already in sync");
            self.blocks = blocks.to_vec();
            return Ok(());
        }

        let reconciled = apply_plan(doc, &plan, &self.config);
        let text = print(&reconciled)?;
        info!(%plan, "reconciled schema with block registry");
        self.document = self.document.with_text(text, Provenance::System);
        // recorded only once the cycle has succeeded, so export never
        // pairs the retained document with a block list that never synced
        self.blocks = blocks.to_vec();
        Ok(())
    }

    /// Entry point for externally originated edits (editor widget, import).
    ///
    /// External provenance is preserved so the widget can recognize its own
    /// edit coming back and skip re-deriving its internal view; anything
    /// else is coerced to system provenance.
    pub fn update_document(&mut self, new_doc: SchemaDocument) {
        let provenance = if new_doc.provenance.is_external() {
            new_doc.provenance
        } else {
            Provenance::System
        };
        debug!(?provenance, "document updated externally");
        self.document = SchemaDocument {
            provenance,
            ..new_doc
        };
    }

    /// Restores a project snapshot and runs one sync pass.
    ///
    /// Interactive path: a malformed schema propagates as an error for
    /// user-facing reporting, and the controller keeps its prior state.
    pub fn import(&mut self, snapshot: ProjectSnapshot) -> SyncResult<()> {
        let previous_document = std::mem::replace(
            &mut self.document,
            SchemaDocument {
                text: snapshot.schema,
                auxiliary_library_text: snapshot.auxiliary_library,
                provenance: Provenance::System,
            },
        );
        let previous_blocks = std::mem::take(&mut self.blocks);

        if let Err(error) = self.try_sync(&snapshot.blocks) {
            self.document = previous_document;
            self.blocks = previous_blocks;
            return Err(error);
        }
        Ok(())
    }

    /// Exports the schema text paired with the last-synced block list.
    #[must_use]
    pub fn export(&self) -> ProjectSnapshot {
        ProjectSnapshot {
            schema: self.document.text.clone(),
            auxiliary_library: self.document.auxiliary_library_text.clone(),
            blocks: self.blocks.clone(),
        }
    }
}

impl Default for SyncController {
    fn default() -> Self {
        Self::new(ControllerConfig::default())
    }
}
