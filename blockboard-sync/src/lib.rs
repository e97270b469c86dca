//! Schema synchronization engine for Blockboard.
//!
//! Keeps the schema document consistent with the canvas's block registry as
//! blocks are added, renamed, or removed, without destroying hand-edited
//! schema content.
//!
//! # Components
//!
//! - **naming**: derives schema type names from block titles
//! - **plan**: diffs required types (from blocks) against managed types
//!   (from identity bindings) into a [`ChangePlan`]
//! - **apply**: applies a plan to a parsed document — renames, then
//!   additions, then removals
//! - **controller**: owns the current [`SchemaDocument`], orchestrates
//!   parse → plan → apply → print, and tags provenance so the embedded
//!   editor widget can suppress feedback loops
//!
//! # Sync Cycle
//!
//! 1. The canvas reports its current block list
//! 2. The controller parses the most recently stored schema text
//! 3. The plan computer keys managed types by `(block_id, role)` and
//!    classifies each required type as a no-op, rename, or addition;
//!    orphaned managed types become removals
//! 4. The applier rewrites the AST (preserving hand-written fields,
//!    comments, and unmanaged types)
//! 5. The printed text is stored with `system` provenance
//!
//! Every step is synchronous; a failed cycle leaves the prior document
//! untouched.
//!
//! # Example
//!
//! ```
//! use blockboard_sync::{SyncController, ControllerConfig};
//! use blockboard_types::{Block, BlockKind};
//!
//! let mut controller = SyncController::new(ControllerConfig::default());
//! controller.sync(&[Block::new("b1", "Checkout", BlockKind::Event)]);
//! assert!(controller.schema_text().contains("type Checkout"));
//! ```

mod apply;
mod config;
mod controller;
mod error;
pub mod naming;
mod plan;

pub use apply::apply_plan;
pub use config::ControllerConfig;
pub use controller::SyncController;
pub use error::{SyncError, SyncResult};
pub use plan::{
    compute_plan, find_orphans, ChangePlan, PlannedAddition, PlannedRemoval, PlannedRename,
};
