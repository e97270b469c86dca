//! Error types for the sync engine.

use thiserror::Error;

/// Result type for sync operations.
pub type SyncResult<T> = Result<T, SyncError>;

/// Errors that can occur during a sync cycle.
///
/// Automatic (block-driven) sync swallows these and logs, retaining the
/// last good document. Interactive paths (import) propagate them so the
/// shell can report to the user.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SyncError {
    /// The schema text could not be parsed or the reconciled document
    /// could not be printed.
    #[error(transparent)]
    Sdl(#[from] blockboard_sdl::SdlError),
}
