//! Kernel error types.

use thiserror::Error;
use uuid::Uuid;

/// Errors produced by the kernel core.
///
/// Authorization failures are never errors; they surface as boolean deny
/// results from the access evaluator.
#[derive(Debug, Error)]
pub enum KernelError {
    /// A parent chain in the menu table loops back on itself.
    #[error("menu item {id} is part of a parent cycle")]
    Cycle { id: Uuid },

    /// Failure propagated from the storage collaborator.
    #[error("storage error")]
    Store(#[from] anyhow::Error),
}

/// Result type alias using KernelError.
pub type KernelResult<T> = Result<T, KernelError>;
