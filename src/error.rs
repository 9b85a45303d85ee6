use std::collections::TryReserveError;

use thiserror::Error;

/// Errors surfaced by [`World`](crate::World) operations.
///
/// Numeric edge cases (zero-length vectors, exact overlap, near-parallel
/// axes) are resolved in-place by fallbacks and never surface here.
#[derive(Debug, Error)]
pub enum WorldError {
    /// The body array or the contact buffer could not grow.
    #[error("out of memory: {0}")]
    OutOfMemory(#[from] TryReserveError),
}
