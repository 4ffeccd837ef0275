//! Host error types.

use thiserror::Error;

use crate::stage::Stage;

/// Errors surfaced by [`ControllerTree`](crate::tree::ControllerTree)
/// operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HostError {
    /// Controllers can only be added once the host has been created.
    #[error("host has not been created yet")]
    HostNotCreated,

    /// The host has been destroyed; no further operations are accepted.
    #[error("host is destroyed")]
    HostDestroyed,

    /// The id does not name a live controller (never added, or already
    /// removed).
    #[error("unknown controller id")]
    UnknownController,

    /// The requested stage cannot be reached from the current one.
    #[error("no path from stage {from:?} to {to:?}")]
    InvalidTransition {
        /// Stage the host was in.
        from: Stage,
        /// Stage that was requested.
        to: Stage,
    },
}
