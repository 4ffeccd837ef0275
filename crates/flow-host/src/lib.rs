//! Controller host: a lifecycle tree for screen logic.
//!
//! A [`ControllerTree`] owns a tree of [`Controller`]s and drives them
//! through the stage ladder `Initialized -> Created -> Started -> Resumed`
//! and back down to `Destroyed`, one step at a time. Upward events reach a
//! parent before its children; downward events reach children before their
//! parent.
//!
//! Controllers react to transitions through hooks that receive a [`Scope`].
//! Mutations requested from inside a hook (adding or removing controllers)
//! are queued on the scope and applied after the hook returns, so a hook can
//! freely reshape the tree without invalidating the dispatch in progress.
//!
//! Controllers added while the host is already past `Initialized` are caught
//! up immediately: the new subtree is driven to the host's current stage
//! before the add call returns.

pub mod controller;
pub mod error;
pub mod interaction;
pub mod stage;
pub mod tree;

pub use controller::{Controller, Scope};
pub use error::HostError;
pub use interaction::{CancellationToken, ClickFilter};
pub use stage::{Event, Stage};
pub use tree::{ControllerId, ControllerTree};
