//! The controller trait and the scope handed to its hooks.

use crate::interaction::CancellationToken;
use crate::tree::ControllerId;

/// A unit of screen logic driven by the host lifecycle.
///
/// Every hook has an empty default so implementors override only the
/// transitions they care about. Hooks run exactly once per transition.
pub trait Controller {
    /// The controller has entered `Created`.
    fn on_create(&mut self, _scope: &mut Scope<'_>) {}

    /// The controller has entered `Started`.
    fn on_start(&mut self, _scope: &mut Scope<'_>) {}

    /// The controller has entered `Resumed`.
    fn on_resume(&mut self, _scope: &mut Scope<'_>) {}

    /// The controller has left `Resumed` for `Started`.
    fn on_pause(&mut self, _scope: &mut Scope<'_>) {}

    /// The controller has left `Started` for `Created`.
    fn on_stop(&mut self, _scope: &mut Scope<'_>) {}

    /// The controller has entered `Destroyed`. Its cancellation token is
    /// already cancelled when this runs.
    fn on_destroy(&mut self, _scope: &mut Scope<'_>) {}
}

/// Tree mutation requested from inside a hook, applied after it returns.
pub(crate) enum Command {
    AddChild {
        parent: ControllerId,
        controller: Box<dyn Controller>,
    },
    Remove {
        id: ControllerId,
    },
}

/// Handle passed to every lifecycle hook.
///
/// Mutations requested here are deferred: they take effect right after the
/// current hook returns, in request order. This is what makes it safe to add
/// or remove controllers while a dispatch is walking the tree.
pub struct Scope<'a> {
    id: ControllerId,
    token: CancellationToken,
    commands: &'a mut Vec<Command>,
}

impl<'a> Scope<'a> {
    pub(crate) fn new(
        id: ControllerId,
        token: CancellationToken,
        commands: &'a mut Vec<Command>,
    ) -> Self {
        Self {
            id,
            token,
            commands,
        }
    }

    /// Id of the controller this hook belongs to.
    pub fn id(&self) -> ControllerId {
        self.id
    }

    /// Cancellation token scoped to this controller's lifetime.
    ///
    /// The token is cancelled when the controller is destroyed; clone it
    /// into any work started from a hook.
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    /// Queue a child controller under the current one.
    ///
    /// The child is attached and caught up to the host stage as soon as the
    /// current hook returns.
    pub fn add_child(&mut self, controller: impl Controller + 'static) {
        self.commands.push(Command::AddChild {
            parent: self.id,
            controller: Box::new(controller),
        });
    }

    /// Queue removal of a controller (typically one of this controller's
    /// children).
    pub fn remove(&mut self, id: ControllerId) {
        self.commands.push(Command::Remove { id });
    }

    /// Queue removal of the current controller.
    pub fn remove_self(&mut self) {
        let id = self.id;
        self.remove(id);
    }
}
