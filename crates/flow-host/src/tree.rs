//! The controller tree and its lifecycle dispatcher.

use tracing::{debug, trace};

use crate::controller::{Command, Controller, Scope};
use crate::error::HostError;
use crate::interaction::CancellationToken;
use crate::stage::{Event, Stage};

/// Handle to a controller inside a [`ControllerTree`].
///
/// Ids are generational: once a controller is removed, its id goes stale and
/// every operation on it reports [`HostError::UnknownController`], even if
/// the slot is later reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControllerId {
    index: u32,
    generation: u32,
}

struct Node {
    controller: Option<Box<dyn Controller>>,
    stage: Stage,
    parent: Option<ControllerId>,
    children: Vec<ControllerId>,
    token: CancellationToken,
    generation: u32,
}

/// A tree of [`Controller`]s driven by a single host stage.
///
/// The host itself climbs the stage ladder through
/// [`set_stage`](Self::set_stage); every transition is delivered to the
/// whole tree, one step at a time. Upward events (`Create`, `Start`,
/// `Resume`) reach a parent before its children in insertion order;
/// downward events (`Pause`, `Stop`, `Destroy`) reach children in reverse
/// insertion order before their parent.
///
/// Controllers can only be added while the host is between `Created` and
/// `Destroyed`. A controller added late is caught up: it receives every
/// missed transition, in order, before the add returns.
pub struct ControllerTree {
    slots: Vec<Option<Node>>,
    // Per-slot generation, bumped on release so stale ids miss.
    generations: Vec<u32>,
    free: Vec<usize>,
    roots: Vec<ControllerId>,
    stage: Stage,
    token: CancellationToken,
}

impl ControllerTree {
    /// Create an empty tree in the `Initialized` stage.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            generations: Vec::new(),
            free: Vec::new(),
            roots: Vec::new(),
            stage: Stage::Initialized,
            token: CancellationToken::new(),
        }
    }

    /// The host's current stage.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Cancellation token covering the whole host; cancelled when the host
    /// is destroyed.
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    /// Current stage of a controller, or `None` if the id is stale.
    pub fn stage_of(&self, id: ControllerId) -> Option<Stage> {
        self.node(id).map(|node| node.stage)
    }

    /// Whether the id names a live controller.
    pub fn contains(&self, id: ControllerId) -> bool {
        self.node(id).is_some()
    }

    /// Drive the host (and with it every controller) to `target`.
    ///
    /// The transition happens step by step: moving from `Created` to
    /// `Resumed` dispatches `Start` across the whole tree, then `Resume`.
    /// Reaching `Destroyed` tears the tree down; afterwards every operation
    /// reports [`HostError::HostDestroyed`].
    ///
    /// # Errors
    ///
    /// [`HostError::InvalidTransition`] when no stepwise path exists (there
    /// is no way back to `Initialized`, and an `Initialized` host has
    /// nothing to destroy).
    pub fn set_stage(&mut self, target: Stage) -> Result<(), HostError> {
        if self.stage == Stage::Destroyed {
            return if target == Stage::Destroyed {
                Ok(())
            } else {
                Err(HostError::HostDestroyed)
            };
        }

        // Nothing leads back to Initialized; bail before any step runs.
        if target == Stage::Initialized && self.stage != Stage::Initialized {
            return Err(HostError::InvalidTransition {
                from: self.stage,
                to: target,
            });
        }

        let from = self.stage;
        while let Some(event) = self.stage.next_toward(target) {
            self.stage = event.applied_stage();
            debug!(?event, stage = ?self.stage, "host transition");
            let mut roots = self.roots.clone();
            if !event.is_forward() {
                roots.reverse();
            }
            for root in roots {
                self.deliver(root, event);
            }
        }

        if self.stage != target {
            return Err(HostError::InvalidTransition { from, to: target });
        }

        if self.stage == Stage::Destroyed {
            let roots = core::mem::take(&mut self.roots);
            for root in roots {
                self.release_subtree(root);
            }
            self.token.cancel();
        }
        Ok(())
    }

    /// Add a top-level controller, catching it up to the host stage.
    ///
    /// # Errors
    ///
    /// [`HostError::HostNotCreated`] before the host reaches `Created`,
    /// [`HostError::HostDestroyed`] after it is destroyed.
    pub fn add_root(
        &mut self,
        controller: impl Controller + 'static,
    ) -> Result<ControllerId, HostError> {
        self.attach(None, Box::new(controller))
    }

    /// Add a controller under `parent`, catching it up to the parent's
    /// stage.
    ///
    /// # Errors
    ///
    /// [`HostError::UnknownController`] when `parent` is stale.
    pub fn add_child(
        &mut self,
        parent: ControllerId,
        controller: impl Controller + 'static,
    ) -> Result<ControllerId, HostError> {
        self.attach(Some(parent), Box::new(controller))
    }

    /// Remove a controller and its whole subtree.
    ///
    /// The subtree is driven down to `Destroyed` first (children before
    /// parents), then detached. The host stage is unaffected.
    ///
    /// # Errors
    ///
    /// [`HostError::UnknownController`] when the id is stale.
    pub fn remove(&mut self, id: ControllerId) -> Result<(), HostError> {
        if self.node(id).is_none() {
            return Err(HostError::UnknownController);
        }
        self.remove_internal(id);
        Ok(())
    }

    fn node(&self, id: ControllerId) -> Option<&Node> {
        self.slots
            .get(id.index as usize)?
            .as_ref()
            .filter(|node| node.generation == id.generation)
    }

    fn node_mut(&mut self, id: ControllerId) -> Option<&mut Node> {
        self.slots
            .get_mut(id.index as usize)?
            .as_mut()
            .filter(|node| node.generation == id.generation)
    }

    fn attach(
        &mut self,
        parent: Option<ControllerId>,
        controller: Box<dyn Controller>,
    ) -> Result<ControllerId, HostError> {
        let (target, token) = match parent {
            None => match self.stage {
                Stage::Initialized => return Err(HostError::HostNotCreated),
                Stage::Destroyed => return Err(HostError::HostDestroyed),
                stage => (stage, self.token.child()),
            },
            Some(parent_id) => {
                let parent_node =
                    self.node(parent_id).ok_or(HostError::UnknownController)?;
                match parent_node.stage {
                    Stage::Initialized => return Err(HostError::HostNotCreated),
                    Stage::Destroyed => return Err(HostError::HostDestroyed),
                    stage => (stage, parent_node.token.child()),
                }
            }
        };

        let node = Node {
            controller: Some(controller),
            stage: Stage::Initialized,
            parent,
            children: Vec::new(),
            token,
            generation: 0,
        };
        let id = self.store(node);

        match parent {
            Some(parent_id) => {
                if let Some(parent_node) = self.node_mut(parent_id) {
                    parent_node.children.push(id);
                }
            }
            None => self.roots.push(id),
        }
        debug!(?id, ?parent, ?target, "controller attached");

        // Sticky catch-up: replay every transition the subtree missed.
        while let Some(event) = self
            .stage_of(id)
            .and_then(|stage| stage.next_toward(target))
        {
            self.deliver(id, event);
        }

        Ok(id)
    }

    // SAFETY: slot indices stay far below u32::MAX for any realistic tree.
    #[allow(clippy::cast_possible_truncation)]
    fn store(&mut self, mut node: Node) -> ControllerId {
        if let Some(index) = self.free.pop() {
            let generation = self.generations.get(index).copied().unwrap_or(0);
            node.generation = generation;
            let id = ControllerId {
                index: index as u32,
                generation,
            };
            if let Some(slot) = self.slots.get_mut(index) {
                *slot = Some(node);
            }
            id
        } else {
            let index = self.slots.len();
            self.slots.push(Some(node));
            self.generations.push(0);
            ControllerId {
                index: index as u32,
                generation: 0,
            }
        }
    }

    /// Deliver one event to a node and its subtree, honoring dispatch
    /// order. Nodes that no longer match the event's prior stage (removed,
    /// or already caught up) are skipped.
    fn deliver(&mut self, id: ControllerId, event: Event) {
        let Some(node) = self.node(id) else {
            return;
        };
        if node.stage != event.prior_stage() {
            return;
        }

        if event.is_forward() {
            self.apply_event(id, event);
            // Snapshot after the hook: children it just added are already
            // at the new stage and fail the prior-stage check above.
            let children = self
                .node(id)
                .map(|node| node.children.clone())
                .unwrap_or_default();
            for child in children {
                self.deliver(child, event);
            }
        } else {
            let children = node.children.clone();
            for child in children.into_iter().rev() {
                self.deliver(child, event);
            }
            self.apply_event(id, event);
        }
    }

    /// Advance one node's stage, run its hook, then apply whatever the hook
    /// queued.
    fn apply_event(&mut self, id: ControllerId, event: Event) {
        let Some(node) = self.node_mut(id) else {
            return;
        };
        node.stage = event.applied_stage();
        let token = node.token.clone();
        if event == Event::Destroy {
            token.cancel();
        }

        // Taking the controller out makes re-entry through commands safe:
        // nothing can reach this controller while its hook runs.
        let Some(mut controller) = node.controller.take() else {
            return;
        };
        trace!(?id, ?event, "dispatch");

        let mut commands = Vec::new();
        {
            let mut scope = Scope::new(id, token, &mut commands);
            match event {
                Event::Create => controller.on_create(&mut scope),
                Event::Start => controller.on_start(&mut scope),
                Event::Resume => controller.on_resume(&mut scope),
                Event::Pause => controller.on_pause(&mut scope),
                Event::Stop => controller.on_stop(&mut scope),
                Event::Destroy => controller.on_destroy(&mut scope),
            }
        }

        if let Some(node) = self.node_mut(id) {
            node.controller = Some(controller);
        }
        self.apply_commands(commands);
    }

    fn apply_commands(&mut self, commands: Vec<Command>) {
        for command in commands {
            match command {
                Command::AddChild { parent, controller } => {
                    if let Err(error) = self.attach(Some(parent), controller) {
                        debug!(?parent, %error, "queued add dropped");
                    }
                }
                Command::Remove { id } => self.remove_internal(id),
            }
        }
    }

    fn remove_internal(&mut self, id: ControllerId) {
        // Drive the subtree down first so every hook runs before detach.
        while let Some(event) = self
            .stage_of(id)
            .and_then(|stage| stage.next_toward(Stage::Destroyed))
        {
            self.deliver(id, event);
        }

        let Some(node) = self.node_mut(id) else {
            return;
        };
        // A node removed before creation has no hooks to unwind.
        if node.stage == Stage::Initialized {
            node.token.cancel();
        }
        node.stage = Stage::Destroyed;
        let parent = node.parent;

        match parent {
            Some(parent_id) => {
                if let Some(parent_node) = self.node_mut(parent_id) {
                    parent_node.children.retain(|child| *child != id);
                }
            }
            None => self.roots.retain(|root| *root != id),
        }

        self.release_subtree(id);
        debug!(?id, "controller removed");
    }

    fn release_subtree(&mut self, id: ControllerId) {
        let node = match self.slots.get_mut(id.index as usize) {
            Some(slot) if slot.as_ref().is_some_and(|n| n.generation == id.generation) => {
                slot.take()
            }
            _ => None,
        };
        let Some(node) = node else {
            return;
        };
        for child in node.children {
            self.release_subtree(child);
        }
        if let Some(generation) = self.generations.get_mut(id.index as usize) {
            *generation = generation.wrapping_add(1);
        }
        self.free.push(id.index as usize);
    }
}

impl Default for ControllerTree {
    fn default() -> Self {
        Self::new()
    }
}
