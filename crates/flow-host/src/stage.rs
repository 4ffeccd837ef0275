//! Lifecycle stages and the events that move between them.

/// A controller's position on the lifecycle ladder.
///
/// Stages are ordered: `Destroyed < Initialized < Created < Started <
/// Resumed`. `Destroyed` is terminal; a destroyed controller never receives
/// another event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    /// Torn down. Terminal.
    Destroyed,
    /// Constructed but not yet part of a live tree.
    Initialized,
    /// `on_create` has run.
    Created,
    /// Visible but not in the foreground.
    Started,
    /// In the foreground.
    Resumed,
}

/// A single lifecycle transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// `Initialized -> Created`.
    Create,
    /// `Created -> Started`.
    Start,
    /// `Started -> Resumed`.
    Resume,
    /// `Resumed -> Started`.
    Pause,
    /// `Started -> Created`.
    Stop,
    /// `Created -> Destroyed`.
    Destroy,
}

impl Event {
    /// The stage a controller must be in for this event to apply.
    pub fn prior_stage(self) -> Stage {
        match self {
            Event::Create => Stage::Initialized,
            Event::Start => Stage::Created,
            Event::Resume => Stage::Started,
            Event::Pause => Stage::Resumed,
            Event::Stop => Stage::Started,
            Event::Destroy => Stage::Created,
        }
    }

    /// The stage a controller lands in after this event.
    pub fn applied_stage(self) -> Stage {
        match self {
            Event::Create => Stage::Created,
            Event::Start => Stage::Started,
            Event::Resume => Stage::Resumed,
            Event::Pause => Stage::Started,
            Event::Stop => Stage::Created,
            Event::Destroy => Stage::Destroyed,
        }
    }

    /// Whether this event climbs the ladder (parent-before-children
    /// dispatch) rather than descending it (children-before-parent).
    pub fn is_forward(self) -> bool {
        matches!(self, Event::Create | Event::Start | Event::Resume)
    }
}

impl Stage {
    /// The single event that moves one step from `self` toward `target`.
    ///
    /// Returns `None` when already at the target or when no legal step
    /// exists (`Destroyed` is terminal, and nothing leads back to
    /// `Initialized`).
    pub fn next_toward(self, target: Stage) -> Option<Event> {
        if self == target {
            return None;
        }

        if self < target {
            match self {
                Stage::Initialized => Some(Event::Create),
                Stage::Created => Some(Event::Start),
                Stage::Started => Some(Event::Resume),
                Stage::Destroyed | Stage::Resumed => None,
            }
        } else {
            match self {
                Stage::Resumed => Some(Event::Pause),
                Stage::Started => Some(Event::Stop),
                Stage::Created => Some(Event::Destroy),
                // Initialized has nothing to unwind.
                Stage::Initialized | Stage::Destroyed => None,
            }
        }
    }
}
