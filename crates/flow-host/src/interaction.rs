//! Interaction guards: input debouncing and cooperative cancellation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Debounce filter for user-triggered actions.
///
/// The filter keeps the timestamp of the last accepted action as explicit
/// state; an action within `min_interval` of it is rejected. The clock is
/// injected through [`accept_at`](Self::accept_at) so behavior is fully
/// deterministic under test.
#[derive(Debug, Clone)]
pub struct ClickFilter {
    min_interval: Duration,
    last_accepted: Option<Instant>,
}

impl ClickFilter {
    /// Interval used by [`with_default_interval`](Self::with_default_interval).
    pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(500);

    /// Create a filter with the given minimum interval between accepted
    /// actions.
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_accepted: None,
        }
    }

    /// Create a filter with the default 500ms interval.
    pub fn with_default_interval() -> Self {
        Self::new(Self::DEFAULT_INTERVAL)
    }

    /// Decide whether an action happening now is accepted.
    pub fn accept(&mut self) -> bool {
        self.accept_at(Instant::now())
    }

    /// Decide whether an action happening at `now` is accepted.
    ///
    /// Accepting records `now` as the new debounce anchor; rejecting leaves
    /// the anchor untouched, so a burst of rapid actions lets exactly the
    /// first one through.
    pub fn accept_at(&mut self, now: Instant) -> bool {
        let accepted = match self.last_accepted {
            None => true,
            Some(last) => now.saturating_duration_since(last) >= self.min_interval,
        };

        if accepted {
            self.last_accepted = Some(now);
        }
        accepted
    }

    /// Forget the last accepted action; the next one is always accepted.
    pub fn reset(&mut self) {
        self.last_accepted = None;
    }
}

struct TokenInner {
    cancelled: AtomicBool,
    parent: Option<CancellationToken>,
}

/// Cooperative cancellation flag, scoped to a controller's lifetime.
///
/// Tokens form a chain: a child token reports cancelled when any ancestor
/// is cancelled, so destroying a parent controller cancels work started by
/// its whole subtree. Cancellation is one-way and sticky.
///
/// Cloning is cheap and shares the same flag.
#[derive(Clone)]
pub struct CancellationToken {
    inner: Arc<TokenInner>,
}

impl CancellationToken {
    /// Create an independent root token.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(TokenInner {
                cancelled: AtomicBool::new(false),
                parent: None,
            }),
        }
    }

    /// Create a token that is cancelled when either it or `self` is.
    pub fn child(&self) -> Self {
        Self {
            inner: Arc::new(TokenInner {
                cancelled: AtomicBool::new(false),
                parent: Some(self.clone()),
            }),
        }
    }

    /// Cancel this token (and transitively every child token).
    pub fn cancel(&self) {
        self.inner.cancelled.store(true, Ordering::Release);
    }

    /// Whether this token or any of its ancestors has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        if self.inner.cancelled.load(Ordering::Acquire) {
            return true;
        }
        match &self.inner.parent {
            Some(parent) => parent.is_cancelled(),
            None => false,
        }
    }
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for CancellationToken {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CancellationToken")
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}
