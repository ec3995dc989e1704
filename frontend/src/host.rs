//! Window-level listeners and timers as owned subscriptions.
//!
//! Every registration hands back a [`Subscription`]. Whoever holds it owns the
//! listener; releasing it (explicitly or by dropping) detaches the listener so
//! nothing fires after its owner is gone.

use thiserror::Error;

use crate::state::scroll::ScrollMetrics;

pub mod browser;
#[cfg(test)]
pub mod fake;

pub type KeyHandler = Box<dyn FnMut(&str)>;
pub type ScrollHandler = Box<dyn FnMut(ScrollMetrics)>;
pub type VisibilityHandler = Box<dyn FnMut(&str, f64)>;
pub type TimeoutHandler = Box<dyn FnOnce()>;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("browser window is not available")]
    NoWindow,
    #[error("document is not available")]
    NoDocument,
    #[error("javascript error: {0}")]
    Js(String),
}

/// Release handle for a registered listener or pending timer.
///
/// The release action runs at most once: either through [`Subscription::cancel`]
/// or when the handle is dropped.
#[must_use = "dropping a subscription releases it immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    pub fn cancel(mut self) {
        self.run_release();
    }

    fn run_release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run_release();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

/// The environment the page runs in. Handlers passed here must only enqueue
/// view actions; they never touch other subscriptions.
pub trait Host {
    fn on_key_down(&self, handler: KeyHandler) -> Result<Subscription, HostError>;

    fn on_scroll(&self, handler: ScrollHandler) -> Result<Subscription, HostError>;

    fn set_timeout(&self, millis: u32, handler: TimeoutHandler)
        -> Result<Subscription, HostError>;

    /// Reports `(section id, visible ratio)` for every observed section that
    /// intersects the viewport at or past `threshold`.
    fn observe_sections(
        &self,
        ids: &[&str],
        threshold: f64,
        handler: VisibilityHandler,
    ) -> Result<Subscription, HostError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn release_runs_once_on_cancel() {
        let released = Rc::new(Cell::new(0));
        let counter = released.clone();
        let subscription = Subscription::new(move || counter.set(counter.get() + 1));
        subscription.cancel();
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn release_runs_on_drop() {
        let released = Rc::new(Cell::new(0));
        {
            let counter = released.clone();
            let _subscription = Subscription::new(move || counter.set(counter.get() + 1));
        }
        assert_eq!(released.get(), 1);
    }
}
