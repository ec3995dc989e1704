use log::debug;

use crate::config;
use crate::host::{Host, HostError, Subscription};
use crate::state::store::{Dispatch, ViewAction};

/// Visibility of the single toast. Each trigger bumps the generation so an
/// older countdown can never hide a newer toast.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Toast {
    visible: bool,
    generation: u32,
}

impl Toast {
    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn trigger(&mut self) {
        self.visible = true;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Hides the toast if `generation` is still the current one.
    pub fn expire(&mut self, generation: u32) -> bool {
        if self.visible && self.generation == generation {
            self.visible = false;
            true
        } else {
            false
        }
    }
}

/// Keeps one countdown running for the visible toast.
#[derive(Debug, Default)]
pub struct ToastScheduler {
    pending: Option<(u32, Subscription)>,
}

impl ToastScheduler {
    pub fn sync(&mut self, host: &dyn Host, dispatch: &Dispatch, toast: Toast) -> Result<(), HostError> {
        if !toast.visible() {
            self.cancel();
            return Ok(());
        }
        if matches!(self.pending, Some((armed, _)) if armed == toast.generation()) {
            return Ok(());
        }

        // A retrigger restarts the countdown from now.
        self.cancel();
        let generation = toast.generation();
        let dispatch = dispatch.clone();
        let timer = host.set_timeout(
            config::TOAST_DURATION_MS,
            Box::new(move || dispatch(ViewAction::HideToast { generation })),
        )?;
        debug!("Toast countdown armed for generation {}", generation);
        self.pending = Some((generation, timer));
        Ok(())
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn dispose(&mut self) {
        self.cancel();
    }

    fn cancel(&mut self) {
        if let Some((generation, timer)) = self.pending.take() {
            timer.cancel();
            debug!("Toast countdown for generation {} cancelled", generation);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::fake::{FakeHost, TestStore};

    struct Harness {
        host: FakeHost,
        store: TestStore,
        scheduler: ToastScheduler,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                host: FakeHost::new(),
                store: TestStore::new(),
                scheduler: ToastScheduler::default(),
            }
        }

        /// What the page effect does after every render.
        fn sync(&mut self) {
            let toast = *self.store.get().toast();
            self.scheduler
                .sync(&self.host, &self.store.dispatcher(), toast)
                .unwrap();
        }

        fn trigger(&mut self) {
            self.store.dispatch(ViewAction::ShowToast);
            self.sync();
        }

        fn advance(&mut self, millis: u64) {
            self.host.advance(millis);
            self.sync();
        }

        fn visible(&self) -> bool {
            self.store.get().toast().visible()
        }
    }

    #[test]
    fn hides_after_the_duration() {
        let mut h = Harness::new();
        h.trigger();
        assert!(h.visible());
        h.advance(2_999);
        assert!(h.visible());
        h.advance(1);
        assert!(!h.visible());
        assert!(!h.scheduler.is_pending());
    }

    #[test]
    fn retrigger_restarts_the_countdown() {
        let mut h = Harness::new();
        h.trigger();
        h.advance(1_200);
        h.trigger();
        assert_eq!(h.host.pending_timers(), 1);

        // The first window would have ended at 3000.
        h.advance(1_800);
        assert_eq!(h.host.now(), 3_000);
        assert!(h.visible());

        h.advance(1_199);
        assert!(h.visible());
        h.advance(1);
        assert_eq!(h.host.now(), 4_200);
        assert!(!h.visible());
        assert_eq!(h.host.pending_timers(), 0);
    }

    #[test]
    fn stale_hide_is_ignored() {
        let mut toast = Toast::default();
        toast.trigger();
        let first = toast.generation();
        toast.trigger();
        assert!(!toast.expire(first));
        assert!(toast.visible());
        assert!(toast.expire(toast.generation()));
    }

    #[test]
    fn dispose_cancels_the_pending_countdown() {
        let mut h = Harness::new();
        h.trigger();
        h.scheduler.dispose();
        assert_eq!(h.host.pending_timers(), 0);

        h.host.advance(10_000);
        // Nothing hid it: the owner was torn down first.
        assert!(h.visible());
    }
}
