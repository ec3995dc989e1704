//! Deterministic stand-in for the browser: a manual clock and an in-memory
//! listener registry, plus a store that applies actions synchronously.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use yew::Reducible;

use super::{
    Host, HostError, KeyHandler, ScrollHandler, Subscription, TimeoutHandler, VisibilityHandler,
};
use crate::state::scroll::ScrollMetrics;
use crate::state::store::{Dispatch, ViewAction, ViewState};

struct Observer {
    ids: Vec<String>,
    threshold: f64,
    handler: VisibilityHandler,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    now: u64,
    keys: BTreeMap<u64, KeyHandler>,
    scrolls: BTreeMap<u64, ScrollHandler>,
    timers: BTreeMap<u64, (u64, TimeoutHandler)>,
    observers: BTreeMap<u64, Observer>,
}

impl Registry {
    fn allocate(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Clone, Default)]
pub struct FakeHost {
    inner: Rc<RefCell<Registry>>,
}

impl FakeHost {
    pub fn new() -> Self {
        Self::default()
    }

    fn subscription(&self, id: u64, remove: fn(&mut Registry, u64)) -> Subscription {
        let registry: Weak<RefCell<Registry>> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(registry) = registry.upgrade() {
                remove(&mut registry.borrow_mut(), id);
            }
        })
    }

    pub fn now(&self) -> u64 {
        self.inner.borrow().now
    }

    pub fn key_listeners(&self) -> usize {
        self.inner.borrow().keys.len()
    }

    pub fn scroll_listeners(&self) -> usize {
        self.inner.borrow().scrolls.len()
    }

    pub fn pending_timers(&self) -> usize {
        self.inner.borrow().timers.len()
    }

    pub fn observers(&self) -> usize {
        self.inner.borrow().observers.len()
    }

    /// Delivers a key press to every live listener; returns how many ran.
    pub fn press_key(&self, key: &str) -> usize {
        let mut inner = self.inner.borrow_mut();
        for handler in inner.keys.values_mut() {
            handler(key);
        }
        inner.keys.len()
    }

    pub fn scroll(&self, metrics: ScrollMetrics) -> usize {
        let mut inner = self.inner.borrow_mut();
        for handler in inner.scrolls.values_mut() {
            handler(metrics);
        }
        inner.scrolls.len()
    }

    /// Mirrors the browser observer: entries below the threshold are not reported.
    pub fn intersect(&self, id: &str, ratio: f64) -> usize {
        let mut inner = self.inner.borrow_mut();
        let mut delivered = 0;
        for observer in inner.observers.values_mut() {
            if ratio >= observer.threshold && observer.ids.iter().any(|observed| observed == id) {
                (observer.handler)(id, ratio);
                delivered += 1;
            }
        }
        delivered
    }

    /// Moves the clock forward, firing due timers in deadline order.
    pub fn advance(&self, millis: u64) {
        let target = self.now() + millis;
        loop {
            let due = {
                let mut inner = self.inner.borrow_mut();
                let next = inner
                    .timers
                    .iter()
                    .filter(|(_, (at, _))| *at <= target)
                    .min_by_key(|(id, (at, _))| (*at, **id))
                    .map(|(id, _)| *id);
                match next.and_then(|id| inner.timers.remove(&id)) {
                    Some((at, handler)) => {
                        inner.now = at;
                        Some(handler)
                    }
                    None => None,
                }
            };
            match due {
                Some(handler) => handler(),
                None => break,
            }
        }
        self.inner.borrow_mut().now = target;
    }
}

impl Host for FakeHost {
    fn on_key_down(&self, handler: KeyHandler) -> Result<Subscription, HostError> {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.allocate();
            inner.keys.insert(id, handler);
            id
        };
        Ok(self.subscription(id, |registry, id| {
            registry.keys.remove(&id);
        }))
    }

    fn on_scroll(&self, handler: ScrollHandler) -> Result<Subscription, HostError> {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.allocate();
            inner.scrolls.insert(id, handler);
            id
        };
        Ok(self.subscription(id, |registry, id| {
            registry.scrolls.remove(&id);
        }))
    }

    fn set_timeout(&self, millis: u32, handler: TimeoutHandler) -> Result<Subscription, HostError> {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.allocate();
            let due = inner.now + u64::from(millis);
            inner.timers.insert(id, (due, handler));
            id
        };
        Ok(self.subscription(id, |registry, id| {
            registry.timers.remove(&id);
        }))
    }

    fn observe_sections(
        &self,
        ids: &[&str],
        threshold: f64,
        handler: VisibilityHandler,
    ) -> Result<Subscription, HostError> {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.allocate();
            inner.observers.insert(
                id,
                Observer {
                    ids: ids.iter().map(|id| id.to_string()).collect(),
                    threshold,
                    handler,
                },
            );
            id
        };
        Ok(self.subscription(id, |registry, id| {
            registry.observers.remove(&id);
        }))
    }
}

/// Applies actions as soon as they are dispatched, like a reducer hook
/// without the render in between.
#[derive(Clone)]
pub struct TestStore {
    state: Rc<RefCell<Rc<ViewState>>>,
}

impl TestStore {
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(Rc::new(ViewState::default()))),
        }
    }

    pub fn dispatcher(&self) -> Dispatch {
        let state = self.state.clone();
        Rc::new(move |action: ViewAction| {
            let current = state.borrow().clone();
            let next = current.reduce(action);
            *state.borrow_mut() = next;
        })
    }

    pub fn dispatch(&self, action: ViewAction) {
        (self.dispatcher())(action);
    }

    pub fn get(&self) -> Rc<ViewState> {
        self.state.borrow().clone()
    }
}
