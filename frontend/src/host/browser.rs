use gloo_timers::callback::Timeout;
use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, KeyboardEvent, Window};

use super::{
    Host, HostError, KeyHandler, ScrollHandler, Subscription, TimeoutHandler, VisibilityHandler,
};
use crate::state::scroll::ScrollMetrics;

impl From<JsValue> for HostError {
    fn from(value: JsValue) -> Self {
        HostError::Js(format!("{:?}", value))
    }
}

#[derive(Clone)]
pub struct BrowserHost {
    window: Window,
}

impl BrowserHost {
    pub fn new() -> Result<Self, HostError> {
        let window = web_sys::window().ok_or(HostError::NoWindow)?;
        Ok(Self { window })
    }

    /// Runs `attach` against the live window, logging instead of failing.
    /// A missing listener only means the effect stays inactive.
    pub fn attach<T>(what: &str, attach: impl FnOnce(&BrowserHost) -> Result<T, HostError>) -> Option<T> {
        match BrowserHost::new().and_then(|host| attach(&host)) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!("Could not attach {}: {}", what, err);
                None
            }
        }
    }

    fn listen<T>(&self, event: &'static str, callback: Closure<T>) -> Result<Subscription, HostError>
    where
        T: ?Sized + 'static,
    {
        self.window
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        let window = self.window.clone();
        Ok(Subscription::new(move || {
            if let Err(err) =
                window.remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            {
                warn!("Failed to remove {} listener: {:?}", event, err);
            }
            drop(callback);
        }))
    }
}

fn read_scroll_metrics(window: &Window) -> Option<ScrollMetrics> {
    let root = window.document()?.document_element()?;
    Some(ScrollMetrics {
        scroll_y: window.scroll_y().ok()?,
        scroll_height: f64::from(root.scroll_height()),
        viewport_height: f64::from(root.client_height()),
    })
}

impl Host for BrowserHost {
    fn on_key_down(&self, mut handler: KeyHandler) -> Result<Subscription, HostError> {
        let callback = Closure::<dyn FnMut(KeyboardEvent)>::wrap(Box::new(move |e: KeyboardEvent| {
            handler(&e.key());
        }));
        self.listen("keydown", callback)
    }

    fn on_scroll(&self, mut handler: ScrollHandler) -> Result<Subscription, HostError> {
        let window = self.window.clone();
        let callback = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            if let Some(metrics) = read_scroll_metrics(&window) {
                handler(metrics);
            }
        }));
        self.listen("scroll", callback)
    }

    fn set_timeout(&self, millis: u32, handler: TimeoutHandler) -> Result<Subscription, HostError> {
        // Dropping the Timeout clears it.
        let timeout = Timeout::new(millis, handler);
        Ok(Subscription::new(move || drop(timeout)))
    }

    fn observe_sections(
        &self,
        ids: &[&str],
        threshold: f64,
        mut handler: VisibilityHandler,
    ) -> Result<Subscription, HostError> {
        let document = self.window.document().ok_or(HostError::NoDocument)?;

        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::wrap(Box::new(
            move |entries: Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if entry.is_intersecting() {
                        handler(&entry.target().id(), entry.intersection_ratio());
                    }
                }
            },
        ));

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

        for id in ids {
            match document.get_element_by_id(id) {
                Some(element) => observer.observe(&element),
                None => debug!("No element with id {} to observe", id),
            }
        }

        Ok(Subscription::new(move || {
            observer.disconnect();
            drop(callback);
        }))
    }
}
