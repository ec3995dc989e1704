use log::debug;

use crate::host::{Host, HostError, Subscription};
use crate::state::store::{Dispatch, ViewAction};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub scroll_height: f64,
    pub viewport_height: f64,
}

/// Percentage of the scrollable range already passed, always within `0..=100`.
///
/// A page without overflow has nothing to scroll through and reports 0.
pub fn progress(metrics: ScrollMetrics) -> f64 {
    let scrollable = metrics.scroll_height - metrics.viewport_height;
    if scrollable.is_nan() || scrollable <= 0.0 {
        return 0.0;
    }
    sanitize(metrics.scroll_y / scrollable * 100.0)
}

/// Clamps to `0..=100`; NaN and infinities collapse to 0.
pub fn sanitize(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

pub struct ScrollTracker {
    subscription: Option<Subscription>,
}

impl ScrollTracker {
    pub fn attach(host: &dyn Host, dispatch: Dispatch) -> Result<Self, HostError> {
        let subscription = host.on_scroll(Box::new(move |metrics| {
            dispatch(ViewAction::Scrolled(progress(metrics)));
        }))?;
        debug!("Scroll tracker attached");
        Ok(Self {
            subscription: Some(subscription),
        })
    }

    #[cfg(test)]
    pub fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn dispose(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.cancel();
            debug!("Scroll tracker disposed");
        }
    }
}
