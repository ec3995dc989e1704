use std::rc::Rc;

use log::debug;

use crate::config;
use crate::content::ServiceOffering;
use crate::host::{Host, HostError, Subscription};
use crate::state::store::{Dispatch, ViewAction};

/// The service detail overlay. At most one is ever shown; selecting another
/// service while open swaps the content in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ModalState {
    #[default]
    Closed,
    Open(Rc<ServiceOffering>),
}

/// Where a click inside the overlay landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Backdrop,
    Panel,
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open(_))
    }

    pub fn selected(&self) -> Option<&Rc<ServiceOffering>> {
        match self {
            ModalState::Open(service) => Some(service),
            ModalState::Closed => None,
        }
    }

    pub fn open(&mut self, service: Rc<ServiceOffering>) -> bool {
        if let ModalState::Open(current) = self {
            if Rc::ptr_eq(current, &service) {
                return false;
            }
        }
        *self = ModalState::Open(service);
        true
    }

    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        *self = ModalState::Closed;
        was_open
    }

    pub fn click(&mut self, target: ClickTarget) -> bool {
        match target {
            ClickTarget::Backdrop => self.close(),
            ClickTarget::Panel => false,
        }
    }
}

/// Owns the window Escape listener, which exists only while the overlay is open.
#[derive(Debug, Default)]
pub struct ModalController {
    escape: Option<Subscription>,
}

impl ModalController {
    /// Brings the listener in line with the overlay's visibility.
    pub fn sync(&mut self, host: &dyn Host, dispatch: &Dispatch, open: bool) -> Result<(), HostError> {
        if open && self.escape.is_none() {
            let dispatch = dispatch.clone();
            let subscription = host.on_key_down(Box::new(move |key| {
                if key == config::ESCAPE_KEY {
                    dispatch(ViewAction::CloseModal);
                }
            }))?;
            debug!("Escape listener registered");
            self.escape = Some(subscription);
        } else if !open {
            self.release();
        }
        Ok(())
    }

    #[cfg(test)]
    pub fn is_listening(&self) -> bool {
        self.escape.is_some()
    }

    pub fn dispose(&mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(subscription) = self.escape.take() {
            subscription.cancel();
            debug!("Escape listener released");
        }
    }
}
