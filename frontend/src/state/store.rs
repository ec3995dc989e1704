//! The single view-state value owned by the landing page.
//!
//! All mutation goes through [`ViewAction`]s; an action that changes nothing
//! hands back the same `Rc` so Yew skips the re-render.

use std::rc::Rc;

use yew::Reducible;

use crate::content::ServiceOffering;
use crate::state::accordion::Accordion;
use crate::state::modal::{ClickTarget, ModalState};
use crate::state::reveal::{RevealedSections, SectionId};
use crate::state::scroll;
use crate::state::toast::Toast;

/// Sink used by listeners and timers to feed actions back into the store.
pub type Dispatch = Rc<dyn Fn(ViewAction)>;

#[derive(Debug, Clone, PartialEq)]
pub enum ViewAction {
    ToggleMenu,
    CloseMenu,
    Scrolled(f64),
    Revealed(SectionId),
    SelectService(Rc<ServiceOffering>),
    CloseModal,
    ModalClicked(ClickTarget),
    ToggleFaq(usize),
    ShowToast,
    HideToast { generation: u32 },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    menu_open: bool,
    modal: ModalState,
    scroll_progress: f64,
    faq: Accordion,
    toast: Toast,
    revealed: RevealedSections,
}

impl ViewState {
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    pub fn selected_service(&self) -> Option<&Rc<ServiceOffering>> {
        self.modal.selected()
    }

    pub fn scroll_progress(&self) -> f64 {
        self.scroll_progress
    }

    pub fn faq(&self) -> &Accordion {
        &self.faq
    }

    pub fn toast(&self) -> &Toast {
        &self.toast
    }

    pub fn revealed(&self) -> &RevealedSections {
        &self.revealed
    }

    /// Returns whether anything changed.
    fn apply(&mut self, action: ViewAction) -> bool {
        match action {
            ViewAction::ToggleMenu => {
                self.menu_open = !self.menu_open;
                true
            }
            ViewAction::CloseMenu => std::mem::replace(&mut self.menu_open, false),
            ViewAction::Scrolled(progress) => {
                let progress = scroll::sanitize(progress);
                let changed = progress != self.scroll_progress;
                self.scroll_progress = progress;
                changed
            }
            ViewAction::Revealed(section) => self.revealed.add_if_absent(section),
            ViewAction::SelectService(service) => self.modal.open(service),
            ViewAction::CloseModal => self.modal.close(),
            ViewAction::ModalClicked(target) => self.modal.click(target),
            ViewAction::ToggleFaq(index) => {
                self.faq.toggle(index);
                true
            }
            ViewAction::ShowToast => {
                self.toast.trigger();
                true
            }
            ViewAction::HideToast { generation } => self.toast.expire(generation),
        }
    }
}

impl Reducible for ViewState {
    type Action = ViewAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}
