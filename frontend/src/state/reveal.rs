use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use log::debug;
use thiserror::Error;

use crate::config;
use crate::host::{Host, HostError, Subscription};
use crate::state::store::{Dispatch, ViewAction};

/// Landing page sections that fade in on first sight. The string form is the
/// element id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SectionId {
    Hero,
    Features,
    About,
    Services,
    Testimonials,
    Contact,
    Faq,
}

impl SectionId {
    pub const ALL: [SectionId; 7] = [
        SectionId::Hero,
        SectionId::Features,
        SectionId::About,
        SectionId::Services,
        SectionId::Testimonials,
        SectionId::Contact,
        SectionId::Faq,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::Features => "features",
            SectionId::About => "about",
            SectionId::Services => "services",
            SectionId::Testimonials => "testimonials",
            SectionId::Contact => "contact",
            SectionId::Faq => "faq",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown section {0}")]
pub struct UnknownSection(pub String);

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// Sections that have been on screen at least once. Grows only: there is no
/// way to take a section back out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealedSections(BTreeSet<SectionId>);

impl RevealedSections {
    /// Returns true when the section was not revealed before.
    pub fn add_if_absent(&mut self, section: SectionId) -> bool {
        self.0.insert(section)
    }

    pub fn contains(&self, section: SectionId) -> bool {
        self.0.contains(&section)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = SectionId> + '_ {
        self.0.iter().copied()
    }
}

/// Watches the given sections and reports each one once, the first time
/// enough of it is visible.
pub struct RevealAnimator {
    subscription: Option<Subscription>,
}

impl RevealAnimator {
    pub fn attach(
        host: &dyn Host,
        dispatch: Dispatch,
        sections: &[SectionId],
    ) -> Result<Self, HostError> {
        let ids: Vec<&str> = sections.iter().map(|section| section.as_str()).collect();
        let mut latched = RevealedSections::default();

        let subscription = host.observe_sections(
            &ids,
            config::REVEAL_THRESHOLD,
            Box::new(move |id, ratio| {
                if ratio < config::REVEAL_THRESHOLD {
                    return;
                }
                let Ok(section) = id.parse::<SectionId>() else {
                    return;
                };
                if latched.add_if_absent(section) {
                    debug!("Section {} revealed", section);
                    dispatch(ViewAction::Revealed(section));
                }
            }),
        )?;

        debug!("Reveal animator watching {} sections", ids.len());
        Ok(Self {
            subscription: Some(subscription),
        })
    }

    pub fn dispose(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.cancel();
            debug!("Reveal animator disposed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::fake::{FakeHost, TestStore};
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn section_ids_round_trip_through_element_ids() {
        for section in SectionId::ALL {
            assert_eq!(section.as_str().parse::<SectionId>(), Ok(section));
        }
        assert_eq!(
            "pricing".parse::<SectionId>(),
            Err(UnknownSection("pricing".to_string()))
        );
        assert_eq!(
            UnknownSection("pricing".to_string()).to_string(),
            "unknown section pricing"
        );
    }

    #[test]
    fn add_if_absent_reports_first_insert_only() {
        let mut revealed = RevealedSections::default();
        assert!(revealed.add_if_absent(SectionId::Faq));
        assert!(!revealed.add_if_absent(SectionId::Faq));
        assert_eq!(revealed.len(), 1);
        assert_eq!(revealed.iter().collect::<Vec<_>>(), vec![SectionId::Faq]);
    }

    #[test]
    fn reveal_latches_once_and_never_reverts() {
        let host = FakeHost::new();
        let store = TestStore::new();
        let dispatched = Rc::new(Cell::new(0));
        let dispatch: Dispatch = {
            let inner = store.dispatcher();
            let dispatched = dispatched.clone();
            Rc::new(move |action: ViewAction| {
                dispatched.set(dispatched.get() + 1);
                inner(action);
            })
        };
        let _animator = RevealAnimator::attach(&host, dispatch, &SectionId::ALL).unwrap();

        // Barely visible does not count.
        host.intersect("services", 0.05);
        assert!(!store.get().revealed().contains(SectionId::Services));

        host.intersect("services", 0.4);
        assert!(store.get().revealed().contains(SectionId::Services));

        // Scrolled out and back in again.
        host.intersect("services", 0.0);
        host.intersect("services", 0.9);
        assert!(store.get().revealed().contains(SectionId::Services));
        assert_eq!(dispatched.get(), 1);
        assert_eq!(store.get().revealed().len(), 1);
    }

    #[test]
    fn threshold_crossing_counts() {
        let host = FakeHost::new();
        let store = TestStore::new();
        let _animator = RevealAnimator::attach(&host, store.dispatcher(), &[SectionId::Hero]).unwrap();
        host.intersect("hero", config::REVEAL_THRESHOLD);
        assert!(store.get().revealed().contains(SectionId::Hero));
    }

    #[test]
    fn unobserved_sections_are_ignored() {
        let host = FakeHost::new();
        let store = TestStore::new();
        let _animator = RevealAnimator::attach(&host, store.dispatcher(), &[SectionId::Faq]).unwrap();
        assert_eq!(host.intersect("about", 1.0), 0);
        assert!(store.get().revealed().is_empty());
    }

    #[test]
    fn nothing_fires_after_dispose() {
        let host = FakeHost::new();
        let store = TestStore::new();
        let mut animator = RevealAnimator::attach(&host, store.dispatcher(), &SectionId::ALL).unwrap();
        assert_eq!(host.observers(), 1);

        animator.dispose();
        assert_eq!(host.observers(), 0);
        assert_eq!(host.intersect("faq", 1.0), 0);
        assert!(store.get().revealed().is_empty());
    }
}
