//! Scroll-spy: which labeled region is currently in view.

use std::sync::Arc;

use folio_core::{IntersectionEntry, ObservationHandle, SectionId, ViewportObserver};
use tokio::sync::watch;
use tracing::{debug, info, trace};

/// Lifecycle of a [`ScrollSpy`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpyPhase {
    /// Observation never started; the active id stays empty
    Uninitialized,
    /// Regions are registered and batches are being applied
    Watching,
}

/// Tracks the most recently reported intersecting region
///
/// Within a batch, entries are applied in report order, so when several
/// regions intersect at once the last one wins. This is not a "most visible"
/// policy and should not become one.
///
/// The observer registration is held until [`ScrollSpy::unmount`] or drop,
/// whichever comes first, and released exactly once.
pub struct ScrollSpy {
    active: Arc<watch::Sender<Option<SectionId>>>,
    registration: Option<ObservationHandle>,
}

impl ScrollSpy {
    /// Register `regions` with `observer` and start watching
    ///
    /// If the observer refuses, the spy stays [`SpyPhase::Uninitialized`] for
    /// its whole life; navigation then highlights by route only.
    pub fn mount(observer: &dyn ViewportObserver, regions: &[SectionId], threshold: f32) -> Self {
        let (active, _) = watch::channel(None);
        let active = Arc::new(active);

        let target = Arc::clone(&active);
        let callback = Box::new(move |batch: &[IntersectionEntry]| apply_batch(&target, batch));

        let registration = match observer.observe(regions, threshold, callback) {
            Ok(handle) => {
                debug!(regions = regions.len(), threshold, "Scroll-spy watching");
                Some(handle)
            }
            Err(e) => {
                info!(error = %e, "Scroll-spy unavailable, falling back to route highlighting");
                None
            }
        };

        Self {
            active,
            registration,
        }
    }

    pub fn phase(&self) -> SpyPhase {
        if self.registration.is_some() {
            SpyPhase::Watching
        } else {
            SpyPhase::Uninitialized
        }
    }

    /// Id of the active region; `None` before the first intersection
    pub fn active_section_id(&self) -> Option<SectionId> {
        self.active.borrow().clone()
    }

    /// Receiver that observes every change of the active id
    pub fn subscribe(&self) -> watch::Receiver<Option<SectionId>> {
        self.active.subscribe()
    }

    /// Stop observing and release the registration
    pub fn unmount(mut self) {
        if let Some(handle) = self.registration.take() {
            handle.release();
            debug!("Scroll-spy unmounted");
        }
    }
}

fn apply_batch(active: &watch::Sender<Option<SectionId>>, batch: &[IntersectionEntry]) {
    for entry in batch.iter().filter(|entry| entry.is_intersecting) {
        trace!(section = %entry.id, ratio = entry.ratio, "Section intersecting");
        active.send_replace(Some(entry.id.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::{UnavailableObserver, ViewportHub, Visibility};

    fn regions() -> Vec<SectionId> {
        ["about", "apps", "projects", "contact"]
            .into_iter()
            .map(SectionId::from)
            .collect()
    }

    #[test]
    fn test_empty_before_first_observation() {
        let hub = ViewportHub::new();
        let spy = ScrollSpy::mount(&hub, &regions(), 0.5);
        assert_eq!(spy.phase(), SpyPhase::Watching);
        assert_eq!(spy.active_section_id(), None);
    }

    #[test]
    fn test_last_intersecting_entry_wins() {
        let hub = ViewportHub::new();
        let spy = ScrollSpy::mount(&hub, &regions(), 0.5);

        hub.report(&[Visibility::new("about", 0.6), Visibility::new("projects", 0.9)]);
        assert_eq!(spy.active_section_id(), Some(SectionId::from("projects")));

        hub.report(&[Visibility::new("projects", 0.9), Visibility::new("about", 0.6)]);
        assert_eq!(spy.active_section_id(), Some(SectionId::from("about")));
    }

    #[test]
    fn test_non_intersecting_entries_do_not_clear() {
        let hub = ViewportHub::new();
        let spy = ScrollSpy::mount(&hub, &regions(), 0.5);
        hub.report(&[Visibility::new("apps", 1.0)]);
        hub.report(&[Visibility::new("apps", 0.1), Visibility::new("contact", 0.3)]);
        assert_eq!(spy.active_section_id(), Some(SectionId::from("apps")));
    }

    #[test]
    fn test_batch_entries_applied_directly() {
        let (active, _) = watch::channel(None);
        apply_batch(
            &active,
            &[
                IntersectionEntry::intersecting("about"),
                IntersectionEntry::intersecting("projects"),
                IntersectionEntry::leaving("contact"),
            ],
        );
        assert_eq!(*active.borrow(), Some(SectionId::from("projects")));
    }

    #[test]
    fn test_unavailable_observer_stays_uninitialized() {
        let spy = ScrollSpy::mount(&UnavailableObserver, &regions(), 0.5);
        assert_eq!(spy.phase(), SpyPhase::Uninitialized);
        assert_eq!(spy.active_section_id(), None);
    }

    #[test]
    fn test_unmount_releases_registration() {
        let hub = ViewportHub::new();
        let spy = ScrollSpy::mount(&hub, &regions(), 0.5);
        let rx = spy.subscribe();
        assert_eq!(hub.registration_count(), 1);

        spy.unmount();
        assert_eq!(hub.registration_count(), 0);

        hub.report(&[Visibility::new("about", 1.0)]);
        assert_eq!(*rx.borrow(), None);
    }

    #[test]
    fn test_drop_releases_registration() {
        let hub = ViewportHub::new();
        {
            let _spy = ScrollSpy::mount(&hub, &regions(), 0.5);
            assert_eq!(hub.registration_count(), 1);
        }
        assert_eq!(hub.registration_count(), 0);
    }
}
