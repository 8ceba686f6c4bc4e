//! Viewport observers.
//!
//! [`ViewportHub`] is the bridge a host drives: it reports raw visibility
//! fractions and the hub turns them into per-registration intersection
//! batches, keeping the host's report order.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use dashmap::DashMap;
use folio_core::{
    IntersectionCallback, IntersectionEntry, ObservationHandle, ObserverError, SectionId,
    ViewportObserver,
};
use tracing::{debug, trace};

/// Visible fraction of one region, as measured by the host
#[derive(Debug, Clone, PartialEq)]
pub struct Visibility {
    pub id: SectionId,
    pub ratio: f32,
}

impl Visibility {
    pub fn new(id: impl Into<SectionId>, ratio: f32) -> Self {
        Self {
            id: id.into(),
            ratio,
        }
    }
}

struct Registration {
    regions: Vec<SectionId>,
    threshold: f32,
    callback: Arc<IntersectionCallback>,
}

#[derive(Default)]
struct HubInner {
    next_id: AtomicU64,
    registrations: DashMap<u64, Registration>,
}

/// Host-driven viewport observer
///
/// Registrations live until their [`ObservationHandle`] is released; a
/// released registration never sees another batch.
#[derive(Clone, Default)]
pub struct ViewportHub {
    inner: Arc<HubInner>,
}

impl ViewportHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live registrations
    pub fn registration_count(&self) -> usize {
        self.inner.registrations.len()
    }

    /// Deliver one measurement batch to every registration
    ///
    /// Each registration receives the entries for its own regions, in the
    /// order given here; a region counts as intersecting when its ratio is
    /// non-zero and at least the registration's threshold. A registration
    /// released by an earlier callback of the same batch is skipped.
    pub fn report(&self, batch: &[Visibility]) {
        let deliveries: Vec<(u64, Arc<IntersectionCallback>, Vec<IntersectionEntry>)> = self
            .inner
            .registrations
            .iter()
            .filter_map(|registration| {
                let entries: Vec<IntersectionEntry> = batch
                    .iter()
                    .filter(|v| registration.regions.contains(&v.id))
                    .map(|v| {
                        let intersecting = v.ratio > 0.0 && v.ratio >= registration.threshold;
                        IntersectionEntry::new(v.id.clone(), intersecting, v.ratio)
                    })
                    .collect();
                (!entries.is_empty()).then(|| {
                    (*registration.key(), Arc::clone(&registration.callback), entries)
                })
            })
            .collect();

        // Map guards are dropped above so callbacks may release registrations.
        for (id, callback, entries) in deliveries {
            if !self.inner.registrations.contains_key(&id) {
                trace!(registration = id, "Skipping released registration");
                continue;
            }
            trace!(registration = id, entries = entries.len(), "Delivering intersection batch");
            (*callback)(&entries);
        }
    }
}

impl ViewportObserver for ViewportHub {
    fn observe(
        &self,
        regions: &[SectionId],
        threshold: f32,
        callback: IntersectionCallback,
    ) -> Result<ObservationHandle, ObserverError> {
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(ObserverError::InvalidThreshold(threshold));
        }

        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        self.inner.registrations.insert(
            id,
            Registration {
                regions: regions.to_vec(),
                threshold,
                callback: Arc::new(callback),
            },
        );
        debug!(registration = id, regions = regions.len(), threshold, "Observing regions");

        let hub: Weak<HubInner> = Arc::downgrade(&self.inner);
        Ok(ObservationHandle::new(move || {
            if let Some(hub) = hub.upgrade() {
                hub.registrations.remove(&id);
                debug!(registration = id, "Released observation");
            }
        }))
    }
}

/// Observer for hosts without a visibility primitive
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableObserver;

impl ViewportObserver for UnavailableObserver {
    fn observe(
        &self,
        _regions: &[SectionId],
        _threshold: f32,
        _callback: IntersectionCallback,
    ) -> Result<ObservationHandle, ObserverError> {
        Err(ObserverError::Unavailable(
            "no intersection observer in this host".to_string(),
        ))
    }
}
