//! Capability traits consumed by the state containers
//!
//! Every touchpoint with the host environment goes through one of these
//! traits so the containers can run headless under test.
//!
//! ## Key Traits
//!
//! - [`KeyValueStore`]: Fallible backend (file, memory, browser storage)
//! - [`PersistenceAdapter`]: Best-effort façade the containers use
//! - [`PresentationSink`]: Applies the theme to all visual output
//! - [`ToneSynth`]: Plays a single synthesized tone
//! - [`Scheduler`]: Runs a task once after a delay
//! - [`ViewportObserver`]: Reports region visibility

use std::fmt;
use std::time::Duration;

use crate::error::{AudioError, ObserverError, StorageError};
use crate::section::{IntersectionEntry, SectionId};
use crate::theme::Theme;

/// Storage backend for string keys and values
///
/// Implementations may fail; the state containers never see these errors
/// directly, they go through a [`PersistenceAdapter`].
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Durable key-value storage as the state containers see it
///
/// Both operations are synchronous and never fail from the caller's
/// perspective: a read that cannot be served is `None`, a write that cannot
/// be applied is dropped.
pub trait PersistenceAdapter: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str);
}

/// Where the selected theme is projected (a document root attribute in a
/// browser host)
pub trait PresentationSink: Send + Sync {
    fn apply(&self, theme: Theme);
}

/// A single synthesized tone
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub frequency_hz: f32,
    pub duration: Duration,
    /// Peak gain; zero means silent
    pub gain: f32,
}

/// Audio output for cues
pub trait ToneSynth: Send + Sync {
    /// Start playing `tone`; returns once the tone is scheduled, not finished
    fn play(&self, tone: &Tone) -> Result<(), AudioError>;
}

/// A task run at most once by a [`Scheduler`]
pub type DeferredTask = Box<dyn FnOnce() + Send + 'static>;

/// Runs deferred one-shot tasks
///
/// There is no cancellation: once deferred, a task runs.
pub trait Scheduler: Send + Sync {
    fn defer(&self, delay: Duration, task: DeferredTask);
}

/// Callback receiving one batch of intersection entries, in report order
pub type IntersectionCallback = Box<dyn Fn(&[IntersectionEntry]) + Send + Sync + 'static>;

/// Reports, for a set of registered regions, whether each currently
/// satisfies a visibility threshold
pub trait ViewportObserver: Send + Sync {
    /// Register `regions` and start delivering batches to `callback`
    ///
    /// # Errors
    ///
    /// Returns an error if observation is not available in this host or the
    /// threshold is outside `(0, 1]`.
    fn observe(
        &self,
        regions: &[SectionId],
        threshold: f32,
        callback: IntersectionCallback,
    ) -> Result<ObservationHandle, ObserverError>;
}

/// Single-owner deregistration handle for an observer registration
///
/// The registration is released exactly once: by [`ObservationHandle::release`]
/// or, failing that, when the handle is dropped.
#[must_use = "dropping the handle releases the observation immediately"]
pub struct ObservationHandle {
    release: Option<Box<dyn FnOnce() + Send + 'static>>,
}

impl ObservationHandle {
    pub fn new(release: impl FnOnce() + Send + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Release the registration now
    pub fn release(mut self) {
        self.release_inner();
    }

    fn release_inner(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for ObservationHandle {
    fn drop(&mut self) {
        self.release_inner();
    }
}

impl fmt::Debug for ObservationHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObservationHandle")
            .field("released", &self.release.is_none())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Capability traits must stay object-safe
    fn _assert_object_safe(
        _: &dyn KeyValueStore,
        _: &dyn PersistenceAdapter,
        _: &dyn PresentationSink,
        _: &dyn ToneSynth,
        _: &dyn Scheduler,
        _: &dyn ViewportObserver,
    ) {
    }

    #[test]
    fn test_handle_releases_once_on_explicit_release() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        let handle = ObservationHandle::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        handle.release();
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_handle_releases_on_drop() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        {
            let _handle = ObservationHandle::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            });
        }
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }
}
