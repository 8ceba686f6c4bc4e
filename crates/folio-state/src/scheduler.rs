//! Schedulers for deferred cue tones.

use std::time::Duration;

use folio_core::{DeferredTask, Scheduler};
use tokio::runtime::Handle;

/// Runs each task on a tokio runtime after its delay
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    handle: Handle,
}

impl TokioScheduler {
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// Scheduler on the runtime this is called from, if any
    pub fn current() -> Option<Self> {
        Handle::try_current().ok().map(Self::new)
    }
}

impl Scheduler for TokioScheduler {
    fn defer(&self, delay: Duration, task: DeferredTask) {
        self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            task();
        });
    }
}

/// Runs each task immediately, ignoring the delay
///
/// For hosts without a runtime; deferred tones then overlap their
/// predecessor instead of following it.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineScheduler;

impl Scheduler for InlineScheduler {
    fn defer(&self, _delay: Duration, task: DeferredTask) {
        task();
    }
}
