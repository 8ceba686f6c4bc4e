//! Test doubles for the capability traits
//!
//! Used by this crate's tests and available to hosts that want to assert on
//! cue emission or theme projection without real audio or a document.

use std::sync::Arc;
use std::time::Duration;

use folio_core::{AudioError, DeferredTask, PresentationSink, Scheduler, Theme, Tone, ToneSynth};
use parking_lot::Mutex;

/// Synth that records every tone it is asked to play
#[derive(Clone, Default)]
pub struct RecordingSynth {
    tones: Arc<Mutex<Vec<Tone>>>,
    fail: bool,
}

impl RecordingSynth {
    pub fn new() -> Self {
        Self::default()
    }

    /// Synth that records each call and then reports audio as unavailable
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Number of synthesis invocations so far
    pub fn count(&self) -> usize {
        self.tones.lock().len()
    }

    pub fn tones(&self) -> Vec<Tone> {
        self.tones.lock().clone()
    }

    pub fn frequencies(&self) -> Vec<f32> {
        self.tones.lock().iter().map(|t| t.frequency_hz).collect()
    }
}

impl ToneSynth for RecordingSynth {
    fn play(&self, tone: &Tone) -> Result<(), AudioError> {
        self.tones.lock().push(*tone);
        if self.fail {
            Err(AudioError::Unavailable("recording synth set to fail".to_string()))
        } else {
            Ok(())
        }
    }
}

/// Sink that records every theme applied
#[derive(Clone, Default)]
pub struct RecordingSink {
    applied: Arc<Mutex<Vec<Theme>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn applied(&self) -> Vec<Theme> {
        self.applied.lock().clone()
    }
}

impl PresentationSink for RecordingSink {
    fn apply(&self, theme: Theme) {
        self.applied.lock().push(theme);
    }
}

/// Scheduler that holds tasks until the test runs them
#[derive(Clone, Default)]
pub struct ManualScheduler {
    pending: Arc<Mutex<Vec<(Duration, DeferredTask)>>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tasks waiting to run
    pub fn pending(&self) -> usize {
        self.pending.lock().len()
    }

    /// Delays of waiting tasks, in scheduling order
    pub fn delays(&self) -> Vec<Duration> {
        self.pending.lock().iter().map(|(delay, _)| *delay).collect()
    }

    /// Run everything scheduled so far, including tasks scheduled by the
    /// tasks themselves; returns how many ran
    pub fn run_all(&self) -> usize {
        let mut ran = 0;
        loop {
            let batch: Vec<_> = std::mem::take(&mut *self.pending.lock());
            if batch.is_empty() {
                return ran;
            }
            for (_, task) in batch {
                task();
                ran += 1;
            }
        }
    }
}

impl Scheduler for ManualScheduler {
    fn defer(&self, delay: Duration, task: DeferredTask) {
        self.pending.lock().push((delay, task));
    }
}
