//! Cue tone table and host synths.

use std::time::Duration;

use folio_core::{AudioError, Tone, ToneSynth};
use tracing::info;

/// Peak gain at full volume.
const GAIN_SCALE: f32 = 0.1;

/// The individual tones cues are built from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Click,
    /// First tone of a toggle
    ToggleLow,
    /// Second, deferred tone of a toggle
    ToggleHigh,
    Transition,
}

impl Cue {
    /// Frequency and length of this cue
    fn shape(self) -> (f32, Duration) {
        match self {
            Cue::Click => (800.0, Duration::from_millis(50)),
            Cue::ToggleLow => (600.0, Duration::from_millis(80)),
            Cue::ToggleHigh => (900.0, Duration::from_millis(80)),
            Cue::Transition => (400.0, Duration::from_millis(150)),
        }
    }

    /// Relative loudness; transitions sit at half volume
    fn level(self) -> f32 {
        match self {
            Cue::Transition => 0.5,
            _ => 1.0,
        }
    }

    /// Tone for this cue at `volume` (in `[0, 1]`)
    ///
    /// Gain is linear in volume and zero at volume zero.
    pub fn tone(self, volume: f32) -> Tone {
        let (frequency_hz, duration) = self.shape();
        Tone {
            frequency_hz,
            duration,
            gain: volume.clamp(0.0, 1.0) * self.level() * GAIN_SCALE,
        }
    }
}

/// Synth for hosts without audio output; every tone fails
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentSynth;

impl ToneSynth for SilentSynth {
    fn play(&self, _tone: &Tone) -> Result<(), AudioError> {
        Err(AudioError::Unavailable("no audio output in this host".to_string()))
    }
}

/// Synth for headless hosts that logs each tone instead of sounding it
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSynth;

impl ToneSynth for TracingSynth {
    fn play(&self, tone: &Tone) -> Result<(), AudioError> {
        info!(
            frequency_hz = tone.frequency_hz,
            duration_ms = tone.duration.as_millis() as u64,
            gain = tone.gain,
            "Cue"
        );
        Ok(())
    }
}
