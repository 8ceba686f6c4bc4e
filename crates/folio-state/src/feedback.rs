//! Feedback state: audio cue enablement, volume, and cue emission.

use std::sync::Arc;
use std::time::Duration;

use folio_core::{PersistenceAdapter, Scheduler, SoundSettings, ToneSynth};
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::audio::Cue;

/// Sound settings plus the cues they govern
///
/// Cloning is cheap and shares state; the deferred half of a toggle cue
/// holds such a clone.
#[derive(Clone)]
pub struct FeedbackState {
    inner: Arc<Inner>,
}

struct Inner {
    store: Arc<dyn PersistenceAdapter>,
    synth: Arc<dyn ToneSynth>,
    scheduler: Arc<dyn Scheduler>,
    key: String,
    toggle_gap: Duration,
    settings: watch::Sender<SoundSettings>,
}

impl FeedbackState {
    /// Load settings persisted under `key`
    ///
    /// Missing or malformed data yields `default` (clamped); it never fails.
    pub fn load(
        store: Arc<dyn PersistenceAdapter>,
        synth: Arc<dyn ToneSynth>,
        scheduler: Arc<dyn Scheduler>,
        key: impl Into<String>,
        default: SoundSettings,
        toggle_gap: Duration,
    ) -> Self {
        let key = key.into();
        let settings = match store.get(&key) {
            Some(raw) => SoundSettings::from_stored(&raw).unwrap_or_else(|| {
                warn!(key = %key, "Ignoring malformed sound settings");
                default.clamped()
            }),
            None => default.clamped(),
        };
        debug!(key = %key, enabled = settings.enabled, volume = settings.volume, "Loaded sound settings");
        let (settings, _) = watch::channel(settings);
        Self {
            inner: Arc::new(Inner {
                store,
                synth,
                scheduler,
                key,
                toggle_gap,
                settings,
            }),
        }
    }

    pub fn settings(&self) -> SoundSettings {
        *self.inner.settings.borrow()
    }

    /// Replace the settings, clamping volume into `[0, 1]`
    pub fn set_settings(&self, next: SoundSettings) {
        self.update(|_| next);
    }

    pub fn set_volume(&self, volume: f32) {
        self.update(|current| SoundSettings { volume, ..current });
    }

    pub fn toggle_sound(&self) {
        self.update(|current| SoundSettings {
            enabled: !current.enabled,
            ..current
        });
    }

    /// Read, change, clamp, and persist under the channel's lock
    fn update(&self, change: impl FnOnce(SoundSettings) -> SoundSettings) {
        let inner = &self.inner;
        inner.settings.send_modify(|settings| {
            *settings = change(*settings).clamped();
            inner.store.set(&inner.key, &settings.to_stored());
            debug!(enabled = settings.enabled, volume = settings.volume, "Sound settings changed");
        });
    }

    /// Receiver that observes every change
    pub fn subscribe(&self) -> watch::Receiver<SoundSettings> {
        self.inner.settings.subscribe()
    }

    pub fn play_click(&self) {
        self.inner.emit(Cue::Click);
    }

    /// Two rising tones; the second follows after the toggle gap
    ///
    /// The second tone is not cancelled if the caller goes away, and checks
    /// the settings again when it fires.
    pub fn play_toggle(&self) {
        if !self.settings().enabled {
            return;
        }
        self.inner.emit(Cue::ToggleLow);
        let inner = Arc::clone(&self.inner);
        self.inner
            .scheduler
            .defer(self.inner.toggle_gap, Box::new(move || inner.emit(Cue::ToggleHigh)));
    }

    pub fn play_transition(&self) {
        self.inner.emit(Cue::Transition);
    }
}

impl Inner {
    /// Play `cue` at the current volume unless sound is disabled
    ///
    /// Synth failures are logged and dropped.
    fn emit(&self, cue: Cue) {
        let settings = *self.settings.borrow();
        if !settings.enabled {
            return;
        }
        if let Err(e) = self.synth.play(&cue.tone(settings.volume)) {
            debug!(?cue, error = %e, "Cue skipped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ManualScheduler, RecordingSynth};
    use folio_storage::{BestEffortStore, InMemoryStore};

    const KEY: &str = "sound-settings";

    struct Fixture {
        state: FeedbackState,
        synth: RecordingSynth,
        scheduler: ManualScheduler,
        store: Arc<BestEffortStore<InMemoryStore>>,
    }

    fn fixture(stored: Option<&str>) -> Fixture {
        let backend = match stored {
            Some(raw) => InMemoryStore::with_entries([(KEY, raw)]),
            None => InMemoryStore::new(),
        };
        let store = Arc::new(BestEffortStore::new(backend));
        let synth = RecordingSynth::new();
        let scheduler = ManualScheduler::new();
        let state = FeedbackState::load(
            store.clone(),
            Arc::new(synth.clone()),
            Arc::new(scheduler.clone()),
            KEY,
            SoundSettings::default(),
            Duration::from_millis(50),
        );
        Fixture {
            state,
            synth,
            scheduler,
            store,
        }
    }

    #[test]
    fn test_default_settings() {
        let f = fixture(None);
        assert_eq!(f.state.settings(), SoundSettings { enabled: true, volume: 0.3 });
    }

    #[test]
    fn test_malformed_stored_settings_fall_back() {
        for raw in ["xyz", "", "[]", r#"{"enabled":true}"#] {
            let f = fixture(Some(raw));
            assert_eq!(
                f.state.settings(),
                SoundSettings { enabled: true, volume: 0.3 },
                "stored {raw:?}"
            );
        }
    }

    #[test]
    fn test_restores_stored_settings() {
        let f = fixture(Some(r#"{"enabled":false,"volume":0.8}"#));
        assert_eq!(f.state.settings(), SoundSettings { enabled: false, volume: 0.8 });
    }

    #[test]
    fn test_set_settings_clamps_volume() {
        let f = fixture(None);
        f.state.set_settings(SoundSettings { enabled: true, volume: 1.5 });
        assert_eq!(f.state.settings().volume, 1.0);
        f.state.set_settings(SoundSettings { enabled: true, volume: -0.2 });
        assert_eq!(f.state.settings().volume, 0.0);
    }

    #[test]
    fn test_set_settings_persists_json() {
        let f = fixture(None);
        f.state.set_volume(0.6);
        let raw = f.store.get(KEY).unwrap();
        assert_eq!(
            SoundSettings::from_stored(&raw),
            Some(SoundSettings { enabled: true, volume: 0.6 })
        );
    }

    #[test]
    fn test_toggle_sound_twice_is_identity() {
        let f = fixture(None);
        f.state.toggle_sound();
        assert!(!f.state.settings().enabled);
        f.state.toggle_sound();
        assert!(f.state.settings().enabled);
        assert_eq!(f.state.settings().volume, 0.3);
    }

    #[test]
    fn test_concurrent_updates_are_not_lost() {
        let f = fixture(None);
        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    for _ in 0..250 {
                        f.state.toggle_sound();
                    }
                });
            }
            scope.spawn(|| {
                for _ in 0..250 {
                    f.state.set_volume(0.6);
                }
            });
        });
        assert_eq!(f.state.settings(), SoundSettings { enabled: true, volume: 0.6 });
        assert_eq!(
            SoundSettings::from_stored(&f.store.get(KEY).unwrap()),
            Some(SoundSettings { enabled: true, volume: 0.6 })
        );
    }

    #[test]
    fn test_disabled_suppresses_every_cue() {
        let f = fixture(None);
        f.state.toggle_sound();

        f.state.play_click();
        f.state.play_toggle();
        f.state.play_transition();
        f.scheduler.run_all();

        assert_eq!(f.synth.count(), 0);
    }

    #[test]
    fn test_toggle_emits_two_sequential_tones() {
        let f = fixture(None);
        f.state.play_toggle();
        assert_eq!(f.synth.frequencies(), vec![600.0]);
        assert_eq!(f.scheduler.delays(), vec![Duration::from_millis(50)]);

        assert_eq!(f.scheduler.run_all(), 1);
        assert_eq!(f.synth.frequencies(), vec![600.0, 900.0]);
    }

    #[test]
    fn test_deferred_tone_suppressed_if_disabled_meanwhile() {
        let f = fixture(None);
        f.state.play_toggle();
        f.state.toggle_sound();
        f.scheduler.run_all();
        assert_eq!(f.synth.count(), 1);
    }

    #[test]
    fn test_deferred_tone_outlives_caller() {
        let f = fixture(None);
        f.state.play_toggle();
        let Fixture { state, synth, scheduler, .. } = f;
        drop(state);
        scheduler.run_all();
        assert_eq!(synth.count(), 2);
    }

    #[test]
    fn test_volume_scales_gain() {
        let f = fixture(None);
        f.state.set_volume(0.0);
        f.state.play_click();
        f.state.set_volume(1.0);
        f.state.play_click();
        let tones = f.synth.tones();
        assert_eq!(tones[0].gain, 0.0);
        assert!(tones[1].gain > 0.0);
    }

    #[test]
    fn test_synth_failure_is_swallowed() {
        let synth = RecordingSynth::failing();
        let state = FeedbackState::load(
            Arc::new(BestEffortStore::new(InMemoryStore::new())),
            Arc::new(synth.clone()),
            Arc::new(crate::scheduler::InlineScheduler),
            KEY,
            SoundSettings::default(),
            Duration::ZERO,
        );
        state.play_click();
        state.play_toggle();
        state.play_transition();
        assert_eq!(synth.count(), 4);
    }
}
