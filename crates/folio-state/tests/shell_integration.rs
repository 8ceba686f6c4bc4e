//! Integration tests for the shell: the three persisted domains, cue
//! composition, and scroll-spy driven navigation highlighting.

use std::sync::Arc;
use std::time::Duration;

use folio_core::{FolioConfig, SectionId, SoundSettings, Theme};
use folio_state::testing::{ManualScheduler, RecordingSink, RecordingSynth};
use folio_state::{
    Capabilities, NavLink, Shell, SpyPhase, TokioScheduler, UnavailableObserver, ViewportHub,
    Visibility,
};
use folio_storage::{BestEffortStore, InMemoryStore, JsonFileStore, UnavailableStore};
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

struct Harness {
    shell: Shell,
    synth: RecordingSynth,
    sink: RecordingSink,
    scheduler: ManualScheduler,
}

fn harness_with(backend: InMemoryStore) -> Harness {
    let synth = RecordingSynth::new();
    let sink = RecordingSink::new();
    let scheduler = ManualScheduler::new();
    let shell = Shell::open(
        FolioConfig::default(),
        Capabilities {
            store: Arc::new(BestEffortStore::new(backend)),
            sink: Arc::new(sink.clone()),
            synth: Arc::new(synth.clone()),
            scheduler: Arc::new(scheduler.clone()),
        },
    );
    Harness {
        shell,
        synth,
        sink,
        scheduler,
    }
}

fn harness() -> Harness {
    harness_with(InMemoryStore::new())
}

fn active_names(shell: &Shell, spy: &folio_state::ScrollSpy) -> Vec<String> {
    shell
        .nav_items(Some(spy))
        .into_iter()
        .filter(|item| item.active)
        .map(|item| item.name)
        .collect()
}

// ---------------------------------------------------------------------------
// Persistence across sessions
// ---------------------------------------------------------------------------

#[test]
fn test_prior_session_collapse_is_restored() {
    let h = harness_with(InMemoryStore::with_entries([("sidebar-collapsed", "true")]));
    assert!(h.shell.layout().collapsed());
    assert!(h.shell.nav_items(None).iter().all(|item| item.compact));
}

#[test]
fn test_malformed_sound_settings_fall_back() {
    let h = harness_with(InMemoryStore::with_entries([("sound-settings", "xyz")]));
    assert_eq!(
        h.shell.feedback().settings(),
        SoundSettings {
            enabled: true,
            volume: 0.3
        }
    );
}

#[test]
fn test_state_survives_restart_with_file_store() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("folio.json");

    let open = || {
        Shell::open(
            FolioConfig::testing(),
            Capabilities {
                store: Arc::new(BestEffortStore::new(JsonFileStore::open(&path).unwrap())),
                sink: Arc::new(RecordingSink::new()),
                synth: Arc::new(RecordingSynth::new()),
                scheduler: Arc::new(ManualScheduler::new()),
            },
        )
    };

    {
        let shell = open();
        shell.on_collapse_toggle();
        shell.on_theme_toggle();
        shell.feedback().set_volume(0.75);
    }

    let shell = open();
    assert!(shell.layout().collapsed());
    assert_eq!(shell.preference().theme(), Theme::Light);
    assert_eq!(shell.feedback().settings().volume, 0.75);
}

#[test]
fn test_unavailable_storage_never_breaks_mutators() {
    let synth = RecordingSynth::new();
    let shell = Shell::open(
        FolioConfig::default(),
        Capabilities {
            store: Arc::new(BestEffortStore::new(UnavailableStore::new("disabled"))),
            sink: Arc::new(RecordingSink::new()),
            synth: Arc::new(synth.clone()),
            scheduler: Arc::new(ManualScheduler::new()),
        },
    );

    shell.on_collapse_toggle();
    shell.on_theme_toggle();
    shell.on_sound_toggle();

    assert!(shell.layout().collapsed());
    assert_eq!(shell.preference().theme(), Theme::Light);
    assert!(!shell.feedback().settings().enabled);
}

// ---------------------------------------------------------------------------
// Cue composition
// ---------------------------------------------------------------------------

#[test]
fn test_theme_toggle_plays_toggle_and_reskins() {
    let h = harness();
    h.shell.on_theme_toggle();
    h.scheduler.run_all();

    assert_eq!(h.synth.frequencies(), vec![600.0, 900.0]);
    assert_eq!(h.sink.applied(), vec![Theme::Dark, Theme::Light]);
}

#[test]
fn test_disabled_sound_silences_every_handler() {
    let mut h = harness();
    h.shell.on_sound_toggle();
    assert!(!h.shell.feedback().settings().enabled);

    h.shell.on_theme_toggle();
    h.shell.on_collapse_toggle();
    h.shell.on_menu_toggle();
    h.shell.on_nav_select(&NavLink::section("About", "about"));
    h.shell.on_route_change("/apps");
    h.shell.feedback().play_transition();
    h.scheduler.run_all();

    assert_eq!(h.synth.count(), 0);
}

#[test]
fn test_enabling_sound_confirms_with_toggle_cue() {
    let h = harness_with(InMemoryStore::with_entries([(
        "sound-settings",
        r#"{"enabled":false,"volume":0.5}"#,
    )]));

    h.shell.on_sound_toggle();
    assert!(h.shell.feedback().settings().enabled);
    assert_eq!(h.synth.count(), 0);
    assert_eq!(h.scheduler.delays(), vec![Duration::from_millis(50)]);

    h.scheduler.run_all();
    assert_eq!(h.synth.frequencies(), vec![600.0, 900.0]);
}

#[test]
fn test_route_change_plays_transition_once() {
    let mut h = harness();
    h.shell.on_route_change("/apps");
    h.shell.on_route_change("/apps");
    assert_eq!(h.synth.frequencies(), vec![400.0]);
    assert_eq!(h.shell.navigation().current_path(), "/apps");
}

#[test]
fn test_nav_select_closes_menu() {
    let mut h = harness();
    h.shell.on_menu_toggle();
    assert!(h.shell.navigation().menu_open());
    h.shell.on_nav_select(&NavLink::section("Projects", "projects"));
    assert!(!h.shell.navigation().menu_open());
}

#[tokio::test(start_paused = true)]
async fn test_deferred_tone_fires_on_runtime() {
    let synth = RecordingSynth::new();
    let shell = Shell::open(
        FolioConfig::default(),
        Capabilities {
            store: Arc::new(BestEffortStore::new(InMemoryStore::new())),
            sink: Arc::new(RecordingSink::new()),
            synth: Arc::new(synth.clone()),
            scheduler: Arc::new(TokioScheduler::current().unwrap()),
        },
    );

    shell.on_theme_toggle();
    assert_eq!(synth.count(), 1);

    drop(shell);
    tokio::time::sleep(Duration::from_millis(60)).await;
    assert_eq!(synth.frequencies(), vec![600.0, 900.0]);
}

// ---------------------------------------------------------------------------
// Scroll-spy and highlighting
// ---------------------------------------------------------------------------

#[test]
fn test_last_intersecting_region_is_highlighted() {
    let h = harness();
    let hub = ViewportHub::new();
    let spy = h.shell.mount_scroll_spy(&hub);
    assert_eq!(spy.phase(), SpyPhase::Watching);

    hub.report(&[Visibility::new("about", 0.8), Visibility::new("projects", 0.6)]);

    assert_eq!(spy.active_section_id(), Some(SectionId::from("projects")));
    assert_eq!(active_names(&h.shell, &spy), vec!["Projects".to_string()]);
}

#[test]
fn test_spy_unavailable_falls_back_to_routes() {
    let mut h = harness();
    h.shell = h.shell.with_links(vec![
        NavLink::section("About", "about"),
        NavLink::route("Apps", "/apps"),
    ]);
    let spy = h.shell.mount_scroll_spy(&UnavailableObserver);
    assert_eq!(spy.phase(), SpyPhase::Uninitialized);

    h.shell.on_route_change("/apps");
    assert_eq!(active_names(&h.shell, &spy), vec!["Apps".to_string()]);
}

#[test]
fn test_unmounted_spy_stops_listening() {
    let h = harness();
    let hub = ViewportHub::new();
    let spy = h.shell.mount_scroll_spy(&hub);
    let mut rx = spy.subscribe();

    hub.report(&[Visibility::new("contact", 1.0)]);
    assert!(rx.has_changed().unwrap());
    rx.borrow_and_update();

    spy.unmount();
    assert_eq!(hub.registration_count(), 0);
    hub.report(&[Visibility::new("about", 1.0)]);
    assert_eq!(*rx.borrow(), Some(SectionId::from("contact")));
}

#[test]
fn test_subscribers_follow_theme() {
    let h = harness();
    let mut rx = h.shell.preference().subscribe();
    h.shell.on_theme_toggle();
    assert!(rx.has_changed().unwrap());
    assert_eq!(*rx.borrow_and_update(), Theme::Light);
}
