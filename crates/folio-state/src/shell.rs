//! Cross-domain wiring: one owner for every state domain and the
//! interaction handlers that compose them.

use std::sync::Arc;

use folio_core::{
    FolioConfig, PersistenceAdapter, PresentationSink, Scheduler, SectionId, ToneSynth,
    ViewportObserver,
};
use tracing::debug;

use crate::feedback::FeedbackState;
use crate::layout::LayoutState;
use crate::navigation::{NavItem, NavLink, NavigationView};
use crate::preference::PreferenceState;
use crate::scroll_spy::ScrollSpy;

/// Host capabilities the shell is built from
#[derive(Clone)]
pub struct Capabilities {
    pub store: Arc<dyn PersistenceAdapter>,
    pub sink: Arc<dyn PresentationSink>,
    pub synth: Arc<dyn ToneSynth>,
    pub scheduler: Arc<dyn Scheduler>,
}

/// The three persisted domains, the navigation model, and the handlers the
/// view layer calls on interaction
pub struct Shell {
    config: FolioConfig,
    layout: LayoutState,
    preference: PreferenceState,
    feedback: FeedbackState,
    navigation: NavigationView,
    scheduler: Arc<dyn Scheduler>,
}

impl Shell {
    /// Load every domain from the shared store
    pub fn open(config: FolioConfig, caps: Capabilities) -> Self {
        let layout = LayoutState::load(Arc::clone(&caps.store), config.keys.layout.clone());
        let preference = PreferenceState::load(
            Arc::clone(&caps.store),
            caps.sink,
            config.keys.theme.clone(),
            config.default_theme,
        );
        let feedback = FeedbackState::load(
            caps.store,
            caps.synth,
            Arc::clone(&caps.scheduler),
            config.keys.sound.clone(),
            config.default_sound,
            config.toggle_delay(),
        );
        debug!("Shell opened");

        Self {
            config,
            layout,
            preference,
            feedback,
            navigation: NavigationView::default(),
            scheduler: caps.scheduler,
        }
    }

    /// Replace the navigation links (default: About, Apps, Projects, Contact)
    pub fn with_links(mut self, links: Vec<NavLink>) -> Self {
        self.navigation = NavigationView::new(links);
        self
    }

    pub fn config(&self) -> &FolioConfig {
        &self.config
    }

    pub fn layout(&self) -> &LayoutState {
        &self.layout
    }

    pub fn preference(&self) -> &PreferenceState {
        &self.preference
    }

    pub fn feedback(&self) -> &FeedbackState {
        &self.feedback
    }

    pub fn navigation(&self) -> &NavigationView {
        &self.navigation
    }

    /// Theme button: toggle cue, then flip the theme
    pub fn on_theme_toggle(&self) {
        self.feedback.play_toggle();
        self.preference.toggle_theme();
    }

    /// Sound button: flip sound; when it was just turned on, confirm with a
    /// toggle cue after the configured delay
    pub fn on_sound_toggle(&self) {
        let was_enabled = self.feedback.settings().enabled;
        self.feedback.toggle_sound();
        if !was_enabled {
            let feedback = self.feedback.clone();
            self.scheduler
                .defer(self.config.toggle_delay(), Box::new(move || feedback.play_toggle()));
        }
    }

    /// Collapse button: flip the rail, then click
    pub fn on_collapse_toggle(&self) {
        self.layout.toggle_collapse();
        self.feedback.play_click();
    }

    /// Mobile menu button
    pub fn on_menu_toggle(&mut self) {
        self.navigation.toggle_menu();
        self.feedback.play_click();
    }

    /// A navigation link was activated
    pub fn on_nav_select(&mut self, link: &NavLink) {
        debug!(link = %link.name, href = %link.href(), "Navigation selected");
        self.feedback.play_click();
        self.navigation.close_menu();
    }

    /// The router moved to `path`
    pub fn on_route_change(&mut self, path: impl Into<String>) {
        let path = path.into();
        if path != self.navigation.current_path() {
            self.navigation.set_current_path(path);
            self.feedback.play_transition();
        }
    }

    /// Start a scroll-spy over the navigation's section links
    ///
    /// The caller owns the spy; dropping or unmounting it ends observation.
    pub fn mount_scroll_spy(&self, observer: &dyn ViewportObserver) -> ScrollSpy {
        self.mount_scroll_spy_over(observer, &self.navigation.section_ids())
    }

    /// Start a scroll-spy over explicit regions
    pub fn mount_scroll_spy_over(
        &self,
        observer: &dyn ViewportObserver,
        regions: &[SectionId],
    ) -> ScrollSpy {
        ScrollSpy::mount(observer, regions, self.config.spy_threshold)
    }

    /// Render model of the navigation rail
    pub fn nav_items(&self, spy: Option<&ScrollSpy>) -> Vec<NavItem> {
        let active = spy.and_then(ScrollSpy::active_section_id);
        self.navigation
            .items(active.as_ref(), self.layout.collapsed())
    }
}
