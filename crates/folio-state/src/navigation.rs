//! Navigation rail model: links, highlighting, and the mobile menu.

use folio_core::SectionId;

/// Where a navigation link points
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavTarget {
    /// A labeled region on the current page
    Section(SectionId),
    /// Another page
    Route(String),
}

/// A navigation link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub name: String,
    pub target: NavTarget,
}

impl NavLink {
    pub fn section(name: impl Into<String>, id: impl Into<SectionId>) -> Self {
        Self {
            name: name.into(),
            target: NavTarget::Section(id.into()),
        }
    }

    pub fn route(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target: NavTarget::Route(path.into()),
        }
    }

    pub fn href(&self) -> String {
        match &self.target {
            NavTarget::Section(id) => id.anchor(),
            NavTarget::Route(path) => path.clone(),
        }
    }

    /// Route links match the current path exactly; section links match the
    /// scroll-spy's active region.
    pub fn is_active(&self, active_section: Option<&SectionId>, current_path: &str) -> bool {
        match &self.target {
            NavTarget::Route(path) => path == current_path,
            NavTarget::Section(id) => active_section == Some(id),
        }
    }
}

/// Links shown on the home page
pub fn default_links() -> Vec<NavLink> {
    vec![
        NavLink::section("About", "about"),
        NavLink::section("Apps", "apps"),
        NavLink::section("Projects", "projects"),
        NavLink::section("Contact", "contact"),
    ]
}

/// What the view renders for one link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub name: String,
    pub href: String,
    pub active: bool,
    /// Icon-only rendering while the rail is collapsed
    pub compact: bool,
}

/// Navigation rail state that is not persisted
#[derive(Debug, Clone)]
pub struct NavigationView {
    links: Vec<NavLink>,
    current_path: String,
    menu_open: bool,
}

impl Default for NavigationView {
    fn default() -> Self {
        Self::new(default_links())
    }
}

impl NavigationView {
    pub fn new(links: Vec<NavLink>) -> Self {
        Self {
            links,
            current_path: "/".to_string(),
            menu_open: false,
        }
    }

    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    /// Region ids the scroll-spy should watch
    pub fn section_ids(&self) -> Vec<SectionId> {
        self.links
            .iter()
            .filter_map(|link| match &link.target {
                NavTarget::Section(id) => Some(id.clone()),
                NavTarget::Route(_) => None,
            })
            .collect()
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    pub fn set_current_path(&mut self, path: impl Into<String>) {
        self.current_path = path.into();
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Render model for every link
    pub fn items(&self, active_section: Option<&SectionId>, collapsed: bool) -> Vec<NavItem> {
        self.links
            .iter()
            .map(|link| NavItem {
                name: link.name.clone(),
                href: link.href(),
                active: link.is_active(active_section, &self.current_path),
                compact: collapsed,
            })
            .collect()
    }
}
