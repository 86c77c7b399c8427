//! Routes of the navigation shell.

use std::fmt;

/// One of the two views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Route {
    #[default]
    Questionnaire,
    Summary,
}

/// A static navigation link shown by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub route: Route,
}

/// The links of the navigation sidebar, in display order.
pub const NAV_LINKS: [NavLink; 2] = [
    NavLink {
        label: "Questionnaire",
        route: Route::Questionnaire,
    },
    NavLink {
        label: "Summary",
        route: Route::Summary,
    },
];

impl Route {
    /// The path this route is mounted at.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Questionnaire => "/",
            Self::Summary => "/summary",
        }
    }

    /// Resolve a path. Trailing slashes are ignored.
    pub fn from_path(path: &str) -> Option<Self> {
        match path.trim_end_matches('/') {
            "" => Some(Self::Questionnaire),
            "/summary" | "summary" => Some(Self::Summary),
            _ => None,
        }
    }

    /// The other route.
    pub fn toggled(&self) -> Self {
        match self {
            Self::Questionnaire => Self::Summary,
            Self::Summary => Self::Questionnaire,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Tracks the active route. There are no guards: any route can be entered
/// at any time.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    current: Route,
}

impl Navigator {
    pub fn new(start: Route) -> Self {
        Self { current: start }
    }

    pub fn current(&self) -> Route {
        self.current
    }

    pub fn navigate(&mut self, route: Route) {
        if self.current != route {
            tracing::debug!(from = %self.current, to = %route, "navigating");
            self.current = route;
        }
    }

    /// Whether a nav link points at the active route.
    pub fn is_active(&self, link: &NavLink) -> bool {
        link.route == self.current
    }
}
