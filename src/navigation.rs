// SPDX-License-Identifier: MPL-2.0
//! Navigation model: the closed set of documentation routes and the router
//! holding the current location.
//!
//! A route is active only when its path equals the current location exactly.
//! There is no prefix matching and no trailing-slash normalization, so
//! `/configuration/` and `/configuration/extra` activate nothing.

use std::fmt;

/// Icon shown next to a navigation entry (and elsewhere in the shell).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Home,
    Download,
    Settings,
    Terminal,
    Puzzle,
    Server,
    HelpCircle,
    FileText,
}

/// Top-level documentation pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Installation,
    Configuration,
    Usage,
    Providers,
    Service,
    Troubleshooting,
    Changelog,
}

impl Route {
    /// Every route, in navigation order.
    pub const ALL: [Route; 8] = [
        Route::Home,
        Route::Installation,
        Route::Configuration,
        Route::Usage,
        Route::Providers,
        Route::Service,
        Route::Troubleshooting,
        Route::Changelog,
    ];

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Installation => "/installation",
            Route::Configuration => "/configuration",
            Route::Usage => "/usage",
            Route::Providers => "/providers",
            Route::Service => "/service",
            Route::Troubleshooting => "/troubleshooting",
            Route::Changelog => "/changelog",
        }
    }

    #[must_use]
    pub fn icon(self) -> Icon {
        match self {
            Route::Home => Icon::Home,
            Route::Installation => Icon::Download,
            Route::Configuration => Icon::Settings,
            Route::Usage => Icon::Terminal,
            Route::Providers => Icon::Puzzle,
            Route::Service => Icon::Server,
            Route::Troubleshooting => Icon::HelpCircle,
            Route::Changelog => Icon::FileText,
        }
    }

    /// Translation key of the navigation label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Route::Home => "nav.home",
            Route::Installation => "nav.installation",
            Route::Configuration => "nav.configuration",
            Route::Usage => "nav.usage",
            Route::Providers => "nav.providers",
            Route::Service => "nav.service",
            Route::Troubleshooting => "nav.troubleshooting",
            Route::Changelog => "nav.changelog",
        }
    }

    /// Route whose path equals `path` exactly.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Route> {
        Route::ALL.into_iter().find(|route| route.path() == path)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Static navigation list shared by the sidebar and the drawer.
#[must_use]
pub fn routes() -> &'static [Route] {
    &Route::ALL
}

/// Exact-match active check.
#[must_use]
pub fn is_active(path: &str, location: &Location) -> bool {
    location.path() == path
}

/// Current pathname. May name a page that does not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    path: String,
}

impl Default for Location {
    fn default() -> Self {
        Self {
            path: Route::Home.path().to_string(),
        }
    }
}

impl Location {
    /// Parses a pathname or a hash-router fragment (`#/usage`).
    ///
    /// Query strings are dropped. An empty input is the home page.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        let input = input.strip_prefix('#').unwrap_or(input);
        let input = input.split('?').next().unwrap_or_default();

        let path = if input.is_empty() {
            Route::Home.path().to_string()
        } else if input.starts_with('/') {
            input.to_string()
        } else {
            format!("/{input}")
        };

        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn route(&self) -> Option<Route> {
        Route::from_path(&self.path)
    }
}

impl From<Route> for Location {
    fn from(route: Route) -> Self {
        Self {
            path: route.path().to_string(),
        }
    }
}

/// Holds the current location.
#[derive(Debug, Clone, Default)]
pub struct Router {
    location: Location,
}

impl Router {
    #[must_use]
    pub fn new(location: Location) -> Self {
        Self { location }
    }

    #[must_use]
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Page matching the current location, if any.
    #[must_use]
    pub fn active_route(&self) -> Option<Route> {
        self.location.route()
    }

    /// Moves to `location`. Returns `true` if the location changed.
    pub fn navigate(&mut self, location: impl Into<Location>) -> bool {
        let location = location.into();
        if location == self.location {
            return false;
        }
        tracing::debug!(from = self.location.path(), to = location.path(), "navigate");
        self.location = location;
        true
    }
}
