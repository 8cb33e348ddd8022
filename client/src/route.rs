//! Fixed route table for the site.
//!
//! DESIGN
//! ======
//! Routes are a closed enum rather than a string map so every consumer
//! (router, navbar, page titles) is checked for exhaustiveness at compile
//! time. Path matching is exact: case-sensitive, untrimmed, and without
//! trailing-slash normalization.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

use serde::{Deserialize, Serialize};

/// Site name appended to every document title.
pub const SITE_NAME: &str = "Audibly";

/// One of the four pages the site serves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SiteRoute {
    Home,
    Features,
    Download,
    About,
}

/// Route lookup failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// The path is not in the route table.
    #[error("no route for path {path:?}")]
    NotFound { path: String },
}

impl SiteRoute {
    /// All routes in navigation order.
    pub const ALL: [SiteRoute; 4] = [SiteRoute::Home, SiteRoute::Features, SiteRoute::Download, SiteRoute::About];

    /// Absolute URL path for this route.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Features => "/features",
            Self::Download => "/download",
            Self::About => "/about",
        }
    }

    /// Router segment (the path without its leading slash).
    #[must_use]
    pub fn segment(self) -> &'static str {
        &self.path()[1..]
    }

    /// Label shown in the navigation bar.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Features => "Features",
            Self::Download => "Download",
            Self::About => "About",
        }
    }

    /// Page title, without the site suffix.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Every Voice Heard in Every Meeting",
            Self::Features => "Features",
            Self::Download => "Download",
            Self::About => "About Us",
        }
    }

    /// Full `<title>` text for the page.
    #[must_use]
    pub fn document_title(self) -> String {
        format!("{} | {SITE_NAME}", self.title())
    }

    /// Resolve a request path to a route.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::NotFound`] when `path` is not exactly one of the
    /// four table paths.
    pub fn resolve(path: &str) -> Result<Self, RouteError> {
        Self::ALL
            .into_iter()
            .find(|route| route.path() == path)
            .ok_or_else(|| RouteError::NotFound { path: path.to_owned() })
    }

    /// Resolve an in-site link target, ignoring any `#fragment`.
    ///
    /// Fragments address a position inside a page and never reach the
    /// router, so `/about#team` resolves to [`SiteRoute::About`].
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::NotFound`] when the part before the fragment is
    /// not a table path.
    pub fn from_href(href: &str) -> Result<Self, RouteError> {
        let path = href.split_once('#').map_or(href, |(path, _)| path);
        Self::resolve(path)
    }
}
