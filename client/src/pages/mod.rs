//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page is static content: copy lives in `const` tables next to the
//! page and is rendered through the shared `components`. Pages set their own
//! document title from the route table.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

pub mod about;
pub mod download;
pub mod features;
pub mod home;
pub mod not_found;

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};

use crate::components::icon::IconKind;
use crate::route::SiteRoute;

impl SiteRoute {
    /// Page rendered for this route. The router mounts pages only through
    /// this match.
    pub fn view(self) -> AnyView {
        match self {
            Self::Home => view! { <home::HomePage/> }.into_any(),
            Self::Features => view! { <features::FeaturesPage/> }.into_any(),
            Self::Download => view! { <download::DownloadPage/> }.into_any(),
            Self::About => view! { <about::AboutPage/> }.into_any(),
        }
    }
}

/// Icon, heading, and paragraph: the card shape used on every page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Card {
    pub icon: IconKind,
    pub title: &'static str,
    pub body: &'static str,
}

/// Numbered step (solution steps, install guide, timeline).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub title: &'static str,
    pub body: &'static str,
}

/// Number label for the step at `index` in a list.
#[must_use]
pub fn step_number(index: usize) -> String {
    (index + 1).to_string()
}
