//! Site footer with brand blurb, grouped links, and event credit.

#[cfg(test)]
#[path = "footer_test.rs"]
mod footer_test;

use leptos::prelude::*;

use crate::components::logo::BrandLogo;
use crate::config::SiteConfig;
use crate::pages::about::TEAM_ANCHOR;
use crate::route::SiteRoute;

/// Footer link: a table route plus an optional in-page fragment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FooterLink {
    pub label: &'static str,
    pub route: SiteRoute,
    pub fragment: Option<&'static str>,
}

impl FooterLink {
    const fn to(label: &'static str, route: SiteRoute) -> Self {
        Self { label, route, fragment: None }
    }

    #[must_use]
    pub fn href(&self) -> String {
        match self.fragment {
            Some(fragment) => format!("{}#{fragment}", self.route.path()),
            None => self.route.path().to_owned(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FooterGroup {
    pub heading: &'static str,
    pub links: &'static [FooterLink],
}

pub const FOOTER_GROUPS: [FooterGroup; 2] = [
    FooterGroup {
        heading: "Product",
        links: &[
            FooterLink::to("Features", SiteRoute::Features),
            FooterLink::to("Download", SiteRoute::Download),
        ],
    },
    FooterGroup {
        heading: "Company",
        links: &[
            FooterLink::to("About Us", SiteRoute::About),
            FooterLink { label: "Team", route: SiteRoute::About, fragment: Some(TEAM_ANCHOR) },
        ],
    },
];

pub const TAGLINE: &str = "Eliminating access bias in workplace meetings through inclusive technology.";

#[component]
pub fn Footer() -> impl IntoView {
    let config = expect_context::<SiteConfig>();

    view! {
        <footer class="footer">
            <div class="footer-decoration" aria-hidden="true">
                <svg class="footer-leaf footer-leaf-1" viewBox="0 0 60 60" fill="none">
                    <path d="M30 5C15 5 5 20 5 35c0 10 8 20 25 20 5-15 5-35 0-50z" fill="currentColor" opacity="0.1"/>
                </svg>
                <svg class="footer-leaf footer-leaf-2" viewBox="0 0 60 60" fill="none">
                    <path d="M30 5C15 5 5 20 5 35c0 10 8 20 25 20 5-15 5-35 0-50z" fill="currentColor" opacity="0.1"/>
                </svg>
            </div>

            <div class="container">
                <div class="footer-content">
                    <div class="footer-brand">
                        <a href=SiteRoute::Home.path() class="footer-logo">
                            <BrandLogo/>
                        </a>
                        <p>{TAGLINE}</p>
                    </div>

                    <nav class="footer-nav">
                        {FOOTER_GROUPS
                            .into_iter()
                            .map(|group| {
                                view! {
                                    <div class="footer-nav-group">
                                        <h4>{group.heading}</h4>
                                        {group
                                            .links
                                            .iter()
                                            .map(|link| view! { <a href=link.href()>{link.label}</a> })
                                            .collect_view()}
                                    </div>
                                }
                            })
                            .collect_view()}
                    </nav>
                </div>

                <div class="footer-bottom">
                    <p>"Built for " <strong>{config.event_name}</strong></p>
                    <p>"Creating meeting equity for every organization."</p>
                </div>
            </div>
        </footer>
    }
}
