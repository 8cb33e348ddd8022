//! Site header with brand, primary links, and collapsible mobile menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! The navbar is mounted once by `App` around every page. It owns the only
//! piece of mutable UI state on the site (`NavState`), scoped to its own
//! lifetime, and derives link highlighting from the router location.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::logo::BrandLogo;
use crate::route::SiteRoute;
use crate::state::nav::{NavState, is_active};

/// Class for a primary navigation link.
#[must_use]
pub fn link_class(active: bool) -> &'static str {
    if active { "navbar-link active" } else { "navbar-link" }
}

/// Class for the collapsible link list.
#[must_use]
pub fn menu_class(open: bool) -> &'static str {
    if open { "navbar-menu active" } else { "navbar-menu" }
}

/// Class for the hamburger button.
#[must_use]
pub fn toggle_class(open: bool) -> &'static str {
    if open { "navbar-toggle active" } else { "navbar-toggle" }
}

/// `aria-expanded` value mirroring the menu state.
#[must_use]
pub fn aria_expanded(open: bool) -> &'static str {
    if open { "true" } else { "false" }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let nav = RwSignal::new(NavState::default());
    let pathname = use_location().pathname;

    // Back/forward navigation never fires a link click; close on any path change.
    Effect::new(move |_| {
        pathname.track();
        nav.update(NavState::select_link);
    });

    let menu_open = move || nav.get().menu_open;
    let close_menu = move |_: leptos::ev::MouseEvent| nav.update(NavState::select_link);

    view! {
        <header class="navbar">
            <nav class="navbar-container">
                <a href=SiteRoute::Home.path() class="navbar-logo" on:click=close_menu>
                    <BrandLogo/>
                </a>

                <button
                    class=move || toggle_class(menu_open())
                    on:click=move |_| nav.update(NavState::toggle_menu)
                    aria-label="Toggle navigation"
                    aria-expanded=move || aria_expanded(menu_open())
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <ul class=move || menu_class(menu_open())>
                    {SiteRoute::ALL
                        .into_iter()
                        .map(move |route| {
                            let active = move || is_active(&pathname.get(), route.path());
                            view! {
                                <li>
                                    <a
                                        href=route.path()
                                        class=move || link_class(active())
                                        aria-current=move || active().then_some("page")
                                        on:click=close_menu
                                    >
                                        {route.label()}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                    <li class="navbar-cta">
                        <a href=SiteRoute::Download.path() class="btn btn-primary btn-sm" on:click=close_menu>
                            "Get Started"
                        </a>
                    </li>
                </ul>
            </nav>
        </header>
    }
}
