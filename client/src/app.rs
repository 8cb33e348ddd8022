//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::config::SiteConfig;
use crate::pages::not_found::NotFoundPage;
use crate::route::SiteRoute;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta
                    name="description"
                    content="Audibly removes access bias from workplace meetings with real-time captions, ASL recognition, and translation."
                />
                <link rel="preconnect" href="https://fonts.googleapis.com"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the site configuration and wraps every routed page in the
/// navbar and footer. Each route's page comes from `SiteRoute::view`;
/// paths outside the table render `NotFoundPage`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(SiteConfig::from_build_env());

    view! {
        <Stylesheet id="leptos" href="/pkg/audibly-site.css"/>

        <Router>
            <div class="app">
                <Navbar/>
                <main>
                    <Routes fallback=NotFoundPage>
                        <Route path=StaticSegment(SiteRoute::Home.segment()) view={|| SiteRoute::Home.view()}/>
                        <Route path=StaticSegment(SiteRoute::Features.segment()) view={|| SiteRoute::Features.view()}/>
                        <Route path=StaticSegment(SiteRoute::Download.segment()) view={|| SiteRoute::Download.view()}/>
                        <Route path=StaticSegment(SiteRoute::About.segment()) view={|| SiteRoute::About.view()}/>
                    </Routes>
                </main>
                <Footer/>
            </div>
        </Router>
    }
}
