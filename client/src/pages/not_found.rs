//! Fallback page for paths outside the route table.
//!
//! On the server the response status is set to 404 so crawlers and health
//! checks see the miss; in the browser it only renders the message.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::decorations::{Butterfly, Wave};
use crate::route::{SITE_NAME, SiteRoute};

#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text=format!("Page Not Found | {SITE_NAME}")/>
        <div class="not-found-page">
            <section class="page-header">
                <Butterfly class="header-butterfly" size=45/>
                <div class="container">
                    <span class="section-badge">"404"</span>
                    <h1>"Page Not Found"</h1>
                    <p>"The page you're looking for doesn't exist or has moved."</p>
                    <a href=SiteRoute::Home.path() class="btn btn-primary btn-lg">
                        "Back to Home"
                    </a>
                </div>
                <Wave class="header-wave"/>
            </section>
        </div>
    }
}
