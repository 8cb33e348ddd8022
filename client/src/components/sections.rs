//! Section scaffolding repeated across pages: the inner-page header band
//! and the closing call-to-action banner.

use leptos::prelude::*;

use crate::components::decorations::{Circle, Ornament, Wave, ornament};
use crate::components::icon::{Icon, IconKind};

/// Header band at the top of every page except Home.
#[component]
pub fn PageHeader(
    badge: &'static str,
    title: &'static str,
    subtitle: &'static str,
    circle_size: u32,
    /// Single decoration floated in the header corner.
    accent: (&'static str, Ornament),
) -> impl IntoView {
    let (accent_class, accent_ornament) = accent;
    view! {
        <section class="page-header">
            <Circle class="header-circle" size=circle_size/>
            {ornament(accent_class, accent_ornament)}

            <div class="container">
                <span class="section-badge">{badge}</span>
                <h1>{title}</h1>
                <p>{subtitle}</p>
            </div>

            <Wave class="header-wave"/>
        </section>
    }
}

/// Centered `section-header` block used above grids and lists.
#[component]
pub fn SectionHeading(
    badge: &'static str,
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="section-header">
            <span class="section-badge">{badge}</span>
            <h2 class="section-title">{title}</h2>
            {subtitle.map(|text| view! { <p class="section-subtitle">{text}</p> })}
        </div>
    }
}

/// Closing banner linking to an in-site page.
#[component]
pub fn CtaBanner(
    title: &'static str,
    body: &'static str,
    action: &'static str,
    href: &'static str,
    /// Trailing glyph inside the button.
    #[prop(optional)]
    icon: Option<IconKind>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <section class="section cta-section">
            <div class="container">
                {children.map(|c| c())}
                <div class="cta-content">
                    <h2>{title}</h2>
                    <p>{body}</p>
                    <a href=href class="btn btn-white btn-lg">
                        {action}
                        {icon.map(|kind| view! { <Icon kind=kind size=20/> })}
                    </a>
                </div>
            </div>
        </section>
    }
}
