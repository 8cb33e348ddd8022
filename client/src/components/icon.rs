//! Stroke icons used in cards, lists, and buttons.
//!
//! Every glyph shares the 24x24 viewBox and `currentColor` stroke so color
//! and size are controlled by the surrounding CSS.

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};

/// Named glyphs available to pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    ArrowRight,
    BarChart,
    Check,
    Clock,
    Download,
    Gear,
    Keyboard,
    Languages,
    Lightning,
    Microphone,
    Monitor,
    Padlock,
    Play,
    Shield,
    Smile,
    Users,
    Windows,
}

/// Inline SVG icon. `size` sets explicit width/height for button icons;
/// card icons leave it unset and size via CSS.
#[component]
pub fn Icon(
    kind: IconKind,
    #[prop(optional)] size: Option<u32>,
    #[prop(default = "2")] stroke_width: &'static str,
) -> impl IntoView {
    let dimension = size.map(|s| s.to_string());
    if kind == IconKind::Windows {
        return view! {
            <svg width=dimension.clone() height=dimension viewBox="0 0 24 24" fill="currentColor" aria-hidden="true">
                {glyph(kind)}
            </svg>
        }
        .into_any();
    }
    view! {
        <svg
            width=dimension.clone()
            height=dimension
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width=stroke_width
            aria-hidden="true"
        >
            {glyph(kind)}
        </svg>
    }
    .into_any()
}

fn glyph(kind: IconKind) -> AnyView {
    match kind {
        IconKind::ArrowRight => view! { <path d="M5 12h14M12 5l7 7-7 7"/> }.into_any(),
        IconKind::BarChart => view! {
            <path d="M12 20V10"/>
            <path d="M18 20V4"/>
            <path d="M6 20v-4"/>
        }
        .into_any(),
        IconKind::Check => view! { <polyline points="20,6 9,17 4,12"/> }.into_any(),
        IconKind::Clock => view! {
            <circle cx="12" cy="12" r="10"/>
            <polyline points="12,6 12,12 16,14"/>
        }
        .into_any(),
        IconKind::Download => view! {
            <path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"/>
            <polyline points="7,10 12,15 17,10"/>
            <line x1="12" y1="15" x2="12" y2="3"/>
        }
        .into_any(),
        IconKind::Gear => view! {
            <circle cx="12" cy="12" r="3"/>
            <path d="M19.4 15a1.65 1.65 0 0 0 .33 1.82l.06.06a2 2 0 0 1-2.83 2.83l-.06-.06a1.65 1.65 0 0 0-1.82-.33 1.65 1.65 0 0 0-1 1.51V21a2 2 0 0 1-4 0v-.09a1.65 1.65 0 0 0-1-1.51 1.65 1.65 0 0 0-1.82.33l-.06.06a2 2 0 0 1-2.83-2.83l.06-.06a1.65 1.65 0 0 0 .33-1.82 1.65 1.65 0 0 0-1.51-1H3a2 2 0 0 1 0-4h.09a1.65 1.65 0 0 0 1.51-1 1.65 1.65 0 0 0-.33-1.82l-.06-.06a2 2 0 0 1 2.83-2.83l.06.06a1.65 1.65 0 0 0 1.82.33H9a1.65 1.65 0 0 0 1-1.51V3a2 2 0 0 1 4 0v.09a1.65 1.65 0 0 0 1 1.51 1.65 1.65 0 0 0 1.82-.33l.06-.06a2 2 0 0 1 2.83 2.83l-.06.06a1.65 1.65 0 0 0-.33 1.82V9a1.65 1.65 0 0 0 1.51 1H21a2 2 0 0 1 0 4h-.09a1.65 1.65 0 0 0-1.51 1z"/>
        }
        .into_any(),
        IconKind::Keyboard => view! {
            <rect x="2" y="4" width="20" height="16" rx="2"/>
            <path d="M6 8h.01M10 8h.01M6 12h12M6 16h8"/>
        }
        .into_any(),
        IconKind::Languages => view! {
            <path d="M5 8l6 6M4 14l6-6 2-3M2 5h12M7 2h1"/>
            <path d="M22 22l-5-10-5 10M14 18h6"/>
        }
        .into_any(),
        IconKind::Lightning => view! { <path d="M13 2L3 14h9l-1 8 10-12h-9l1-8z"/> }.into_any(),
        IconKind::Microphone => view! {
            <path d="M12 1a3 3 0 0 0-3 3v8a3 3 0 0 0 6 0V4a3 3 0 0 0-3-3z"/>
            <path d="M19 10v2a7 7 0 0 1-14 0v-2"/>
            <line x1="12" y1="19" x2="12" y2="23"/>
            <line x1="8" y1="23" x2="16" y2="23"/>
        }
        .into_any(),
        IconKind::Monitor => view! {
            <rect x="2" y="3" width="20" height="14" rx="2"/>
            <path d="M8 21h8M12 17v4"/>
        }
        .into_any(),
        IconKind::Padlock => view! {
            <path d="M7 11V7a5 5 0 0 1 10 0v4"/>
            <rect x="3" y="11" width="18" height="11" rx="2"/>
        }
        .into_any(),
        IconKind::Play => view! { <path d="M5 3l14 9-14 9V3z"/> }.into_any(),
        IconKind::Shield => view! { <path d="M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"/> }.into_any(),
        IconKind::Smile => view! {
            <rect x="3" y="3" width="18" height="18" rx="2"/>
            <path d="M9 9h.01M15 9h.01M9 15h6"/>
        }
        .into_any(),
        IconKind::Users => view! {
            <path d="M17 21v-2a4 4 0 0 0-4-4H5a4 4 0 0 0-4 4v2"/>
            <circle cx="9" cy="7" r="4"/>
            <path d="M23 21v-2a4 4 0 0 0-3-3.87"/>
            <path d="M16 3.13a4 4 0 0 1 0 7.75"/>
        }
        .into_any(),
        IconKind::Windows => view! {
            <path d="M0 3.449L9.75 2.1v9.451H0m10.949-9.602L24 0v11.4H10.949M0 12.6h9.75v9.451L0 20.699M10.949 12.6H24V24l-12.9-1.801"/>
        }
        .into_any(),
    }
}
