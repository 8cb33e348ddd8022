//! Decorative SVG primitives: butterflies, leaves, waves, and circles.
//!
//! Every primitive is a stateless function of its size, flip flag, and
//! extra class. The class and style strings are computed by the plain
//! helpers below so the markup contract can be tested without rendering.

#[cfg(test)]
#[path = "decorations_test.rs"]
mod decorations_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};

pub const BUTTERFLY_DEFAULT_SIZE: u32 = 40;
pub const LEAF_DEFAULT_SIZE: u32 = 50;
pub const CIRCLE_DEFAULT_SIZE: u32 = 200;

/// One member of a decoration cluster.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ornament {
    Leaf { size: u32, flip: bool },
    Butterfly { size: u32 },
}

/// The hero cluster: six floating primitives, each with its own animation
/// class.
pub const FLOATING_CLUSTER: [(&str, Ornament); 6] = [
    ("float-1", Ornament::Leaf { size: 60, flip: false }),
    ("float-2", Ornament::Leaf { size: 45, flip: true }),
    ("float-3", Ornament::Leaf { size: 55, flip: false }),
    ("float-4", Ornament::Butterfly { size: 35 }),
    ("float-5", Ornament::Leaf { size: 40, flip: true }),
    ("float-6", Ornament::Butterfly { size: 45 }),
];

/// Join a primitive's base class with a caller-supplied placement class.
#[must_use]
pub fn decoration_class(base: &str, extra: &str) -> String {
    let extra = extra.trim();
    if extra.is_empty() { base.to_owned() } else { format!("{base} {extra}") }
}

/// Horizontal mirror used by [`Leaf`].
#[must_use]
pub fn mirror_style(flip: bool) -> &'static str {
    if flip { "transform: scaleX(-1)" } else { "transform: none" }
}

/// Half-turn used by [`Wave`] so a section can close with an inverted edge.
#[must_use]
pub fn wave_style(flip: bool) -> &'static str {
    if flip { "transform: rotate(180deg)" } else { "transform: none" }
}

/// Inline sizing for [`Circle`].
#[must_use]
pub fn circle_style(size: u32) -> String {
    format!("width: {size}px; height: {size}px")
}

#[component]
pub fn Butterfly(#[prop(into, optional)] class: String, #[prop(default = BUTTERFLY_DEFAULT_SIZE)] size: u32) -> impl IntoView {
    view! {
        <svg
            class=decoration_class("decoration butterfly", &class)
            width=size.to_string()
            height=size.to_string()
            viewBox="0 0 60 60"
            fill="none"
            xmlns="http://www.w3.org/2000/svg"
            aria-hidden="true"
        >
            <path
                d="M30 15c-8-12-25-8-25 8 0 12 15 22 25 32 10-10 25-20 25-32 0-16-17-20-25-8z"
                fill="currentColor"
                opacity="0.15"
            />
            <path
                d="M30 25c-5-8-15-5-15 5 0 8 10 14 15 20 5-6 15-12 15-20 0-10-10-13-15-5z"
                fill="currentColor"
                opacity="0.25"
            />
            <ellipse cx="30" cy="35" rx="2" ry="12" fill="currentColor" opacity="0.4"/>
        </svg>
    }
}

#[component]
pub fn Leaf(
    #[prop(into, optional)] class: String,
    #[prop(default = LEAF_DEFAULT_SIZE)] size: u32,
    #[prop(optional)] flip: bool,
) -> impl IntoView {
    view! {
        <svg
            class=decoration_class("decoration leaf", &class)
            width=size.to_string()
            height=size.to_string()
            viewBox="0 0 60 60"
            fill="none"
            xmlns="http://www.w3.org/2000/svg"
            style=mirror_style(flip)
            aria-hidden="true"
        >
            <path d="M10 50C10 25 25 10 50 10c-5 15-15 25-25 30-5 3-10 8-15 10z" fill="currentColor" opacity="0.12"/>
            <path d="M15 45c5-20 15-30 35-35-5 12-12 22-22 28-4 2-8 5-13 7z" fill="currentColor" opacity="0.08"/>
            <path d="M12 48c10-15 20-25 38-38" stroke="currentColor" stroke-width="1" opacity="0.15"/>
        </svg>
    }
}

/// Full-width section edge.
#[component]
pub fn Wave(#[prop(into, optional)] class: String, #[prop(optional)] flip: bool) -> impl IntoView {
    view! {
        <svg
            class=decoration_class("wave", &class)
            viewBox="0 0 1440 120"
            fill="none"
            xmlns="http://www.w3.org/2000/svg"
            preserveAspectRatio="none"
            style=wave_style(flip)
            aria-hidden="true"
        >
            <path d="M0 60c240-40 480 40 720 0s480-40 720 0v60H0z" fill="currentColor"/>
        </svg>
    }
}

/// Blurred background disc. Rendered as a sized `div`; the look comes from CSS.
#[component]
pub fn Circle(#[prop(into, optional)] class: String, #[prop(default = CIRCLE_DEFAULT_SIZE)] size: u32) -> impl IntoView {
    view! { <div class=decoration_class("decoration-circle", &class) style=circle_style(size) aria-hidden="true"></div> }
}

#[component]
pub fn FloatingLeaves(#[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <div class=decoration_class("floating-leaves", &class)>
            {FLOATING_CLUSTER.into_iter().map(|(class, item)| ornament(class, item)).collect_view()}
        </div>
    }
}

/// Render a single cluster member with its placement class.
pub fn ornament(class: &'static str, ornament: Ornament) -> AnyView {
    match ornament {
        Ornament::Leaf { size, flip } => view! { <Leaf class=class size=size flip=flip/> }.into_any(),
        Ornament::Butterfly { size } => view! { <Butterfly class=class size=size/> }.into_any(),
    }
}
