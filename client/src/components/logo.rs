//! Audibly brand mark shared by the navbar and footer.

use leptos::prelude::*;

#[component]
pub fn BrandLogo() -> impl IntoView {
    view! {
        <svg class="logo-icon" viewBox="0 0 40 40" fill="none" xmlns="http://www.w3.org/2000/svg" aria-hidden="true">
            <circle cx="20" cy="20" r="18" stroke="currentColor" stroke-width="2"/>
            <path d="M20 8C13.373 8 8 13.373 8 20s5.373 12 12 12" stroke="currentColor" stroke-width="2" stroke-linecap="round"/>
            <path d="M20 12c-4.418 0-8 3.582-8 8s3.582 8 8 8" stroke="currentColor" stroke-width="2" stroke-linecap="round"/>
            <circle cx="20" cy="20" r="3" fill="currentColor"/>
        </svg>
        <span>"Audibly"</span>
    }
}
