//! Site configuration baked in at build time.
//!
//! SSR output and the hydrated WASM bundle must render identical markup, so
//! values are read with `option_env!` when the crate is compiled rather than
//! at request time. Both builds see the same environment under
//! `cargo leptos build`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Placeholder download target used until a release artifact is published.
pub const DEFAULT_DOWNLOAD_URL: &str = "https://google.com";
pub const DEFAULT_EVENT_NAME: &str = "HackTheBias 2026";
pub const APP_VERSION: &str = "1.0.0";

/// Values provided to every page through Leptos context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    /// External link behind the "Download for Windows" button.
    pub download_url: String,
    /// Event credited in the footer and on the About page.
    pub event_name: String,
    /// Version shown on the download card.
    pub app_version: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            download_url: DEFAULT_DOWNLOAD_URL.to_owned(),
            event_name: DEFAULT_EVENT_NAME.to_owned(),
            app_version: APP_VERSION.to_owned(),
        }
    }
}

impl SiteConfig {
    /// Build config from compile-time environment variables.
    ///
    /// Optional:
    /// - `AUDIBLY_DOWNLOAD_URL`: must be `http(s)://`, otherwise the default
    /// - `AUDIBLY_EVENT_NAME`: default `HackTheBias 2026`
    /// - `AUDIBLY_APP_VERSION`: default `1.0.0`
    #[must_use]
    pub fn from_build_env() -> Self {
        Self {
            download_url: normalize_download_url(option_env!("AUDIBLY_DOWNLOAD_URL")),
            event_name: non_empty_or(option_env!("AUDIBLY_EVENT_NAME"), DEFAULT_EVENT_NAME),
            app_version: non_empty_or(option_env!("AUDIBLY_APP_VERSION"), APP_VERSION),
        }
    }
}

/// Accept a configured download URL only if it is an absolute web URL.
#[must_use]
pub fn normalize_download_url(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(url) if is_web_url(url) => url.to_owned(),
        _ => DEFAULT_DOWNLOAD_URL.to_owned(),
    }
}

fn is_web_url(url: &str) -> bool {
    ["https://", "http://"]
        .iter()
        .any(|scheme| url.strip_prefix(scheme).is_some_and(|rest| !rest.is_empty()))
}

fn non_empty_or(raw: Option<&str>, default: &str) -> String {
    raw.map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(default)
        .to_owned()
}
