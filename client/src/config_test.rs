use super::*;

// =============================================================
// normalize_download_url
// =============================================================

#[test]
fn download_url_unset_uses_default() {
    assert_eq!(normalize_download_url(None), DEFAULT_DOWNLOAD_URL);
}

#[test]
fn download_url_accepts_https() {
    let url = "https://downloads.example.com/audibly-setup.exe";
    assert_eq!(normalize_download_url(Some(url)), url);
}

#[test]
fn download_url_accepts_http() {
    assert_eq!(normalize_download_url(Some("http://localhost:8080/a.exe")), "http://localhost:8080/a.exe");
}

#[test]
fn download_url_trims_whitespace() {
    assert_eq!(normalize_download_url(Some("  https://example.com/x  ")), "https://example.com/x");
}

#[test]
fn download_url_rejects_other_schemes() {
    assert_eq!(normalize_download_url(Some("javascript:alert(1)")), DEFAULT_DOWNLOAD_URL);
    assert_eq!(normalize_download_url(Some("ftp://example.com/a.exe")), DEFAULT_DOWNLOAD_URL);
    assert_eq!(normalize_download_url(Some("/download")), DEFAULT_DOWNLOAD_URL);
}

#[test]
fn download_url_rejects_bare_scheme_and_empty() {
    assert_eq!(normalize_download_url(Some("https://")), DEFAULT_DOWNLOAD_URL);
    assert_eq!(normalize_download_url(Some("")), DEFAULT_DOWNLOAD_URL);
}

// =============================================================
// SiteConfig
// =============================================================

#[test]
fn default_config_uses_constants() {
    let config = SiteConfig::default();
    assert_eq!(config.download_url, DEFAULT_DOWNLOAD_URL);
    assert_eq!(config.event_name, DEFAULT_EVENT_NAME);
    assert_eq!(config.app_version, APP_VERSION);
}

#[test]
fn build_env_config_has_web_download_url() {
    let config = SiteConfig::from_build_env();
    assert!(config.download_url.starts_with("http"));
    assert!(!config.event_name.is_empty());
}

#[test]
fn non_empty_or_falls_back_on_blank() {
    assert_eq!(non_empty_or(Some("   "), "x"), "x");
    assert_eq!(non_empty_or(None, "x"), "x");
    assert_eq!(non_empty_or(Some(" y "), "x"), "y");
}
