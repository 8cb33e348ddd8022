use super::*;

// =============================================================
// resolve
// =============================================================

#[test]
fn resolve_maps_every_table_path() {
    assert_eq!(SiteRoute::resolve("/"), Ok(SiteRoute::Home));
    assert_eq!(SiteRoute::resolve("/features"), Ok(SiteRoute::Features));
    assert_eq!(SiteRoute::resolve("/download"), Ok(SiteRoute::Download));
    assert_eq!(SiteRoute::resolve("/about"), Ok(SiteRoute::About));
}

#[test]
fn resolve_is_stable_across_calls() {
    for route in SiteRoute::ALL {
        let first = SiteRoute::resolve(route.path());
        let second = SiteRoute::resolve(route.path());
        assert_eq!(first, second);
        assert_eq!(first, Ok(route));
    }
}

#[test]
fn resolve_unknown_path_is_not_found() {
    assert_eq!(
        SiteRoute::resolve("/nonexistent"),
        Err(RouteError::NotFound { path: "/nonexistent".to_owned() })
    );
}

#[test]
fn resolve_is_case_sensitive() {
    assert!(SiteRoute::resolve("/Features").is_err());
    assert!(SiteRoute::resolve("/ABOUT").is_err());
}

#[test]
fn resolve_does_not_normalize_slashes_or_whitespace() {
    assert!(SiteRoute::resolve("/features/").is_err());
    assert!(SiteRoute::resolve(" /features").is_err());
    assert!(SiteRoute::resolve("features").is_err());
    assert!(SiteRoute::resolve("").is_err());
}

#[test]
fn resolve_rejects_fragment_paths() {
    assert!(SiteRoute::resolve("/about#team").is_err());
}

#[test]
fn not_found_error_names_the_path() {
    let err = SiteRoute::resolve("/pricing").unwrap_err();
    assert_eq!(err.to_string(), "no route for path \"/pricing\"");
}

// =============================================================
// from_href
// =============================================================

#[test]
fn from_href_strips_fragment() {
    assert_eq!(SiteRoute::from_href("/about#team"), Ok(SiteRoute::About));
    assert_eq!(SiteRoute::from_href("/#top"), Ok(SiteRoute::Home));
}

#[test]
fn from_href_without_fragment_matches_resolve() {
    for route in SiteRoute::ALL {
        assert_eq!(SiteRoute::from_href(route.path()), SiteRoute::resolve(route.path()));
    }
}

#[test]
fn from_href_unknown_path_is_not_found() {
    assert!(SiteRoute::from_href("/team#about").is_err());
}

// =============================================================
// Route metadata
// =============================================================

#[test]
fn segment_drops_leading_slash() {
    assert_eq!(SiteRoute::Home.segment(), "");
    assert_eq!(SiteRoute::Features.segment(), "features");
    assert_eq!(SiteRoute::Download.segment(), "download");
    assert_eq!(SiteRoute::About.segment(), "about");
}

#[test]
fn labels_and_titles_are_distinct() {
    for (i, a) in SiteRoute::ALL.iter().enumerate() {
        for (j, b) in SiteRoute::ALL.iter().enumerate() {
            if i != j {
                assert_ne!(a.label(), b.label());
                assert_ne!(a.title(), b.title());
                assert_ne!(a.path(), b.path());
            }
        }
    }
}

#[test]
fn document_title_appends_site_name() {
    assert_eq!(SiteRoute::Download.document_title(), "Download | Audibly");
    assert_eq!(SiteRoute::About.document_title(), "About Us | Audibly");
}

#[test]
fn all_lists_navigation_order() {
    let labels: Vec<_> = SiteRoute::ALL.iter().map(|r| r.label()).collect();
    assert_eq!(labels, ["Home", "Features", "Download", "About"]);
}

#[test]
fn route_deserializes_from_snake_case() {
    let value = serde::de::value::StrDeserializer::<serde::de::value::Error>::new("download");
    assert_eq!(SiteRoute::deserialize(value), Ok(SiteRoute::Download));
}
