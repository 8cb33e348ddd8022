use super::*;
use crate::route::SiteRoute;

// =============================================================
// NavState
// =============================================================

#[test]
fn nav_state_default_menu_closed() {
    assert!(!NavState::default().menu_open);
}

#[test]
fn toggle_menu_opens_then_closes() {
    let mut state = NavState::default();
    state.toggle_menu();
    assert!(state.menu_open);
    state.toggle_menu();
    assert!(!state.menu_open);
}

#[test]
fn even_toggle_count_restores_initial_state() {
    for initial in [false, true] {
        let mut state = NavState { menu_open: initial };
        for _ in 0..6 {
            state.toggle_menu();
        }
        assert_eq!(state.menu_open, initial);
    }
}

#[test]
fn select_link_closes_open_menu() {
    let mut state = NavState { menu_open: true };
    state.select_link();
    assert!(!state.menu_open);
}

#[test]
fn select_link_keeps_closed_menu_closed() {
    let mut state = NavState::default();
    state.select_link();
    assert!(!state.menu_open);
}

#[test]
fn select_any_link_after_toggle_closes() {
    for _route in SiteRoute::ALL {
        let mut state = NavState::default();
        state.toggle_menu();
        state.select_link();
        assert_eq!(state, NavState::default());
    }
}

// =============================================================
// is_active
// =============================================================

#[test]
fn is_active_exact_match() {
    assert!(is_active("/features", "/features"));
    assert!(is_active("/", "/"));
}

#[test]
fn is_active_is_case_sensitive() {
    assert!(!is_active("/features", "/Features"));
}

#[test]
fn is_active_has_no_prefix_match() {
    assert!(!is_active("/features", "/"));
    assert!(!is_active("/about", "/about/team"));
}

#[test]
fn is_active_has_no_trailing_slash_normalization() {
    assert!(!is_active("/download/", "/download"));
    assert!(!is_active(" /download", "/download"));
}

#[test]
fn download_location_marks_only_download_link() {
    let current = "/download";
    let active: Vec<_> = SiteRoute::ALL
        .into_iter()
        .filter(|route| is_active(current, route.path()))
        .collect();
    assert_eq!(active, [SiteRoute::Download]);
}

#[test]
fn unknown_location_marks_no_link() {
    assert!(SiteRoute::ALL.into_iter().all(|route| !is_active("/nonexistent", route.path())));
}
