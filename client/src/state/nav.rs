#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Navigation shell state: whether the collapsible menu is expanded.
///
/// Created closed when the navbar mounts and dropped with it. The navbar
/// wraps it in a local `RwSignal`; it is never provided as context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub menu_open: bool,
}

impl NavState {
    /// Flip the menu between open and closed.
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Close the menu after a link is chosen or the location changes.
    pub fn select_link(&mut self) {
        self.menu_open = false;
    }
}

/// Whether a navigation link targets the page currently displayed.
///
/// Exact string equality: no prefix match, no case folding, and no
/// trailing-slash normalization.
#[must_use]
pub fn is_active(current_path: &str, link_path: &str) -> bool {
    current_path == link_path
}
