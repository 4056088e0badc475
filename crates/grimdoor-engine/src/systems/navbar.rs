//! Navigation chrome: scrolled styling, the mobile menu, and the
//! anchor-scroll offset that compensates for the fixed navbar.

/// Navigation bar and mobile menu state.
#[derive(Debug, Default)]
pub struct NavState {
    scrolled: bool,
    menu_open: bool,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the scrolled flag from a scroll position. Returns the new flag
    /// only when it changed, so the bridge toggles classes on transitions
    /// rather than on every scroll event.
    pub fn on_scroll(&mut self, y: f32, threshold: f32) -> Option<bool> {
        let scrolled = y > threshold;
        if scrolled != self.scrolled {
            self.scrolled = scrolled;
            Some(scrolled)
        } else {
            None
        }
    }

    /// Toggle the mobile menu. Returns the new open state.
    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    /// Close the mobile menu (nav link clicked). Returns true if it was open.
    pub fn close_menu(&mut self) -> bool {
        let was_open = self.menu_open;
        self.menu_open = false;
        was_open
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }
}

/// Scroll destination for an in-page anchor: the target's viewport-relative
/// top plus the current page offset, minus the navbar height so the heading
/// is not hidden under the fixed bar.
pub fn anchor_target_y(target_top: f32, page_y: f32, nav_height: f32) -> f32 {
    target_top + page_y - nav_height
}
