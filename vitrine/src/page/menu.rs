/// Viewport width (px) at or below which the navigation collapses into the
/// mobile menu.
pub const MOBILE_BREAKPOINT: f64 = 968.0;

/// Collapsible navigation shown on narrow screens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Hamburger button pressed.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// A navigation link was followed. On mobile widths the menu closes.
    pub fn link_clicked(&mut self, viewport_width: f64) {
        if viewport_width <= MOBILE_BREAKPOINT {
            self.open = false;
        }
    }
}
