//! Scroll-driven navbar behavior: shadow depth, anchor scrolling and the
//! highlighted link.

/// Scroll offset (px) past which the navbar gets the larger shadow.
pub const SHADOW_THRESHOLD: f64 = 50.0;

/// Distance (px) below the viewport top used to decide the current section.
pub const ACTIVE_SECTION_OFFSET: f64 = 100.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Shadow {
    #[default]
    Medium,
    Large,
}

impl Shadow {
    pub fn for_scroll(scroll_top: f64) -> Self {
        if scroll_top > SHADOW_THRESHOLD {
            Shadow::Large
        } else {
            Shadow::Medium
        }
    }
}

/// A page section that navigation links point at.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl Section {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Where to scroll so a section's top sits just below a fixed navbar.
pub fn scroll_target(section_top: f64, nav_height: f64) -> f64 {
    (section_top - nav_height).max(0.0)
}

/// The section under the probe line at `scroll_y`.
///
/// When sections overlap the last one in document order wins.
pub fn active_section(sections: &[Section], scroll_y: f64) -> Option<&str> {
    let probe = scroll_y + ACTIVE_SECTION_OFFSET;
    sections
        .iter()
        .rev()
        .find(|section| section.contains(probe))
        .map(|section| section.id.as_str())
}

/// Whether a link with `href` should be highlighted for `active`.
///
/// With no active section the current id is empty, so a bare `#` link
/// matches.
pub fn is_link_active(href: &str, active: Option<&str>) -> bool {
    href.strip_prefix('#') == Some(active.unwrap_or(""))
}
