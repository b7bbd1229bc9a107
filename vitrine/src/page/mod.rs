//! Small page behaviors around the contact form.
//!
//! Each type models one widget's state; geometry comes in as plain numbers
//! (CSS pixels) measured by the host.

pub mod accordion;
pub mod menu;
pub mod navbar;
pub mod newsletter;
pub mod reveal;

pub use accordion::Accordion;
pub use menu::{MOBILE_BREAKPOINT, MobileMenu};
pub use navbar::{
    ACTIVE_SECTION_OFFSET, SHADOW_THRESHOLD, Section, Shadow, active_section, is_link_active,
    scroll_target,
};
pub use newsletter::Newsletter;
pub use reveal::{REVEAL_BOTTOM_MARGIN, REVEAL_THRESHOLD, RevealTracker};
