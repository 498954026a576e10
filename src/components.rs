//! Reusable HTML components for page generation
//!
//! Section components (hero, about preview) render fixed content. The
//! navigation bar is the only component whose output depends on state:
//! the current route and the mobile menu state.

pub mod about_preview;
pub mod footer;
pub mod hero;
pub mod icons;
pub mod layout;
pub mod navbar;
