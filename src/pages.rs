//! Page generation modules
//!
//! Each page composes section components inside the shared layout. The
//! landing page has its own module; every other route renders a standard
//! heading section.

pub mod home;
pub mod section;
