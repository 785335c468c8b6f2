//! Utility helpers shared across controllers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure string builders with no browser dependency, so markup and URL
//! construction can be tested natively.

pub mod html;
pub mod styles;
