//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the layout shell (navbar, footer) and the decorative
//! and icon primitives that pages compose with their copy.

pub mod decorations;
pub mod footer;
pub mod icon;
pub mod logo;
pub mod navbar;
pub mod sections;
