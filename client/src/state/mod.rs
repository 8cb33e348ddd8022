//! Client-side UI state.
//!
//! DESIGN
//! ======
//! The site has no shared application state. The only mutable value is the
//! navigation menu toggle, owned by the navbar for the lifetime of its mount.

pub mod nav;
