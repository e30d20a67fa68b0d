//! Client-side state models.
//!
//! DESIGN
//! ======
//! Each model is plain Rust with no DOM types so it can be exercised natively.
//! Components own one instance per page and mirror it into the DOM.

pub mod favorite;
pub mod language;
pub mod tags;
pub mod theme;
