//! Utility helpers shared across components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure text/time/query logic lives here next to the thin browser helpers
//! (`dark_mode`, `storage`) so components stay small and testable.

pub mod dark_mode;
pub mod editing;
pub mod query;
pub mod shortcuts;
pub mod storage;
pub mod timestamp;
