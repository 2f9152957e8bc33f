//! Utility helpers shared across page and component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

pub mod diagnostics;
pub mod motion;
pub mod viewport;
