//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page renders one `content` module through the shared primitives in
//! `components`. Pages hold no state; the page root carries the entrance
//! animation so every navigation replays it.

pub mod agents;
pub mod architecture;
pub mod deployment;
pub mod integrations;
pub mod not_found;
pub mod overview;
pub mod pipeline;
pub mod roadmap;

#[cfg(test)]
#[path = "pages_test.rs"]
mod pages_test;
