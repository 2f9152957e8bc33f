//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `app_*` components form the shell (header, sidebar, routed content); the
//! rest are presentational primitives shared by every documentation page.

pub mod app_header;
pub mod app_layout;
pub mod app_sidebar;
pub mod badge;
pub mod breadcrumb;
pub mod card;
pub mod code_block;
pub mod icon_glyph;
pub mod page_header;
pub mod step_flow;

#[cfg(test)]
#[path = "components_test.rs"]
mod components_test;
