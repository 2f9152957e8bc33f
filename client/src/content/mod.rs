//! Static page content.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every documentation page renders one of these modules. Tables are `const`
//! values evaluated at compile time and never mutated; dynamic content would
//! need an explicit fetch boundary rather than changes here.

use crate::icon::Icon;

pub mod agents;
pub mod architecture;
pub mod deployment;
pub mod integrations;
pub mod overview;
pub mod pipeline;
pub mod roadmap;
pub mod shell;

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

/// A numbered step in a linear flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlowStep {
    pub step: u8,
    pub title: &'static str,
    pub description: &'static str,
}

/// A short titled note with an icon, used for practices and decisions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InfoCard {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

/// A headline number with a caption.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Metric {
    pub value: &'static str,
    pub label: &'static str,
}

/// A titled source listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CodeSample {
    pub title: &'static str,
    pub icon: Icon,
    pub language: &'static str,
    pub code: &'static str,
}
