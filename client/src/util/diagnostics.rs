//! Diagnostics for requests that match no declared route.
//!
//! TRADE-OFFS
//! ==========
//! Reporting is fire-and-forget: one log line per mount of the fallback page,
//! no retry and no persistence. When hydrated the line lands in the browser
//! console; during server rendering it goes to stderr.

use serde::Serialize;

#[cfg(test)]
#[path = "diagnostics_test.rs"]
mod diagnostics_test;

/// A path the router could not match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UnmatchedRoute {
    pub path: String,
}

impl UnmatchedRoute {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn message(&self) -> String {
        format!("404 Error: User attempted to access non-existent route: {}", self.path)
    }
}

/// Log an unmatched route and return the record that was logged.
pub fn report_unmatched_route(path: &str) -> UnmatchedRoute {
    let record = UnmatchedRoute::new(path);
    leptos::logging::error!("{}", record.message());
    record
}
