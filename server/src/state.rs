//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers and middleware via the `State`
//! extractor. It holds a bounded ring of recently unmatched request paths so
//! broken links can be spotted without grepping logs.
//!
//! TRADE-OFFS
//! ==========
//! The ring lives in memory only and is lost on restart. Once full the
//! oldest entry is dropped for each new one.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

use crallabs_client::util::diagnostics::UnmatchedRoute;

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

/// Number of unmatched paths retained.
pub const UNMATCHED_CAPACITY: usize = 64;

/// Shared application state. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    unmatched: Arc<Mutex<VecDeque<UnmatchedRoute>>>,
    capacity: usize,
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(UNMATCHED_CAPACITY)
    }

    /// State retaining at most `capacity` unmatched paths (minimum one).
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self { unmatched: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))), capacity }
    }

    /// Remember an unmatched path, evicting the oldest when full.
    pub fn record_unmatched(&self, record: UnmatchedRoute) {
        let mut ring = self.unmatched.lock().unwrap_or_else(PoisonError::into_inner);
        while ring.len() >= self.capacity {
            ring.pop_front();
        }
        ring.push_back(record);
    }

    /// Retained paths, oldest first.
    #[must_use]
    pub fn recent_unmatched(&self) -> Vec<UnmatchedRoute> {
        let ring = self.unmatched.lock().unwrap_or_else(PoisonError::into_inner);
        ring.iter().cloned().collect()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
