//! Shell-owned state and the static tables it is resolved against.
//!
//! DESIGN
//! ======
//! `route` and `nav` are pure lookups over constant tables so they can be
//! exercised without a router; `ui` holds the only mutable chrome state.

pub mod nav;
pub mod route;
pub mod ui;
