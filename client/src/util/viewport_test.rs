#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn width_is_unknown_outside_the_browser() {
    assert!(width().is_none());
}

#[test]
fn history_back_is_noop_but_callable() {
    history_back();
}
