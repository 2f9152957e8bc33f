use super::*;

fn paths(state: &AppState) -> Vec<String> {
    state.recent_unmatched().into_iter().map(|r| r.path).collect()
}

#[test]
fn new_state_is_empty() {
    assert!(AppState::new().recent_unmatched().is_empty());
}

#[test]
fn records_in_arrival_order() {
    let state = AppState::new();
    state.record_unmatched(UnmatchedRoute::new("/a"));
    state.record_unmatched(UnmatchedRoute::new("/b"));
    assert_eq!(paths(&state), vec!["/a", "/b"]);
}

#[test]
fn ring_evicts_oldest_when_full() {
    let state = AppState::with_capacity(2);
    for path in ["/a", "/b", "/c"] {
        state.record_unmatched(UnmatchedRoute::new(path));
    }
    assert_eq!(paths(&state), vec!["/b", "/c"]);
}

#[test]
fn zero_capacity_still_keeps_latest() {
    let state = AppState::with_capacity(0);
    state.record_unmatched(UnmatchedRoute::new("/a"));
    state.record_unmatched(UnmatchedRoute::new("/b"));
    assert_eq!(paths(&state), vec!["/b"]);
}

#[test]
fn clones_share_the_ring() {
    let state = AppState::new();
    let clone = state.clone();
    clone.record_unmatched(UnmatchedRoute::new("/shared"));
    assert_eq!(paths(&state), vec!["/shared"]);
}

#[test]
fn default_capacity_is_bounded() {
    let state = AppState::default();
    for i in 0..(UNMATCHED_CAPACITY + 10) {
        state.record_unmatched(UnmatchedRoute::new(format!("/p{i}")));
    }
    let kept = paths(&state);
    assert_eq!(kept.len(), UNMATCHED_CAPACITY);
    assert_eq!(kept[0], "/p10");
}
