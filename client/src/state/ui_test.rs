use super::*;

// =============================================================
// SidebarState
// =============================================================

#[test]
fn sidebar_defaults_to_expanded() {
    assert_eq!(SidebarState::default(), SidebarState::Expanded);
    assert_eq!(UiState::default().sidebar, SidebarState::Expanded);
}

#[test]
fn toggling_flips_between_states() {
    assert_eq!(SidebarState::Expanded.toggled(), SidebarState::Collapsed);
    assert_eq!(SidebarState::Collapsed.toggled(), SidebarState::Expanded);
    assert_eq!(SidebarState::Expanded.toggled().toggled(), SidebarState::Expanded);
}

#[test]
fn data_state_values() {
    assert_eq!(SidebarState::Expanded.as_str(), "expanded");
    assert_eq!(SidebarState::Collapsed.as_str(), "collapsed");
    assert!(SidebarState::Expanded.is_expanded());
    assert!(!SidebarState::Collapsed.is_expanded());
}

// =============================================================
// Responsive breakpoint
// =============================================================

#[test]
fn narrow_viewport_collapses_sidebar() {
    assert_eq!(sidebar_state_for_width(375.0), SidebarState::Collapsed);
    assert_eq!(sidebar_state_for_width(1023.9), SidebarState::Collapsed);
}

#[test]
fn wide_viewport_expands_sidebar() {
    assert_eq!(sidebar_state_for_width(SIDEBAR_BREAKPOINT_PX), SidebarState::Expanded);
    assert_eq!(sidebar_state_for_width(1920.0), SidebarState::Expanded);
}
