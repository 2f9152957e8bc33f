//! Local UI chrome state (sidebar expansion).
//!
//! DESIGN
//! ======
//! Owned by `AppLayout`; every other component sees a read-only signal and
//! callbacks through `SidebarContext`.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Viewports narrower than this start with the sidebar collapsed.
pub const SIDEBAR_BREAKPOINT_PX: f64 = 1024.0;

/// Visual state of the sidebar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SidebarState {
    #[default]
    Expanded,
    /// Icons only; titles, descriptions and secondary text are hidden.
    Collapsed,
}

impl SidebarState {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            SidebarState::Expanded => SidebarState::Collapsed,
            SidebarState::Collapsed => SidebarState::Expanded,
        }
    }

    #[must_use]
    pub fn is_expanded(self) -> bool {
        self == SidebarState::Expanded
    }

    /// Value for the `data-state` attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SidebarState::Expanded => "expanded",
            SidebarState::Collapsed => "collapsed",
        }
    }
}

/// Sidebar state implied by a viewport width in CSS pixels.
#[must_use]
pub fn sidebar_state_for_width(width_px: f64) -> SidebarState {
    if width_px < SIDEBAR_BREAKPOINT_PX {
        SidebarState::Collapsed
    } else {
        SidebarState::Expanded
    }
}

/// UI state for the documentation shell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub sidebar: SidebarState,
}
