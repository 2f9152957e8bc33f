//! Shell layout: header, sidebar and the routed content region.
//!
//! ARCHITECTURE
//! ============
//! `AppLayout` is the single owner of `UiState`. Descendants receive a
//! `SidebarContext` holding a read-only signal plus callbacks, so every
//! mutation goes through this component.

use leptos::prelude::*;

use crate::components::app_header::AppHeader;
use crate::components::app_sidebar::AppSidebar;
use crate::state::ui::{SidebarState, UiState};

/// Read-only sidebar snapshot plus change requests.
#[derive(Clone, Copy)]
pub struct SidebarContext {
    pub state: Signal<SidebarState>,
    pub toggle: Callback<()>,
    pub set: Callback<SidebarState>,
}

#[component]
pub fn AppLayout(children: Children) -> impl IntoView {
    let ui = RwSignal::new(UiState::default());

    let state = Signal::derive(move || ui.get().sidebar);
    let toggle = Callback::new(move |()| ui.update(|u| u.sidebar = u.sidebar.toggled()));
    let set = Callback::new(move |next: SidebarState| {
        if ui.get_untracked().sidebar != next {
            ui.update(|u| u.sidebar = next);
        }
    });
    provide_context(SidebarContext { state, toggle, set });

    #[cfg(feature = "hydrate")]
    {
        use crate::state::ui::sidebar_state_for_width;
        use crate::util::viewport;

        // Follow the breakpoint on mount and whenever a resize crosses it.
        let last_breakpoint = StoredValue::new(None::<SidebarState>);
        let apply_breakpoint = move || {
            let Some(width) = viewport::width() else {
                return;
            };
            let implied = sidebar_state_for_width(width);
            if last_breakpoint.get_value() != Some(implied) {
                last_breakpoint.set_value(Some(implied));
                set.run(implied);
            }
        };
        Effect::new(move || apply_breakpoint());
        let handle = window_event_listener(leptos::ev::resize, move |_| apply_breakpoint());
        on_cleanup(move || handle.remove());
    }

    view! {
        <div class="app-shell" data-sidebar=move || state.get().as_str()>
            <AppSidebar/>
            <div class="app-shell__main">
                <AppHeader/>
                <main class="app-content">{children()}</main>
            </div>
        </div>
    }
}
