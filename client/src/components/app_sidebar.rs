//! Collapsible documentation sidebar.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AppSidebar` binds the router location and sidebar context; `SidebarNav`
//! renders from plain values so active highlighting and the collapsed
//! variant can be checked without a router.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::app_layout::SidebarContext;
use crate::components::icon_glyph::IconGlyph;
use crate::content::shell::{BRAND_MARK, BRAND_NAME, BRAND_TAGLINE, NAV_GROUP_LABEL, RELEASE_LABEL, RELEASE_VERSION};
use crate::icon::Icon;
use crate::state::nav::{NAVIGATION, active_flags};
use crate::state::ui::SidebarState;

#[component]
pub fn AppSidebar() -> impl IntoView {
    let sidebar = expect_context::<SidebarContext>();
    let location = use_location();

    move || {
        let current_path = location.pathname.get();
        let state = sidebar.state.get();
        view! { <SidebarNav current_path=current_path state=state/> }
    }
}

/// Sidebar markup for a given route and state.
#[component]
pub fn SidebarNav(#[prop(into)] current_path: String, state: SidebarState) -> impl IntoView {
    let expanded = state.is_expanded();
    let flags = active_flags(NAVIGATION, &current_path);

    let items = NAVIGATION
        .iter()
        .zip(flags)
        .map(|(entry, active)| {
            let class = if active { "sidebar__item sidebar__item--active" } else { "sidebar__item" };
            view! {
                <li>
                    <a
                        class=class
                        href=entry.url
                        title=entry.title
                        aria-current=active.then_some("page")
                    >
                        <IconGlyph icon=entry.icon class="sidebar__icon"/>
                        {expanded
                            .then(|| {
                                view! {
                                    <div class="sidebar__text animate-fade-in">
                                        <div class="sidebar__title">{entry.title}</div>
                                        <div class="sidebar__description">{entry.description}</div>
                                    </div>
                                }
                            })}
                        {(expanded && active).then(|| view! { <IconGlyph icon=Icon::ChevronRight class="sidebar__chevron"/> })}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <aside class="sidebar" data-state=state.as_str()>
            <div class="sidebar__brand">
                <span class="brand-mark">{BRAND_MARK}</span>
                {expanded
                    .then(|| {
                        view! {
                            <div class="sidebar__brand-text animate-fade-in">
                                <h2 class="gradient-text">{BRAND_NAME}</h2>
                                <p class="sidebar__tagline">{BRAND_TAGLINE}</p>
                            </div>
                        }
                    })}
            </div>
            <nav class="sidebar__group">
                {expanded.then(|| view! { <div class="sidebar__group-label">{NAV_GROUP_LABEL}</div> })}
                <ul class="sidebar__menu">{items}</ul>
            </nav>
            {expanded
                .then(|| {
                    view! {
                        <div class="sidebar__footer animate-fade-in">
                            <div class="sidebar__release">{RELEASE_LABEL}</div>
                            <div class="sidebar__version">{RELEASE_VERSION}</div>
                        </div>
                    }
                })}
        </aside>
    }
}
