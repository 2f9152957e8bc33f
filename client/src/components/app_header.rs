//! Sticky top bar with the sidebar trigger, brand and external links.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::app_layout::SidebarContext;
use crate::components::icon_glyph::IconGlyph;
use crate::content::shell::{BRAND_MARK, BRAND_NAME, HEADER_LINKS};
use crate::icon::Icon;
use crate::state::nav::{NAVIGATION, active_entry};

#[component]
pub fn AppHeader() -> impl IntoView {
    let sidebar = expect_context::<SidebarContext>();
    let on_trigger = move |_| sidebar.toggle.run(());
    let expanded = move || if sidebar.state.get().is_expanded() { "true" } else { "false" };
    let location = use_location();
    let section = move || active_entry(NAVIGATION, &location.pathname.get()).map(|entry| entry.title);

    view! {
        <header class="app-header">
            <div class="app-header__start">
                <button
                    class="app-header__trigger"
                    title="Alternar barra lateral"
                    aria-expanded=expanded
                    on:click=on_trigger
                >
                    <IconGlyph icon=Icon::Menu/>
                </button>
                <div class="app-header__brand">
                    <span class="brand-mark brand-mark--small">{BRAND_MARK}</span>
                    <span class="app-header__name gradient-text">{BRAND_NAME}</span>
                </div>
                {move || section().map(|title| view! { <span class="app-header__section">{title}</span> })}
            </div>
            <nav class="app-header__links">
                {HEADER_LINKS
                    .iter()
                    .map(|link| {
                        view! {
                            <a class="btn btn--ghost" href=link.href target="_blank" rel="noopener noreferrer">
                                <IconGlyph icon=link.icon/>
                                <span class="app-header__link-label">{link.label}</span>
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
        </header>
    }
}
