//! Fallback screen for paths that match no declared route.
//!
//! DESIGN
//! ======
//! `NotFoundPage` reads the router location; `NotFoundCard` is the pure
//! markup so it renders without a router.
//!
//! Each unmatched visit yields one diagnostic record. During server rendering
//! the page only sets the 404 status and the server's request middleware
//! writes the record through `tracing`. In the browser the page reports the
//! path itself when it mounts.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::icon_glyph::IconGlyph;
use crate::icon::Icon;
use crate::state::route::{NOT_FOUND_KEY, NOT_FOUND_TITLE};
#[cfg(not(feature = "ssr"))]
use crate::util::diagnostics::report_unmatched_route;
use crate::util::viewport;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let path = use_location().pathname.get_untracked();

    #[cfg(not(feature = "ssr"))]
    report_unmatched_route(&path);

    #[cfg(feature = "ssr")]
    if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
        response.set_status(http::StatusCode::NOT_FOUND);
    }

    view! { <NotFoundCard path=path/> }
}

#[component]
pub fn NotFoundCard(#[prop(into)] path: String) -> impl IntoView {
    view! {
        <div class="page page--centered animate-fade-in" data-page=NOT_FOUND_KEY>
            <div class="card card--narrow animate-slide-up">
                <div class="not-found__icon">
                    <IconGlyph icon=Icon::AlertCircle/>
                </div>
                <h1 class="not-found__code gradient-text">"404"</h1>
                <h2 class="card__title">{NOT_FOUND_TITLE}</h2>
                <p class="card__text">"A página que você está procurando não existe ou foi movida."</p>
                <p class="not-found__path">
                    <code>{path}</code>
                </p>
                <div class="not-found__actions">
                    <a href="/" class="button button--primary">
                        <IconGlyph icon=Icon::Home/>
                        <span>"Voltar ao Início"</span>
                    </a>
                    <button type="button" class="button button--outline" on:click=move |_| viewport::history_back()>
                        <IconGlyph icon=Icon::ArrowLeft/>
                        <span>"Voltar"</span>
                    </button>
                </div>
            </div>
        </div>
    }
}
