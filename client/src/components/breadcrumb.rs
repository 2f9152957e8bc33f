//! "Início / <page>" trail shown above each documentation page.

use leptos::prelude::*;

use crate::state::route::Page;

#[component]
pub fn Breadcrumb(page: Page) -> impl IntoView {
    view! {
        <nav class="breadcrumb" aria-label="breadcrumb">
            <ol class="breadcrumb__list">
                <li class="breadcrumb__item">
                    <a class="breadcrumb__link" href=Page::Overview.path()>"Início"</a>
                </li>
                <li class="breadcrumb__separator" role="presentation" aria-hidden="true">"›"</li>
                <li class="breadcrumb__item">
                    <span class="breadcrumb__page" aria-current="page">{page.title()}</span>
                </li>
            </ol>
        </nav>
    }
}
