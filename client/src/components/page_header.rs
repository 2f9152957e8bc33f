//! Page title block with breadcrumb and lead paragraph.

use leptos::prelude::*;

use crate::components::breadcrumb::Breadcrumb;
use crate::state::route::Page;

#[component]
pub fn PageHeader(page: Page, #[prop(optional)] heading: Option<&'static str>, lead: &'static str) -> impl IntoView {
    view! {
        <Breadcrumb page=page/>
        <header class="page-header animate-slide-up">
            <h1 class="page-header__title gradient-text">{heading.unwrap_or(page.title())}</h1>
            <p class="page-header__lead">{lead}</p>
        </header>
    }
}
