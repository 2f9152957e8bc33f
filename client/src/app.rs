//! Root application component with routing and the document shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_location,
};

use crate::components::app_layout::AppLayout;
use crate::content::shell::BRAND_NAME;
use crate::pages::{
    agents::AgentsPage, architecture::ArchitecturePage, deployment::DeploymentPage, integrations::IntegrationsPage,
    not_found::NotFoundPage, overview::OverviewPage, pipeline::PipelinePage, roadmap::RoadmapPage,
};
use crate::state::route::{Page, resolve_route};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="pt-BR" class="dark">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Every route, the fallback included, renders inside the sidebar layout.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/crallabs-docs.css"/>
        <Router>
            <RouteTitle/>
            <AppLayout>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment(Page::Overview.segment()) view=OverviewPage/>
                    <Route path=StaticSegment(Page::Architecture.segment()) view=ArchitecturePage/>
                    <Route path=StaticSegment(Page::Agents.segment()) view=AgentsPage/>
                    <Route path=StaticSegment(Page::Pipeline.segment()) view=PipelinePage/>
                    <Route path=StaticSegment(Page::Integrations.segment()) view=IntegrationsPage/>
                    <Route path=StaticSegment(Page::Deployment.segment()) view=DeploymentPage/>
                    <Route path=StaticSegment(Page::Roadmap.segment()) view=RoadmapPage/>
                </Routes>
            </AppLayout>
        </Router>
    }
}

/// Document title for the current location, "<page> | CralLabs".
#[component]
fn RouteTitle() -> impl IntoView {
    let location = use_location();
    let text = move || format!("{} | {BRAND_NAME}", resolve_route(&location.pathname.get()).title());

    view! { <Title text=text/> }
}
