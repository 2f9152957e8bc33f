use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

use super::agents::AgentsPage;
use super::architecture::ArchitecturePage;
use super::deployment::DeploymentPage;
use super::integrations::IntegrationsPage;
use super::not_found::NotFoundCard;
use super::overview::OverviewPage;
use super::pipeline::PipelinePage;
use super::roadmap::RoadmapPage;
use crate::content::agents::AGENTS;
use crate::content::roadmap::PHASES;

fn render<V: RenderHtml + 'static>(build: impl FnOnce() -> V) -> String {
    Owner::new().with(|| build().to_html())
}

// =============================================================
// Page roots
// =============================================================

#[test]
fn each_page_renders_its_own_marker_and_heading() {
    let cases = [
        (render(|| view! { <OverviewPage/> }), "overview", "CralLabs"),
        (render(|| view! { <ArchitecturePage/> }), "architecture", "Arquitetura do Sistema"),
        (render(|| view! { <AgentsPage/> }), "agents", "Agentes de IA"),
        (render(|| view! { <PipelinePage/> }), "pipeline", "Pipeline de Dados"),
        (render(|| view! { <IntegrationsPage/> }), "integrations", "Integrações"),
        (render(|| view! { <DeploymentPage/> }), "deployment", "Estratégia de Deployment"),
        (render(|| view! { <RoadmapPage/> }), "roadmap", "Roadmap do Projeto"),
    ];
    for (html, marker, heading) in &cases {
        assert!(html.contains(&format!("data-page=\"{marker}\"")), "missing marker {marker}");
        assert!(html.contains(heading), "missing heading {heading} on {marker}");
        assert!(html.contains("animate-fade-in"));
    }
}

#[test]
fn inner_pages_carry_breadcrumb_home_link() {
    let html = render(|| view! { <PipelinePage/> });
    assert!(html.contains("Início"));
    assert!(html.contains("href=\"/\""));
}

#[test]
fn overview_links_to_every_inner_page() {
    let html = render(|| view! { <OverviewPage/> });
    for path in ["/arquitetura", "/agentes", "/pipeline", "/integracoes", "/deployment", "/roadmap"] {
        assert!(html.contains(&format!("href=\"{path}\"")), "overview lacks link to {path}");
    }
}

#[test]
fn agents_page_lists_every_agent() {
    let html = render(|| view! { <AgentsPage/> });
    for agent in AGENTS {
        assert!(html.contains(agent.name));
    }
    assert!(html.contains("Comunica com: "));
}

#[test]
fn roadmap_page_renders_every_phase() {
    let html = render(|| view! { <RoadmapPage/> });
    for phase in PHASES {
        assert!(html.contains(phase.title));
    }
    assert!(html.contains("deliverable--done"));
    assert!(html.contains("Esforço:"));
}

// =============================================================
// NotFoundCard
// =============================================================

#[test]
fn not_found_card_shows_code_and_path() {
    let html = render(|| view! { <NotFoundCard path="/nao-existe"/> });
    assert!(html.contains("404"));
    assert!(html.contains("Página não encontrada"));
    assert!(html.contains("/nao-existe"));
    assert!(html.contains("data-page=\"not-found\""));
}

#[test]
fn not_found_card_offers_home_link_and_back_button() {
    let html = render(|| view! { <NotFoundCard path="/x"/> });
    assert!(html.contains("href=\"/\""));
    assert!(html.contains("Voltar ao Início"));
    assert!(html.contains("<button"));
}
