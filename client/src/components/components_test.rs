use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

use crate::components::app_sidebar::SidebarNav;
use crate::components::badge::{Badge, BadgeVariant};
use crate::components::breadcrumb::Breadcrumb;
use crate::components::card::StatCard;
use crate::components::step_flow::StepFlow;
use crate::content::Metric;
use crate::content::architecture::INTERNAL_FLOW;
use crate::state::route::Page;
use crate::state::ui::SidebarState;

fn render<V: RenderHtml + 'static>(build: impl FnOnce() -> V) -> String {
    Owner::new().with(|| build().to_html())
}

// =============================================================
// SidebarNav
// =============================================================

#[test]
fn pipeline_route_highlights_one_entry() {
    let html = render(|| view! { <SidebarNav current_path="/pipeline" state=SidebarState::Expanded/> });
    assert_eq!(html.matches("sidebar__item--active").count(), 1);
    let active_at = html.find("sidebar__item--active").unwrap();
    let pipeline_at = html.find("href=\"/pipeline\"").unwrap();
    let next_item = html[active_at..].find("</li>").unwrap() + active_at;
    assert!(pipeline_at > active_at && pipeline_at < next_item);
}

#[test]
fn expanded_sidebar_shows_descriptions_and_footer() {
    let html = render(|| view! { <SidebarNav current_path="/" state=SidebarState::Expanded/> });
    assert!(html.contains("data-state=\"expanded\""));
    assert!(html.contains("Fluxo e processamento de dados"));
    assert!(html.contains("AI + Data + Automação"));
    assert!(html.contains("v1.0.0-beta"));
    assert!(html.contains("icon--chevron-right"));
}

#[test]
fn collapsed_sidebar_keeps_icons_and_highlight_only() {
    let html = render(|| view! { <SidebarNav current_path="/pipeline" state=SidebarState::Collapsed/> });
    assert!(html.contains("data-state=\"collapsed\""));
    assert!(!html.contains("Fluxo e processamento de dados"));
    assert!(!html.contains("sidebar__description"));
    assert!(!html.contains("AI + Data + Automação"));
    assert!(!html.contains("v1.0.0-beta"));
    assert!(!html.contains("icon--chevron-right"));
    assert!(html.contains("icon--database"));
    assert!(html.contains("icon--home"));
    assert_eq!(html.matches("sidebar__item--active").count(), 1);
}

#[test]
fn unknown_route_highlights_nothing() {
    let html = render(|| view! { <SidebarNav current_path="/does-not-exist" state=SidebarState::Expanded/> });
    assert!(!html.contains("sidebar__item--active"));
    assert_eq!(html.matches("<li").count(), 7);
}

// =============================================================
// Primitives
// =============================================================

#[test]
fn badge_variant_classes() {
    assert_eq!(BadgeVariant::default().class(), "badge");
    assert_eq!(BadgeVariant::Outline.class(), "badge badge--outline");
    let html = render(|| view! { <Badge label="Backend" variant=BadgeVariant::Secondary/> });
    assert!(html.contains("badge--secondary"));
    assert!(html.contains("Backend"));
}

#[test]
fn breadcrumb_links_home_and_names_page() {
    let html = render(|| view! { <Breadcrumb page=Page::Agents/> });
    assert!(html.contains("href=\"/\""));
    assert!(html.contains("Início"));
    assert!(html.contains("Agentes de IA"));
}

#[test]
fn step_flow_draws_connectors_between_steps_only() {
    let html = render(|| view! { <StepFlow title="Fluxo" steps=INTERNAL_FLOW base_delay_ms=700/> });
    assert_eq!(html.matches("step-flow__step ").count(), INTERNAL_FLOW.len());
    assert_eq!(html.matches("step-flow__connector").count(), INTERNAL_FLOW.len() - 1);
    assert!(html.contains("animation-delay: 1000ms"));
}

// =============================================================
// StatCard
// =============================================================

#[test]
fn stat_card_renders_value_label_and_children() {
    let html = render(|| {
        view! {
            <StatCard metric=Metric { value: "+85.4k", label: "Registros" } style="animation-delay: 300ms">
                <span class="stat-card__caption">"extra"</span>
            </StatCard>
        }
    });
    assert!(html.contains("+85.4k"));
    assert!(html.contains("Registros"));
    assert!(html.contains("stat-card__caption"));
    assert!(html.contains("animation-delay: 300ms"));
}

#[test]
fn stat_card_without_children() {
    let html = render(|| view! { <StatCard metric=Metric { value: "<5min", label: "Latência" }/> });
    assert!(html.contains("5min"));
    assert!(!html.contains("stat-card__caption"));
}
