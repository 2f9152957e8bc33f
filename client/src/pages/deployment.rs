//! Deployment strategy page.

use leptos::prelude::*;

use crate::components::badge::{Badge, BadgeVariant};
use crate::components::card::{Card, InfoCardGrid, StatCard};
use crate::components::icon_glyph::IconGlyph;
use crate::components::page_header::PageHeader;
use crate::content::Metric;
use crate::content::deployment::{LAYERS, LEAD, MONITORING, MetricStatus, SECURITY};
use crate::state::route::Page;
use crate::util::motion::stagger_delay;

fn status_variant(status: MetricStatus) -> BadgeVariant {
    match status {
        MetricStatus::Excellent => BadgeVariant::Default,
        MetricStatus::Good => BadgeVariant::Secondary,
    }
}

#[component]
pub fn DeploymentPage() -> impl IntoView {
    view! {
        <div class="page animate-fade-in" data-page=Page::Deployment.key()>
            <PageHeader page=Page::Deployment heading="Estratégia de Deployment" lead=LEAD/>

            <section class="section">
                <h2 class="section__title">"Camadas de Infraestrutura"</h2>
                {LAYERS
                    .iter()
                    .enumerate()
                    .map(|(index, layer)| {
                        view! {
                            <Card style=stagger_delay(300, index, 100)>
                                <div class="card__header card__header--start">
                                    <div class="card__icon">
                                        <IconGlyph icon=layer.icon/>
                                    </div>
                                    <div>
                                        <h3 class="card__title">{layer.name}</h3>
                                        <Badge label=layer.provider variant=BadgeVariant::Secondary/>
                                    </div>
                                </div>
                                <p class="card__text">{layer.description}</p>
                                <div class="grid grid--2">
                                    <div>
                                        <h4 class="card__subheading">"Recursos"</h4>
                                        <ul class="bullet-list">
                                            {layer.features.iter().map(|f| view! { <li>{*f}</li> }).collect_view()}
                                        </ul>
                                    </div>
                                    <div>
                                        <h4 class="card__subheading">"Configuração"</h4>
                                        <dl class="meta-list">
                                            {layer
                                                .configuration
                                                .iter()
                                                .map(|entry| {
                                                    view! {
                                                        <dt>{entry.label} ":"</dt>
                                                        <dd class="meta-list__mono">{entry.display_value()}</dd>
                                                    }
                                                })
                                                .collect_view()}
                                        </dl>
                                    </div>
                                </div>
                            </Card>
                        }
                    })
                    .collect_view()}
            </section>

            <section class="section">
                <h2 class="section__title">"Monitoramento em Tempo Real"</h2>
                <div class="grid grid--3">
                    {MONITORING
                        .iter()
                        .enumerate()
                        .map(|(index, metric)| {
                            view! {
                                <StatCard
                                    metric=Metric { value: metric.value, label: metric.metric }
                                    style=stagger_delay(700, index, 100)
                                >
                                    <Badge label=metric.status.label() variant=status_variant(metric.status)/>
                                </StatCard>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="section">
                <h2 class="section__title">"Segurança e Backup"</h2>
                <InfoCardGrid cards=SECURITY base_delay_ms=1000/>
            </section>
        </div>
    }
}
