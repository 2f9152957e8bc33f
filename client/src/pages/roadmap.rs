//! Project roadmap page.

use leptos::prelude::*;

use crate::components::badge::{Badge, BadgeVariant};
use crate::components::card::Card;
use crate::components::icon_glyph::IconGlyph;
use crate::components::page_header::PageHeader;
use crate::content::roadmap::{FUTURE_FEATURES, LEAD, PHASES, Priority, RoadmapStatus, TECHNICAL_DEBT};
use crate::icon::Icon;
use crate::state::route::Page;
use crate::util::motion::{stagger_delay, stagger_ms};

fn status_variant(status: RoadmapStatus) -> BadgeVariant {
    match status {
        RoadmapStatus::Completed => BadgeVariant::Default,
        RoadmapStatus::InProgress | RoadmapStatus::Planned => BadgeVariant::Secondary,
    }
}

fn priority_variant(priority: Priority) -> BadgeVariant {
    match priority {
        Priority::High => BadgeVariant::Destructive,
        Priority::Medium => BadgeVariant::Secondary,
    }
}

#[component]
pub fn RoadmapPage() -> impl IntoView {
    view! {
        <div class="page animate-fade-in" data-page=Page::Roadmap.key()>
            <PageHeader page=Page::Roadmap heading="Roadmap do Projeto" lead=LEAD/>

            <section class="section">
                <h2 class="section__title">"Linha do Tempo"</h2>
                <div class="timeline">
                    {PHASES
                        .iter()
                        .enumerate()
                        .map(|(index, phase)| {
                            let status_class = format!("timeline__status status--{}", phase.status.class_name());
                            view! {
                                <Card class="timeline__phase" style=stagger_delay(300, index, 100)>
                                    <div class="card__header card__header--start">
                                        <div class=status_class>
                                            <IconGlyph icon=phase.status.icon()/>
                                        </div>
                                        <div>
                                            <div class="timeline__heading">
                                                <h3 class="card__title">{phase.title}</h3>
                                                <Badge label=phase.phase variant=BadgeVariant::Outline/>
                                                <Badge label=phase.status.label() variant=status_variant(phase.status)/>
                                            </div>
                                            <p class="card__text">{phase.description}</p>
                                        </div>
                                    </div>
                                    <div class="grid grid--2">
                                        <div>
                                            <h4 class="card__subheading">"Entregas"</h4>
                                            <ul class="deliverables">
                                                {phase
                                                    .items
                                                    .iter()
                                                    .map(|deliverable| {
                                                        let (icon, class) = if deliverable.completed {
                                                            (Icon::CheckCircle, "deliverable deliverable--done")
                                                        } else {
                                                            (Icon::Clock, "deliverable")
                                                        };
                                                        view! {
                                                            <li class=class>
                                                                <IconGlyph icon=icon/>
                                                                <span>{deliverable.name}</span>
                                                            </li>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </ul>
                                        </div>
                                        {phase
                                            .note
                                            .map(|note| {
                                                view! {
                                                    <div class="timeline__note">
                                                        <h4 class="card__subheading">{note.heading()}</h4>
                                                        <p class="card__text card__text--small">{note.text()}</p>
                                                    </div>
                                                }
                                            })}
                                    </div>
                                </Card>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="section">
                <h2 class="section__title">"Funcionalidades Futuras"</h2>
                {FUTURE_FEATURES
                    .iter()
                    .enumerate()
                    .map(|(category_index, category)| {
                        view! {
                            <div class="feature-category">
                                <div class="section__heading">
                                    <IconGlyph icon=category.icon/>
                                    <h3 class="card__title">{category.category}</h3>
                                    <Badge
                                        label=format!("Prioridade {}", category.priority.label())
                                        variant=BadgeVariant::Outline
                                    />
                                </div>
                                <div class="grid grid--3">
                                    {category
                                        .features
                                        .iter()
                                        .enumerate()
                                        .map(|(index, feature)| {
                                            let complexity = if feature.complexity.is_demanding() {
                                                BadgeVariant::Warning
                                            } else {
                                                BadgeVariant::Success
                                            };
                                            view! {
                                                <Card style=stagger_delay(stagger_ms(800, category_index, 200), index, 100)>
                                                    <h4 class="card__title">{feature.name}</h4>
                                                    <p class="card__text">{feature.description}</p>
                                                    <div class="card__footer">
                                                        <Badge label=feature.complexity.label() variant=complexity/>
                                                        <span class="card__meta">{feature.timeline}</span>
                                                    </div>
                                                </Card>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>

            <section class="section">
                <h2 class="section__title">"Débito Técnico e Melhorias"</h2>
                <div class="grid grid--2">
                    {TECHNICAL_DEBT
                        .iter()
                        .enumerate()
                        .map(|(index, debt)| {
                            view! {
                                <Card style=stagger_delay(1200, index, 100)>
                                    <div class="card__header">
                                        <h3 class="card__title">{debt.area}</h3>
                                        <Badge label=debt.priority.label() variant=priority_variant(debt.priority)/>
                                    </div>
                                    <p class="card__text">{debt.description}</p>
                                    <dl class="meta-list">
                                        <dt>"Esforço:"</dt>
                                        <dd>{debt.effort}</dd>
                                        <dt>"Impacto:"</dt>
                                        <dd>{debt.impact}</dd>
                                    </dl>
                                </Card>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}
