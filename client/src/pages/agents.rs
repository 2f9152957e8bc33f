//! AI agents page.

use leptos::prelude::*;

use crate::components::badge::{Badge, BadgeList, BadgeVariant};
use crate::components::card::{Card, InfoCardGrid};
use crate::components::code_block::CodeBlock;
use crate::components::icon_glyph::IconGlyph;
use crate::components::page_header::PageHeader;
use crate::content::agents::{AGENTS, CODE_SAMPLE, COMMUNICATION_FLOW, DECISIONS, LEAD, interaction_names};
use crate::icon::Icon;
use crate::state::route::Page;
use crate::util::motion::{delay_style, stagger_delay};

#[component]
pub fn AgentsPage() -> impl IntoView {
    view! {
        <div class="page animate-fade-in" data-page=Page::Agents.key()>
            <PageHeader page=Page::Agents lead=LEAD/>

            <section class="section">
                <h2 class="section__title">"Arquitetura dos Agentes"</h2>
                <div class="grid grid--3">
                    {AGENTS
                        .iter()
                        .enumerate()
                        .map(|(index, agent)| {
                            view! {
                                <Card class="agent-card" style=stagger_delay(300, index, 100)>
                                    <div class="card__header card__header--start">
                                        <div class="card__icon">
                                            <IconGlyph icon=agent.icon/>
                                        </div>
                                        <div>
                                            <h3 class="card__title">{agent.name}</h3>
                                            <Badge label=agent.role variant=BadgeVariant::Secondary/>
                                        </div>
                                    </div>
                                    <p class="card__text">{agent.description}</p>
                                    <h4 class="card__subheading">"Capacidades"</h4>
                                    <ul class="bullet-list">
                                        {agent.capabilities.iter().map(|c| view! { <li>{*c}</li> }).collect_view()}
                                    </ul>
                                    <h4 class="card__subheading">"Tecnologias"</h4>
                                    <BadgeList labels=agent.technologies/>
                                    <h4 class="card__subheading">"Interações"</h4>
                                    <p class="card__text card__text--small">
                                        "Comunica com: " {interaction_names(agent)}
                                    </p>
                                </Card>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="section animate-slide-up" style=delay_style(600)>
                <h2 class="section__title">"Fluxo de Comunicação"</h2>
                <Card class="comm-flow">
                    {COMMUNICATION_FLOW
                        .iter()
                        .enumerate()
                        .map(|(index, hop)| {
                            view! {
                                <div class="comm-flow__row animate-fade-in" style=stagger_delay(700, index, 100)>
                                    <span class="step-flow__number">{hop.step}</span>
                                    <div class="comm-flow__body">
                                        <div class="comm-flow__route">
                                            <span class="comm-flow__from">{hop.from}</span>
                                            <span class="comm-flow__action">
                                                <IconGlyph icon=Icon::ArrowRight/>
                                                {hop.action}
                                            </span>
                                            <span class="comm-flow__to">{hop.to}</span>
                                        </div>
                                        <div class="card__text card__text--small">{hop.description}</div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </Card>
            </section>

            <section class="section">
                <CodeBlock sample=CODE_SAMPLE style=delay_style(800)/>
            </section>

            <section class="section">
                <h2 class="section__title">"Decisões Arquiteturais"</h2>
                <InfoCardGrid cards=DECISIONS base_delay_ms=1000/>
            </section>
        </div>
    }
}
