//! System architecture page.

use leptos::prelude::*;

use crate::components::badge::{Badge, BadgeList, BadgeVariant};
use crate::components::card::Card;
use crate::components::icon_glyph::IconGlyph;
use crate::components::page_header::PageHeader;
use crate::components::step_flow::StepFlow;
use crate::content::architecture::{
    COMPONENTS, EXTERNAL_FLOW, EXTERNAL_FLOW_TITLE, INTERNAL_FLOW, INTERNAL_FLOW_TITLE, LEAD, STACK,
};
use crate::state::route::Page;
use crate::util::motion::{delay_style, stagger_delay};

#[component]
pub fn ArchitecturePage() -> impl IntoView {
    view! {
        <div class="page animate-fade-in" data-page=Page::Architecture.key()>
            <PageHeader page=Page::Architecture heading="Arquitetura do Sistema" lead=LEAD/>

            <section class="section">
                <h2 class="section__title">"Componentes Principais"</h2>
                <div class="grid grid--3">
                    {COMPONENTS
                        .iter()
                        .enumerate()
                        .map(|(index, component)| {
                            view! {
                                <Card style=stagger_delay(300, index, 100)>
                                    <div class="card__header">
                                        <div class="card__icon">
                                            <IconGlyph icon=component.icon/>
                                        </div>
                                        <Badge label=component.category variant=BadgeVariant::Secondary/>
                                    </div>
                                    <h3 class="card__title">{component.name}</h3>
                                    <p class="card__text">{component.description}</p>
                                    <BadgeList labels=component.features/>
                                </Card>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="section animate-slide-up" style=delay_style(600)>
                <StepFlow title=INTERNAL_FLOW_TITLE steps=INTERNAL_FLOW base_delay_ms=700/>
                <StepFlow title=EXTERNAL_FLOW_TITLE steps=EXTERNAL_FLOW base_delay_ms=700/>
            </section>

            <section class="section">
                <div class="grid grid--2">
                    {STACK
                        .iter()
                        .enumerate()
                        .map(|(index, group)| {
                            view! {
                                <Card style=stagger_delay(1000, index, 100)>
                                    <h3 class="card__title card__title--with-icon">
                                        <IconGlyph icon=group.icon/>
                                        {group.title}
                                    </h3>
                                    <dl class="stack-list">
                                        {group
                                            .items
                                            .iter()
                                            .map(|item| {
                                                view! {
                                                    <dt class="stack-list__name">{item.name}</dt>
                                                    <dd class="stack-list__detail">{item.detail}</dd>
                                                }
                                            })
                                            .collect_view()}
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
