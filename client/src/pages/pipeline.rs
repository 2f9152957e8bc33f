//! Data pipeline page.

use leptos::prelude::*;

use crate::components::badge::BadgeList;
use crate::components::card::{Card, StatCard};
use crate::components::code_block::CodeBlock;
use crate::components::icon_glyph::IconGlyph;
use crate::components::page_header::PageHeader;
use crate::content::pipeline::{AUTOMATION_SAMPLE, EMBEDDING_SAMPLE, LEAD, METRICS, RPC_SAMPLE, STAGES};
use crate::state::route::Page;
use crate::util::motion::{delay_style, stagger_delay};

#[component]
pub fn PipelinePage() -> impl IntoView {
    view! {
        <div class="page animate-fade-in" data-page=Page::Pipeline.key()>
            <PageHeader page=Page::Pipeline lead=LEAD/>

            <section class="section">
                <h2 class="section__title">"Fluxo de Processamento"</h2>
                <div class="stage-list">
                    {STAGES
                        .iter()
                        .enumerate()
                        .map(|(index, stage)| {
                            view! {
                                <Card class="stage" style=stagger_delay(300, index, 100)>
                                    <div class="stage__marker">
                                        <span class="step-flow__number">{stage.id}</span>
                                        <IconGlyph icon=stage.icon/>
                                    </div>
                                    <div class="stage__body">
                                        <h3 class="card__title">{stage.title}</h3>
                                        <p class="card__text">{stage.description}</p>
                                        <div class="grid grid--2">
                                            <div>
                                                <h4 class="card__subheading">"Processos"</h4>
                                                <ul class="bullet-list">
                                                    {stage.details.iter().map(|d| view! { <li>{*d}</li> }).collect_view()}
                                                </ul>
                                            </div>
                                            <div>
                                                <h4 class="card__subheading">"Tecnologias"</h4>
                                                <BadgeList labels=stage.technologies/>
                                            </div>
                                        </div>
                                    </div>
                                </Card>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="section">
                <h2 class="section__title">"Exemplos de Implementação"</h2>
                <div class="grid grid--2">
                    <CodeBlock sample=RPC_SAMPLE style=delay_style(800)/>
                    <CodeBlock sample=EMBEDDING_SAMPLE style=delay_style(900)/>
                </div>
                <CodeBlock sample=AUTOMATION_SAMPLE style=delay_style(1000)/>
            </section>

            <section class="section">
                <h2 class="section__title">"Métricas de Performance"</h2>
                <div class="grid grid--3">
                    {METRICS
                        .iter()
                        .enumerate()
                        .map(|(index, metric)| {
                            view! {
                                <StatCard metric=*metric style=stagger_delay(1000, index, 100)/>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}
