//! Integrations page.

use leptos::prelude::*;

use crate::components::badge::{Badge, BadgeVariant};
use crate::components::card::{Card, InfoCardGrid};
use crate::components::code_block::CodeBlock;
use crate::components::icon_glyph::IconGlyph;
use crate::components::page_header::PageHeader;
use crate::content::integrations::{CATEGORIES, LEAD, N8N_SAMPLE, PRACTICES, WEBHOOK_SAMPLE};
use crate::state::route::Page;
use crate::util::motion::delay_style;

/// Item delays advance 200 ms per category and 100 ms per item.
fn item_delay(category_index: usize, item_index: usize) -> String {
    let category = u32::try_from(category_index).unwrap_or(u32::MAX);
    let item = u32::try_from(item_index).unwrap_or(u32::MAX);
    delay_style(400u32.saturating_add(category.saturating_mul(200)).saturating_add(item.saturating_mul(100)))
}

#[component]
pub fn IntegrationsPage() -> impl IntoView {
    view! {
        <div class="page animate-fade-in" data-page=Page::Integrations.key()>
            <PageHeader page=Page::Integrations lead=LEAD/>

            {CATEGORIES
                .iter()
                .enumerate()
                .map(|(category_index, category)| {
                    view! {
                        <section class="section">
                            <div class="section__heading">
                                <div class="card__icon">
                                    <IconGlyph icon=category.icon/>
                                </div>
                                <div>
                                    <h2 class="section__title">{category.name}</h2>
                                    <p class="section__lead">{category.description}</p>
                                </div>
                            </div>
                            <div class="grid grid--2">
                                {category
                                    .items
                                    .iter()
                                    .enumerate()
                                    .map(|(index, item)| {
                                        view! {
                                            <Card style=item_delay(category_index, index)>
                                                <div class="card__header">
                                                    <h3 class="card__title">{item.name}</h3>
                                                    <Badge label=item.kind variant=BadgeVariant::Secondary/>
                                                </div>
                                                <p class="card__text">{item.description}</p>
                                                <dl class="meta-list">
                                                    <dt>"Método:"</dt>
                                                    <dd>{item.method}</dd>
                                                    <dt>"Frequência:"</dt>
                                                    <dd>{item.frequency}</dd>
                                                </dl>
                                            </Card>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </section>
                    }
                })
                .collect_view()}

            <section class="section">
                <h2 class="section__title">"Exemplos de Implementação"</h2>
                <div class="grid grid--2">
                    <CodeBlock sample=WEBHOOK_SAMPLE style=delay_style(800)/>
                    <CodeBlock sample=N8N_SAMPLE style=delay_style(900)/>
                </div>
            </section>

            <section class="section">
                <h2 class="section__title">"Segurança e Boas Práticas"</h2>
                <InfoCardGrid cards=PRACTICES base_delay_ms=1000/>
            </section>
        </div>
    }
}
