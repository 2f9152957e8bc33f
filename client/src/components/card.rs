//! Glass-style content cards.

use leptos::prelude::*;

use crate::components::icon_glyph::IconGlyph;
use crate::content::{InfoCard, Metric};
use crate::util::motion::stagger_delay;

/// Generic card container. `style` usually carries an animation delay.
#[component]
pub fn Card(
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] style: String,
    children: Children,
) -> impl IntoView {
    let class = if class.is_empty() { "card animate-slide-up".to_owned() } else { format!("card animate-slide-up {class}") };

    view! {
        <div class=class style=style>
            {children()}
        </div>
    }
}

/// Grid of icon + title + text cards.
#[component]
pub fn InfoCardGrid(cards: &'static [InfoCard], base_delay_ms: u32) -> impl IntoView {
    view! {
        <div class="grid grid--auto">
            {cards
                .iter()
                .enumerate()
                .map(|(index, card)| {
                    view! {
                        <Card style=stagger_delay(base_delay_ms, index, 100)>
                            <div class="card__icon">
                                <IconGlyph icon=card.icon/>
                            </div>
                            <h3 class="card__title">{card.title}</h3>
                            <p class="card__text">{card.description}</p>
                        </Card>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Headline number with its label; `children` render underneath.
#[component]
pub fn StatCard(
    metric: Metric,
    #[prop(optional, into)] style: String,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <Card class="stat-card" style=style>
            <div class="stat-card__value gradient-text">{metric.value}</div>
            <div class="stat-card__label">{metric.label}</div>
            {children.map(|c| c())}
        </Card>
    }
}
