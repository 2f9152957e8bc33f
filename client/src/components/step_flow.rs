//! Numbered step timeline with connectors between steps.

use leptos::prelude::*;

use crate::components::card::Card;
use crate::content::FlowStep;
use crate::util::motion::stagger_delay;

#[component]
pub fn StepFlow(#[prop(into)] title: String, steps: &'static [FlowStep], base_delay_ms: u32) -> impl IntoView {
    let last = steps.len().saturating_sub(1);

    view! {
        <h2 class="section__title">{title}</h2>
        <Card class="step-flow">
            <ol class="step-flow__list">
                {steps
                    .iter()
                    .enumerate()
                    .map(|(index, step)| {
                        view! {
                            <li class="step-flow__step animate-fade-in" style=stagger_delay(base_delay_ms, index, 100)>
                                <span class="step-flow__number">{step.step}</span>
                                <div class="step-flow__body">
                                    <h4 class="step-flow__title">{step.title}</h4>
                                    <p class="step-flow__text">{step.description}</p>
                                </div>
                                {(index < last).then(|| view! { <span class="step-flow__connector" aria-hidden="true"></span> })}
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </Card>
    }
}
