//! Landing page: hero, project stats, ecosystem cards and milestones.

use leptos::prelude::*;

use crate::components::badge::{Badge, BadgeVariant};
use crate::components::card::{Card, StatCard};
use crate::components::icon_glyph::IconGlyph;
use crate::content::overview::{
    CONTEXT, DESCRIPTION, FEATURES, MILESTONES, PROJECT_STATS, SUBTITLE, TECHNOLOGIES, TIMELINE_LEAD, TIMELINE_TITLE,
    TITLE,
};
use crate::icon::Icon;
use crate::state::route::Page;
use crate::util::motion::{delay_style, stagger_delay};

#[component]
pub fn OverviewPage() -> impl IntoView {
    view! {
        <div class="page page--overview animate-fade-in" data-page=Page::Overview.key()>
            <section class="hero animate-slide-up">
                <div class="hero__content animate-slide-up" style=delay_style(200)>
                    <span class="badge badge--hero">
                        <IconGlyph icon=Icon::Building/>
                        "Documentação Técnica"
                    </span>
                    <h1 class="hero__title gradient-text">{TITLE}</h1>
                    <h2 class="hero__subtitle">{SUBTITLE}</h2>
                    <p class="hero__description">{DESCRIPTION}</p>
                    <p class="hero__context">{CONTEXT}</p>
                    <div class="badge-list badge-list--center">
                        {TECHNOLOGIES
                            .iter()
                            .map(|tech| view! { <Badge label=*tech variant=BadgeVariant::Outline/> })
                            .collect_view()}
                    </div>
                    <div class="hero__actions">
                        <a class="btn btn--primary btn--lg" href=Page::Architecture.path()>
                            <IconGlyph icon=Icon::Building/>
                            "Ver Arquitetura"
                            <IconGlyph icon=Icon::ArrowRight/>
                        </a>
                        <a class="btn btn--outline btn--lg" href=Page::Pipeline.path()>
                            <IconGlyph icon=Icon::Database/>
                            "Pipeline de Dados"
                        </a>
                    </div>
                </div>
            </section>

            <section class="grid grid--4">
                {PROJECT_STATS
                    .iter()
                    .enumerate()
                    .map(|(index, stat)| {
                        view! {
                            <StatCard metric=stat.metric style=stagger_delay(500, index, 100)>
                                <div class="stat-card__caption">{stat.description}</div>
                            </StatCard>
                        }
                    })
                    .collect_view()}
            </section>

            <section class="section">
                <div class="section__intro">
                    <h3 class="section__headline">
                        "Componentes do " <span class="gradient-text">"Ecossistema"</span>
                    </h3>
                    <p class="section__lead">
                        "Explore cada parte da arquitetura e entenda como as tecnologias se integram para formar o sistema completo."
                    </p>
                </div>
                <div class="grid grid--3">
                    {FEATURES
                        .iter()
                        .enumerate()
                        .map(|(index, feature)| {
                            view! {
                                <a class="feature-link" href=feature.link.path()>
                                    <Card class="feature-card" style=stagger_delay(700, index, 100)>
                                        <div class="card__icon">
                                            <IconGlyph icon=feature.icon/>
                                        </div>
                                        <h4 class="card__title">{feature.title}</h4>
                                        <p class="card__text">{feature.description}</p>
                                        <span class="feature-card__cta">
                                            "Explorar" <IconGlyph icon=Icon::ArrowRight/>
                                        </span>
                                    </Card>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="section">
                <Card class="timeline-card" style=delay_style(1000)>
                    <h3 class="section__headline">{TIMELINE_TITLE}</h3>
                    <p class="section__lead">{TIMELINE_LEAD}</p>
                    <div class="grid grid--3">
                        {MILESTONES
                            .iter()
                            .map(|milestone| {
                                view! {
                                    <div class="milestone">
                                        <Badge label=milestone.phase variant=BadgeVariant::Outline/>
                                        <h4 class="milestone__title">{milestone.title}</h4>
                                        <p class="card__text">{milestone.description}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="hero__actions">
                        <a class="btn btn--primary btn--lg" href=Page::Architecture.path()>
                            <IconGlyph icon=Icon::Building/>
                            "Explorar Arquitetura"
                        </a>
                        <a class="btn btn--outline btn--lg" href=Page::Roadmap.path()>
                            <IconGlyph icon=Icon::MapPin/>
                            "Ver Roadmap"
                        </a>
                    </div>
                </Card>
            </section>
        </div>
    }
}
