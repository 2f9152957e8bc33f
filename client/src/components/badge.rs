//! Small pill labels for categories, technologies and statuses.

use leptos::prelude::*;

/// Visual treatment of a badge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    #[default]
    Default,
    Secondary,
    Outline,
    Destructive,
    Warning,
    Success,
}

impl BadgeVariant {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            BadgeVariant::Default => "badge",
            BadgeVariant::Secondary => "badge badge--secondary",
            BadgeVariant::Outline => "badge badge--outline",
            BadgeVariant::Destructive => "badge badge--destructive",
            BadgeVariant::Warning => "badge badge--outline badge--warning",
            BadgeVariant::Success => "badge badge--outline badge--success",
        }
    }
}

#[component]
pub fn Badge(#[prop(into)] label: String, #[prop(optional)] variant: BadgeVariant) -> impl IntoView {
    view! {
        <span class=variant.class()>{label}</span>
    }
}

/// A row of outline badges, one per label.
#[component]
pub fn BadgeList(labels: &'static [&'static str]) -> impl IntoView {
    view! {
        <div class="badge-list">
            {labels
                .iter()
                .map(|label| view! { <Badge label=*label variant=BadgeVariant::Outline/> })
                .collect_view()}
        </div>
    }
}
