//! Inline icon rendering.

use leptos::prelude::*;

use crate::icon::Icon;

/// Decorative icon; hidden from assistive technology.
#[component]
pub fn IconGlyph(icon: Icon, #[prop(optional, into)] class: String) -> impl IntoView {
    let class = if class.is_empty() {
        format!("icon icon--{}", icon.name())
    } else {
        format!("icon icon--{} {class}", icon.name())
    };

    view! {
        <span class=class aria-hidden="true">{icon.glyph()}</span>
    }
}
