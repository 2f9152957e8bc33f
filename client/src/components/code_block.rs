//! Titled source listing.

use leptos::prelude::*;

use crate::components::card::Card;
use crate::components::icon_glyph::IconGlyph;
use crate::content::CodeSample;

#[component]
pub fn CodeBlock(sample: CodeSample, #[prop(optional, into)] style: String) -> impl IntoView {
    view! {
        <Card class="code-block" style=style>
            <div class="code-block__header">
                <IconGlyph icon=sample.icon/>
                <h3 class="code-block__title">{sample.title}</h3>
            </div>
            <pre class="code-block__body" data-language=sample.language>
                <code>{sample.code}</code>
            </pre>
        </Card>
    }
}
