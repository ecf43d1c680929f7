//! Bilingual text nodes.

use leptos::prelude::*;

use crate::i18n::{Bilingual, Language};

/// Active language, provided by `App` as a memo over the site state.
pub fn use_language() -> Memo<Language> {
    expect_context::<Memo<Language>>()
}

/// Inline text that follows the active language. Both translations are
/// also carried as `data-en`/`data-ar` attributes.
#[component]
pub fn Text(label: Bilingual) -> impl IntoView {
    let lang = use_language();
    view! {
        <span data-en=label.en data-ar=label.ar>
            {move || label.pick(lang.get())}
        </span>
    }
}
