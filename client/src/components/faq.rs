//! FAQ accordion with an optional outer show/hide toggle.

use leptos::prelude::*;

use crate::components::text::{Text, use_language};
use crate::i18n;
use crate::state::content::{ContentPayload, FaqItem};
use crate::state::site::Command;
use crate::util::dispatch::SiteHandle;

#[component]
pub fn Faq() -> impl IntoView {
    let site = expect_context::<SiteHandle>();
    let content = expect_context::<RwSignal<Option<ContentPayload>>>();
    let lang = use_language();
    let list_open = move || site.state.with(|s| s.faq.list_open);

    let items = move || {
        content.with(|c| {
            c.as_ref()
                .map(|c| c.faq_for(lang.get()).to_vec())
                .unwrap_or_default()
        })
    };

    let heading = if site.features.enable_faq_list_toggle {
        view! {
            <button
                class="faq-toggle section-title"
                class:active=list_open
                aria-expanded=move || list_open().to_string()
                on:click=move |_| site.dispatch(Command::ToggleFaqList)
            >
                <Text label=i18n::FAQ_TITLE/>
                <span class="faq-toggle-icon">{move || if list_open() { "−" } else { "+" }}</span>
            </button>
        }
        .into_any()
    } else {
        view! {
            <h2 class="section-title">
                <Text label=i18n::FAQ_TITLE/>
            </h2>
        }
        .into_any()
    };

    view! {
        <section id="faq" class="faq">
            <div class="container">
                {heading}
                <div id="faq-container" class="faq-list" class:hidden=move || !list_open()>
                    {move || {
                        items()
                            .into_iter()
                            .enumerate()
                            .map(|(index, item)| faq_entry(site, index, item))
                            .collect_view()
                    }}
                </div>
            </div>
        </section>
    }
}

fn faq_entry(site: SiteHandle, index: usize, item: FaqItem) -> impl IntoView {
    let open = move || site.state.with(|s| s.faq.is_open(index));
    let FaqItem { question, answer } = item;
    view! {
        <div class="faq-item" class:active=open>
            <button
                class="faq-question"
                aria-expanded=move || open().to_string()
                on:click=move |_| site.dispatch(Command::ToggleFaqItem(index))
            >
                <span>{question}</span>
                <span class="faq-icon">"▼"</span>
            </button>
            <div class="faq-answer">
                <p>{answer}</p>
            </div>
        </div>
    }
}
