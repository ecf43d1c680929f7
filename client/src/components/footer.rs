//! Contact section with the copy-link button, and the page footer.

use leptos::prelude::*;

use crate::components::text::{Text, use_language};
use crate::i18n;
use crate::util::dispatch::SiteHandle;

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="contact">
            <div class="container">
                <h2 class="section-title">
                    <Text label=i18n::CONTACT_TITLE/>
                </h2>
                <CopyLinkButton/>
            </div>
        </section>
    }
}

/// Copies the page URL. The label flips to the confirmation text and back
/// after `COPY_FEEDBACK_MS`; a failure is logged and surfaced as a notice.
#[component]
fn CopyLinkButton() -> impl IntoView {
    let site = expect_context::<SiteHandle>();
    let lang = use_language();
    let confirmed = move || site.state.with(|s| s.ui.copy_confirmed);

    let on_click = move |_| {
        #[cfg(feature = "hydrate")]
        {
            use crate::state::site::Command;

            leptos::task::spawn_local(async move {
                let Some(url) = crate::util::clipboard::page_url() else {
                    site.dispatch(Command::CopyFailed("page URL unavailable".to_owned()));
                    return;
                };
                match crate::util::clipboard::write_text(&url).await {
                    Ok(()) => site.dispatch(Command::CopySucceeded),
                    Err(reason) => site.dispatch(Command::CopyFailed(reason)),
                }
            });
        }
    };

    view! {
        <button class="btn btn-primary copy-link-btn" class:copied=confirmed on:click=on_click>
            {move || {
                let label = if confirmed() { i18n::COPY_DONE } else { i18n::COPY_LINK };
                label.pick(lang.get())
            }}
        </button>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <p>
                    <Text label=i18n::FOOTER_RIGHTS/>
                </p>
            </div>
        </footer>
    }
}
