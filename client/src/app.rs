//! Root application component, HTML shell, and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server renders the page with default preferences. Once hydrated, the
//! client restores stored preferences, syncs the header with the current
//! scroll position, and fetches the review/FAQ payload. Until that payload
//! arrives the carousel and the FAQ list render empty.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::{SiteFeatures, VARIANT_META_NAME};
use crate::i18n::Language;
use crate::pages::home::HomePage;
use crate::state::content::ContentPayload;
use crate::state::prefs::Preferences;
use crate::state::site::SiteState;
use crate::util::dispatch::SiteHandle;

/// HTML shell rendered on the server for SSR + hydration.
///
/// `features` is provided as context so `App` renders the host's variant,
/// and is echoed into a `<meta>` tag for the client to pick up on hydrate.
pub fn shell(options: LeptosOptions, features: SiteFeatures) -> impl IntoView {
    provide_context(features);
    let defaults = Preferences::default();
    view! {
        <!DOCTYPE html>
        <html lang=defaults.language.code() dir=defaults.language.dir() data-theme=defaults.theme.as_str()>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=VARIANT_META_NAME content=features.variant.as_str()/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the site handle, the active-language memo, and the content
/// payload signal to every section.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let features = SiteFeatures::detect();
    let site = SiteHandle::new(SiteState::new(Preferences::default(), &features), features);
    let language: Memo<Language> = Memo::new(move |_| site.state.with(SiteState::language));
    let content = RwSignal::new(None::<ContentPayload>);

    provide_context(site);
    provide_context(language);
    provide_context(content);

    #[cfg(feature = "hydrate")]
    {
        use crate::state::content::CONTENT_PATH;
        use crate::state::site::Command;

        Effect::new(move || {
            site.dispatch(Command::RestorePreferences(crate::util::preferences::load()));
            site.dispatch(Command::PageScrolled(crate::util::dom::page_scroll_y()));
            leptos::task::spawn_local(async move {
                if let Some(payload) = crate::net::content::fetch_content(CONTENT_PATH).await {
                    content.set(Some(payload));
                }
            });
        });
    }

    view! {
        <Title text="Halawah | حلاوة"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
