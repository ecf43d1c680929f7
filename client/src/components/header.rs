//! Sticky site header: brand, section navigation, theme and language
//! controls, and the mobile menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! The header reacts to two window-level events. Page scroll toggles the
//! `scrolled` styling past the threshold in `state::ui`, and a click outside
//! both the open mobile menu and its toggle closes the menu. Navigation links
//! to in-page anchors scroll smoothly instead of jumping.

use leptos::prelude::*;

use crate::components::text::{Text, use_language};
use crate::config::ThemeControl;
use crate::i18n::{self, Bilingual, Language};
use crate::state::site::Command;
use crate::state::theme::Theme;
use crate::util::dispatch::SiteHandle;
use crate::util::dom;

const NAV_LINKS: &[(&str, Bilingual)] = &[
    ("#home", i18n::NAV_HOME),
    ("#about", i18n::NAV_ABOUT),
    ("#reservation", i18n::NAV_RESERVATION),
    ("#reviews", i18n::NAV_REVIEWS),
    ("#faq", i18n::NAV_FAQ),
    ("#contact", i18n::NAV_CONTACT),
];

#[component]
pub fn Header() -> impl IntoView {
    let site = expect_context::<SiteHandle>();
    let lang = use_language();
    let menu_ref = NodeRef::<leptos::html::Ul>::new();
    let toggle_ref = NodeRef::<leptos::html::Button>::new();

    let scrolled = move || site.state.with(|s| s.ui.header_scrolled);
    let menu_open = move || site.state.with(|s| s.ui.mobile_menu_open);

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast as _;

        let on_scroll = window_event_listener(leptos::ev::scroll, move |_| {
            site.dispatch(Command::PageScrolled(dom::page_scroll_y()));
        });
        let on_click = window_event_listener(leptos::ev::click, move |ev| {
            if !site.state.with_untracked(|s| s.ui.mobile_menu_open) {
                return;
            }
            let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok()) else {
                return;
            };
            let in_menu = menu_ref.get_untracked().is_some_and(|m| m.contains(Some(&target)));
            let on_toggle = toggle_ref.get_untracked().is_some_and(|t| t.contains(Some(&target)));
            if !in_menu && !on_toggle {
                site.dispatch(Command::CloseMobileMenu);
            }
        });
        on_cleanup(move || {
            on_scroll.remove();
            on_click.remove();
        });
    }

    view! {
        <header class="header" class:scrolled=scrolled>
            <nav class="navbar">
                <a href="#home" class="logo" on:click=move |ev| follow_anchor(site, ev, "#home")>
                    <Text label=i18n::BRAND/>
                </a>
                <ul class="nav-menu" class:active=menu_open node_ref=menu_ref>
                    {NAV_LINKS
                        .iter()
                        .map(|&(href, label)| {
                            view! {
                                <li>
                                    <a href=href class="nav-link" on:click=move |ev| follow_anchor(site, ev, href)>
                                        <Text label=label/>
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <div class="nav-controls">
                    <ThemeControls/>
                    <select
                        class="language-select"
                        aria-label=move || i18n::LANGUAGE_LABEL.pick(lang.get())
                        prop:value=move || lang.get().code()
                        on:change=move |ev| {
                            if let Some(language) = Language::parse(&event_target_value(&ev)) {
                                site.dispatch(Command::SetLanguage(language));
                            }
                        }
                    >
                        <option value="en">{i18n::LANGUAGE_EN.en}</option>
                        <option value="ar">{i18n::LANGUAGE_AR.ar}</option>
                    </select>
                    <button
                        class="hamburger"
                        class:active=menu_open
                        node_ref=toggle_ref
                        aria-label=move || i18n::MENU_TOGGLE.pick(lang.get())
                        aria-expanded=move || menu_open().to_string()
                        on:click=move |_| site.dispatch(Command::ToggleMobileMenu)
                    >
                        <span class="bar"></span>
                        <span class="bar"></span>
                        <span class="bar"></span>
                    </button>
                </div>
            </nav>
        </header>
    }
}

/// Smooth-scroll to an in-page anchor and close the mobile menu.
fn follow_anchor(site: SiteHandle, ev: leptos::ev::MouseEvent, href: &str) {
    if let Some(id) = dom::anchor_target(href) {
        ev.prevent_default();
        dom::scroll_to_id(id);
    }
    site.dispatch(Command::CloseMobileMenu);
}

/// Single cycle button or one button per theme, depending on the variant.
#[component]
fn ThemeControls() -> impl IntoView {
    let site = expect_context::<SiteHandle>();
    let lang = use_language();
    let theme = move || site.state.with(|s| s.prefs.theme);

    match site.features.theme_control {
        ThemeControl::Cycle => view! {
            <button
                class="theme-toggle"
                title=move || i18n::THEME_CYCLE.pick(lang.get())
                on:click=move |_| site.dispatch(Command::CycleTheme)
            >
                {move || theme().preview_icon()}
            </button>
        }
        .into_any(),
        ThemeControl::Direct => view! {
            <div class="theme-switcher">
                {Theme::CYCLE
                    .into_iter()
                    .map(|option| {
                        view! {
                            <button
                                class="theme-btn"
                                class:active=move || theme() == option
                                data-theme=option.as_str()
                                title=move || option.label().pick(lang.get())
                                on:click=move |_| site.dispatch(Command::SelectTheme(option))
                            >
                                {option.icon()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_any(),
    }
}
