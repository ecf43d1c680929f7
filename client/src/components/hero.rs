//! Landing hero and about sections.

use leptos::prelude::*;

use crate::components::text::Text;
use crate::i18n;
use crate::state::site::Command;
use crate::util::dispatch::SiteHandle;

#[component]
pub fn Hero() -> impl IntoView {
    let site = expect_context::<SiteHandle>();
    view! {
        <section id="home" class="hero">
            <div class="hero-content">
                <h1 class="hero-title">
                    <Text label=i18n::HERO_TITLE/>
                </h1>
                <p class="hero-subtitle">
                    <Text label=i18n::HERO_SUBTITLE/>
                </p>
                <button class="btn btn-primary btn-large" on:click=move |_| site.dispatch(Command::StartReservation)>
                    <Text label=i18n::BOOK_NOW/>
                </button>
            </div>
        </section>
    }
}

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="about">
            <div class="container">
                <h2 class="section-title">
                    <Text label=i18n::ABOUT_TITLE/>
                </h2>
                <p class="about-text">
                    <Text label=i18n::ABOUT_TEXT/>
                </p>
            </div>
        </section>
    }
}
