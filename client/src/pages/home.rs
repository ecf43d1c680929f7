//! Landing page composing every site section in document order.

use leptos::prelude::*;

use crate::components::faq::Faq;
use crate::components::footer::{Contact, Footer};
use crate::components::header::Header;
use crate::components::hero::{About, Hero};
use crate::components::reservation::ReservationSection;
use crate::components::reviews::Reviews;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Header/>
        <main>
            <Hero/>
            <About/>
            <ReservationSection/>
            <Reviews/>
            <Faq/>
            <Contact/>
        </main>
        <Footer/>
    }
}
