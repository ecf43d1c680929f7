//! Guest review carousel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reviews come from the content payload in the active language. The
//! container scrolls horizontally; the arrow buttons page by one container
//! width and wrap at either end, and touch drags scroll directly. Switching
//! language re-renders the cards and jumps the container back to the start
//! (the `ResetCarousel` side effect).

use leptos::prelude::*;

use crate::components::text::{Text, use_language};
use crate::i18n::{self, Bilingual};
use crate::state::carousel::{Direction, TouchDrag};
use crate::state::content::{ContentPayload, MAX_RATING, Review};
use crate::util::dom;

#[component]
pub fn Reviews() -> impl IntoView {
    let content = expect_context::<RwSignal<Option<ContentPayload>>>();
    let lang = use_language();
    let container = NodeRef::<leptos::html::Div>::new();
    let drag = StoredValue::new(TouchDrag::default());

    let reviews = move || {
        content.with(|c| {
            c.as_ref()
                .map(|c| c.reviews_for(lang.get()).to_vec())
                .unwrap_or_default()
        })
    };

    let page = move |direction: Direction| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = container.get_untracked() {
                let target = crate::state::carousel::step(direction, dom::scroll_metrics(&el));
                dom::scroll_horizontally(&el, target);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = direction;
    };

    let on_touch_start = move |ev: leptos::ev::TouchEvent| {
        #[cfg(feature = "hydrate")]
        {
            let (Some(el), Some(touch)) = (container.get_untracked(), ev.touches().get(0)) else {
                return;
            };
            let x = f64::from(touch.page_x() - el.offset_left());
            drag.update_value(|d| d.begin(x, f64::from(el.scroll_left())));
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    // Delegated listeners are passive, so `prevent_default` there cannot stop
    // the page from scrolling. Attach touchmove directly, non-passive.
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        use wasm_bindgen::JsCast as _;
        use wasm_bindgen::closure::Closure;

        let Some(el) = container.get() else {
            return;
        };
        let target = el.clone();
        let on_touch_move = Closure::<dyn FnMut(web_sys::TouchEvent)>::new(move |ev: web_sys::TouchEvent| {
            let Some(touch) = ev.touches().get(0) else {
                return;
            };
            let x = f64::from(touch.page_x() - target.offset_left());
            let Some(scroll) = drag.with_value(|d| d.move_to(x)) else {
                return;
            };
            ev.prevent_default();
            #[allow(clippy::cast_possible_truncation)]
            target.set_scroll_left(scroll.round() as i32);
        });
        let options = web_sys::AddEventListenerOptions::new();
        options.set_passive(false);
        if el
            .add_event_listener_with_callback_and_add_event_listener_options(
                "touchmove",
                on_touch_move.as_ref().unchecked_ref(),
                &options,
            )
            .is_err()
        {
            leptos::logging::warn!("reviews: touchmove listener not attached");
        }
        // The container lives for the whole page.
        on_touch_move.forget();
    });

    view! {
        <section id="reviews" class="reviews">
            <div class="container">
                <h2 class="section-title">
                    <Text label=i18n::REVIEWS_TITLE/>
                </h2>
                <div class="carousel">
                    <CarouselButton label=i18n::CAROUSEL_PREV glyph="‹" on_press=Callback::new(move |()| page(Direction::Prev))/>
                    <div
                        id=dom::REVIEWS_CONTAINER_ID
                        class="reviews-container"
                        node_ref=container
                        on:touchstart=on_touch_start
                        on:touchend=move |_| drag.update_value(TouchDrag::end)
                    >
                        {move || reviews().into_iter().map(review_card).collect_view()}
                    </div>
                    <CarouselButton label=i18n::CAROUSEL_NEXT glyph="›" on_press=Callback::new(move |()| page(Direction::Next))/>
                </div>
            </div>
        </section>
    }
}

#[component]
fn CarouselButton(label: Bilingual, glyph: &'static str, on_press: Callback<()>) -> impl IntoView {
    let lang = use_language();
    view! {
        <button
            class="carousel-btn"
            aria-label=move || label.pick(lang.get())
            on:click=move |_| on_press.run(())
        >
            {glyph}
        </button>
    }
}

fn review_card(review: Review) -> impl IntoView {
    let stars = review.stars();
    let rating = format!("{}/{MAX_RATING}", review.rating.min(MAX_RATING));
    let Review { name, text, .. } = review;
    view! {
        <div class="review-card">
            <div class="review-stars" aria-label=rating>
                {stars}
            </div>
            <p class="review-text">{text}</p>
            <p class="review-author">{name}</p>
        </div>
    }
}
