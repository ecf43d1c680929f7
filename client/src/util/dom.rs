//! Small document helpers: meta lookup, smooth scrolling, blocking notices.
//!
//! Every helper tolerates missing elements and no-ops outside the browser.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

#[cfg(feature = "hydrate")]
use crate::state::carousel::{ScrollMetrics, ScrollTarget};

/// Element id of the reservation section.
pub const RESERVATION_SECTION_ID: &str = "reservation";
/// Element id of the review carousel's scroll container.
pub const REVIEWS_CONTAINER_ID: &str = "reviews-container";

/// In-page target id for an anchor `href`, if it names one.
///
/// `"#faq"` → `Some("faq")`; a bare `"#"` or an external link → `None`.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[cfg(feature = "hydrate")]
fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

/// `content` of `<meta name="{name}">`.
pub fn read_meta(name: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        document()?
            .query_selector(&format!("meta[name=\"{name}\"]"))
            .ok()
            .flatten()?
            .get_attribute("content")
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = name;
        None
    }
}

/// Smoothly scroll the element with `id` into view.
pub fn scroll_to_id(id: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(el) = document().and_then(|d| d.get_element_by_id(id)) else {
            return;
        };
        let opts = web_sys::ScrollIntoViewOptions::new();
        opts.set_behavior(web_sys::ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

/// Show a blocking notice (`window.alert`).
pub fn notice(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}

/// Current vertical page scroll in pixels.
pub fn page_scroll_y() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Jump the element with `id` back to horizontal offset 0.
pub fn reset_scroll_left(id: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = document().and_then(|d| d.get_element_by_id(id)) {
            el.set_scroll_left(0);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

#[cfg(feature = "hydrate")]
pub fn scroll_metrics(el: &web_sys::Element) -> ScrollMetrics {
    ScrollMetrics {
        scroll_left: f64::from(el.scroll_left()),
        client_width: f64::from(el.client_width()),
        scroll_width: f64::from(el.scroll_width()),
    }
}

/// Smooth-scroll `el` horizontally to or by the given offset.
#[cfg(feature = "hydrate")]
pub fn scroll_horizontally(el: &web_sys::Element, target: ScrollTarget) {
    let opts = web_sys::ScrollToOptions::new();
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    match target {
        ScrollTarget::To(left) => {
            opts.set_left(left);
            el.scroll_to_with_scroll_to_options(&opts);
        }
        ScrollTarget::By(delta) => {
            opts.set_left(delta);
            el.scroll_by_with_scroll_to_options(&opts);
        }
    }
}
