use super::*;

#[test]
fn anchor_target_extracts_in_page_ids() {
    assert_eq!(anchor_target("#faq"), Some("faq"));
    assert_eq!(anchor_target("#reservation"), Some("reservation"));
}

#[test]
fn anchor_target_ignores_bare_hash_and_external_links() {
    assert_eq!(anchor_target("#"), None);
    assert_eq!(anchor_target(""), None);
    assert_eq!(anchor_target("https://example.com/#faq"), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_helpers_noop_outside_browser() {
    assert_eq!(read_meta("halawah-variant"), None);
    assert!(page_scroll_y().abs() < f64::EPSILON);
    scroll_to_id(RESERVATION_SECTION_ID);
    reset_scroll_left(REVIEWS_CONTAINER_ID);
    notice("hello");
}
