use super::*;

#[test]
fn content_failed_message_formats_status() {
    assert_eq!(content_failed_message(404), "content request failed: 404");
}
