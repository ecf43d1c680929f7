use std::io::Write;

use halawah_client::state::content::{FaqItem, Review};

use super::*;

fn review(name: &str, rating: u8) -> Review {
    Review { name: name.to_owned(), rating, text: "Lovely".to_owned() }
}

fn write_temp(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn load_parses_camel_case_payload() {
    let file = write_temp(
        r#"{"reviews":[{"name":"Sara","rating":5,"text":"Great"}],"reviewsAr":[],"faq":[],"faqAr":[{"question":"س","answer":"ج"}]}"#,
    );
    let payload = load(file.path()).unwrap();
    assert_eq!(payload.reviews.len(), 1);
    assert_eq!(payload.faq_ar[0].question, "س");
}

#[test]
fn load_reports_missing_file() {
    let err = load(Path::new("/nonexistent/content.json")).unwrap_err();
    assert!(matches!(err, ContentError::Read { .. }));
    assert!(err.to_string().contains("/nonexistent/content.json"));
}

#[test]
fn load_reports_malformed_json() {
    let file = write_temp("{ not json");
    assert!(matches!(load(file.path()), Err(ContentError::Parse(_))));
}

#[test]
fn load_or_warn_swallows_errors() {
    assert!(load_or_warn(Path::new("/nonexistent/content.json")).is_none());
}

#[test]
fn warnings_flag_ratings_and_mismatched_lists() {
    let payload = ContentPayload {
        reviews: vec![review("Sara", 5), review("Omar", 7)],
        reviews_ar: vec![review("سارة", 0)],
        faq: vec![FaqItem { question: "Q".to_owned(), answer: "A".to_owned() }],
        faq_ar: Vec::new(),
    };
    let warnings = warnings(&payload);
    assert_eq!(warnings.len(), 4);
    assert!(warnings[0].contains("Omar"));
    assert!(warnings[1].starts_with("ar review"));
}

#[test]
fn balanced_payload_has_no_warnings() {
    let payload = ContentPayload {
        reviews: vec![review("Sara", 4)],
        reviews_ar: vec![review("سارة", 4)],
        ..ContentPayload::default()
    };
    assert!(warnings(&payload).is_empty());
}
