use super::*;

const SAMPLE: &str = r#"{
    "reviews": [
        {"name": "Sara", "rating": 5, "text": "Wonderful knafeh"},
        {"name": "Omar", "rating": 3, "text": "Good"}
    ],
    "reviewsAr": [
        {"name": "سارة", "rating": 5, "text": "كنافة رائعة"}
    ],
    "faq": [
        {"question": "Do you deliver?", "answer": "Not yet."}
    ],
    "faqAr": [
        {"question": "هل يوجد توصيل؟", "answer": "ليس بعد."}
    ]
}"#;

#[test]
fn parses_camel_case_payload() {
    let payload = ContentPayload::from_json(SAMPLE).unwrap();
    assert_eq!(payload.reviews.len(), 2);
    assert_eq!(payload.reviews_ar.len(), 1);
    assert_eq!(payload.faq[0].question, "Do you deliver?");
    assert_eq!(payload.faq_ar[0].answer, "ليس بعد.");
}

#[test]
fn lists_are_selected_by_language_in_given_order() {
    let payload = ContentPayload::from_json(SAMPLE).unwrap();
    let names: Vec<&str> = payload.reviews_for(Language::En).iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Sara", "Omar"]);
    assert_eq!(payload.reviews_for(Language::Ar)[0].name, "سارة");
    assert_eq!(payload.faq_for(Language::Ar).len(), 1);
}

#[test]
fn missing_lists_default_to_empty() {
    let payload = ContentPayload::from_json(r#"{"reviews": []}"#).unwrap();
    assert!(payload.faq.is_empty());
    assert!(payload.reviews_ar.is_empty());
}

#[test]
fn malformed_payload_is_an_error() {
    assert!(ContentPayload::from_json(r#"{"reviews": [{"name": 1}]}"#).is_err());
}

#[test]
fn stars_render_filled_then_empty() {
    let review = Review { name: "A".to_owned(), rating: 3, text: String::new() };
    assert_eq!(review.stars(), "★★★☆☆");
    let review = Review { rating: 5, ..review };
    assert_eq!(review.stars(), "★★★★★");
    let review = Review { rating: 9, ..review };
    assert_eq!(review.stars(), "★★★★★");
}
