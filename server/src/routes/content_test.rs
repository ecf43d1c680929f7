use halawah_client::config::SiteFeatures;
use halawah_client::state::content::Review;

use super::*;

#[tokio::test]
async fn serves_loaded_payload() {
    let payload = ContentPayload {
        reviews: vec![Review { name: "Sara".to_owned(), rating: 5, text: "Great".to_owned() }],
        ..ContentPayload::default()
    };
    let state = AppState::new(SiteFeatures::extended(), Some(payload.clone()));
    let Json(body) = content_json(State(state)).await.unwrap();
    assert_eq!(body, payload);
}

#[tokio::test]
async fn missing_payload_is_not_found() {
    let state = AppState::new(SiteFeatures::simplified(), None);
    assert_eq!(content_json(State(state)).await.unwrap_err(), StatusCode::NOT_FOUND);
}

#[test]
fn payload_serializes_with_camel_case_keys() {
    let json = serde_json::to_value(ContentPayload::default()).unwrap();
    assert!(json.get("reviewsAr").is_some());
    assert!(json.get("faqAr").is_some());
}
