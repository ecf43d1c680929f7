use super::*;
use time::macros::date;

fn filled_draft() -> ReservationDraft {
    ReservationDraft {
        full_name: "Ali Hassan Omar".to_owned(),
        phone: "0791234567".to_owned(),
        people: "4".to_owned(),
        meal_time: "dinner".to_owned(),
    }
}

fn details_state() -> ReservationState {
    ReservationState { step: WizardStep::EnterDetails, draft: filled_draft(), ..ReservationState::default() }
}

// =============================================================
// Field validators
// =============================================================

#[test]
fn phone_accepts_only_07_plus_eight_digits() {
    assert!(is_jordanian_mobile("0791234567"));
    assert!(is_jordanian_mobile("0771234567"));
    assert!(!is_jordanian_mobile("0691234567"));
    assert!(!is_jordanian_mobile("07912345"));
    assert!(!is_jordanian_mobile("079123456789"));
    assert!(!is_jordanian_mobile("07912345a7"));
    assert!(!is_jordanian_mobile("07٩1234567"));
}

#[test]
fn name_word_count_rule() {
    assert!(!has_min_words("Ali Hassan", 3));
    assert!(has_min_words("Ali Hassan Omar", 3));
    assert!(has_min_words("  Ali   Hassan \t Omar  ", 3));
    assert!(has_min_words("Ali", 1));
}

#[test]
fn party_size_bounded_one_to_ten() {
    assert_eq!(parse_party_size("1"), Some(1));
    assert_eq!(parse_party_size("10"), Some(10));
    assert_eq!(parse_party_size("0"), None);
    assert_eq!(parse_party_size("11"), None);
    assert_eq!(parse_party_size(""), None);
    assert_eq!(parse_party_size("two"), None);
}

#[test]
fn price_preview_is_twenty_per_person() {
    for n in 1..=10u32 {
        assert_eq!(preview_total(&n.to_string()), Some(n * 20));
    }
    assert_eq!(preview_total("0"), None);
    assert_eq!(preview_total(""), None);
}

// =============================================================
// Whole-form validation
// =============================================================

#[test]
fn extended_validation_accepts_complete_draft() {
    let reservation = validate(&filled_draft(), Some(date!(2026 - 01 - 22)), &SiteFeatures::extended()).unwrap();
    assert_eq!(reservation.people, 4);
    assert_eq!(reservation.meal_time, Some(MealTime::Dinner));
    assert_eq!(reservation.total_price(), 80);
}

#[test]
fn all_failures_are_reported_together() {
    let errors =
        validate(&ReservationDraft::default(), Some(date!(2026 - 01 - 22)), &SiteFeatures::extended()).unwrap_err();
    assert_eq!(errors.len(), 4);
    assert_eq!(errors.for_field(ReservationField::FullName), Some(ReservationError::NameRequired));
    assert_eq!(errors.for_field(ReservationField::Phone), Some(ReservationError::PhoneRequired));
    assert_eq!(errors.for_field(ReservationField::People), Some(ReservationError::PeopleRequired));
    assert_eq!(errors.for_field(ReservationField::MealTime), Some(ReservationError::MealTimeRequired));
}

#[test]
fn one_failing_field_leaves_others_clean() {
    let mut draft = filled_draft();
    draft.full_name = "Ali Hassan".to_owned();
    let errors = validate(&draft, Some(date!(2026 - 01 - 22)), &SiteFeatures::extended()).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.message_for(ReservationField::FullName), Some(i18n::ERR_NAME_WORDS));
    assert_eq!(errors.message_for(ReservationField::Phone), None);
}

#[test]
fn simplified_validation_skips_meal_time_and_word_count() {
    let mut draft = filled_draft();
    draft.full_name = "Ali".to_owned();
    draft.meal_time = String::new();
    let reservation = validate(&draft, Some(date!(2026 - 01 - 23)), &SiteFeatures::simplified()).unwrap();
    assert_eq!(reservation.meal_time, None);
    assert_eq!(reservation.full_name, "Ali");
}

#[test]
fn missing_date_is_an_error() {
    let errors = validate(&filled_draft(), None, &SiteFeatures::extended()).unwrap_err();
    assert_eq!(errors.for_field(ReservationField::Date), Some(ReservationError::DateMissing));
}

#[test]
fn log_record_carries_reservation_fields() {
    let reservation = validate(&filled_draft(), Some(date!(2026 - 01 - 22)), &SiteFeatures::extended()).unwrap();
    let record = reservation.to_log_record();
    assert_eq!(record["name"], "Ali Hassan Omar");
    assert_eq!(record["mealTime"], "dinner");
    assert_eq!(record["date"], "2026-01-22");
    assert_eq!(record["total"], 80);
}

// =============================================================
// Wizard transitions
// =============================================================

#[test]
fn wizard_starts_on_date_step() {
    let state = ReservationState::default();
    assert_eq!(state.step, WizardStep::SelectDate);
    assert_eq!(state.step.number(), 1);
}

#[test]
fn step_indicator_marks_earlier_steps_done() {
    assert!(!WizardStep::SelectDate.is_done_at(WizardStep::SelectDate));
    assert!(WizardStep::SelectDate.is_done_at(WizardStep::EnterDetails));
    assert!(WizardStep::EnterDetails.is_done_at(WizardStep::Confirmed));
    assert!(!WizardStep::Confirmed.is_done_at(WizardStep::Confirmed));
}

#[test]
fn date_selected_then_back() {
    let mut state = ReservationState::default();
    state.date_selected();
    assert_eq!(state.step, WizardStep::EnterDetails);
    state.edit(DraftField::Phone, "0791234567".to_owned());
    state.back();
    assert_eq!(state.step, WizardStep::SelectDate);
    assert_eq!(state.draft.value(DraftField::Phone), "0791234567");
}

#[test]
fn submit_with_payment_keeps_draft_until_paid() {
    let mut state = details_state();
    let accepted = state.submit(Some(date!(2026 - 01 - 22)), &SiteFeatures::extended());
    assert!(accepted.is_some());
    assert_eq!(state.step, WizardStep::Confirmed);
    assert_eq!(state.draft, filled_draft());
    assert_eq!(state.pending, accepted);
}

#[test]
fn submit_without_payment_clears_draft_immediately() {
    let mut state = details_state();
    state.submit(Some(date!(2026 - 01 - 22)), &SiteFeatures::simplified());
    assert_eq!(state.step, WizardStep::Confirmed);
    assert_eq!(state.draft, ReservationDraft::default());
    assert!(state.pending.is_none());
}

#[test]
fn show_calendar_from_confirmation_drops_pending_payment() {
    let mut state = details_state();
    state.submit(Some(date!(2026 - 01 - 22)), &SiteFeatures::extended());
    state.card_form_open = true;
    state.show_calendar();
    assert_eq!(state.step, WizardStep::SelectDate);
    assert!(state.pending.is_none());
    assert!(!state.card_form_open);
    assert_eq!(state.draft, filled_draft());
}

#[test]
fn failed_submit_stays_on_details_and_records_errors() {
    let mut state = details_state();
    state.edit(DraftField::Phone, "12345".to_owned());
    assert!(state.submit(Some(date!(2026 - 01 - 22)), &SiteFeatures::extended()).is_none());
    assert_eq!(state.step, WizardStep::EnterDetails);
    assert_eq!(state.errors.for_field(ReservationField::Phone), Some(ReservationError::PhoneInvalid));

    state.edit(DraftField::Phone, "0791234567".to_owned());
    assert!(state.submit(Some(date!(2026 - 01 - 22)), &SiteFeatures::extended()).is_some());
    assert!(state.errors.is_empty());
}

#[test]
fn submit_outside_details_step_is_ignored() {
    let mut state = ReservationState { draft: filled_draft(), ..ReservationState::default() };
    assert!(state.submit(Some(date!(2026 - 01 - 22)), &SiteFeatures::extended()).is_none());
    assert_eq!(state.step, WizardStep::SelectDate);
}

#[test]
fn price_preview_respects_feature_flag() {
    let state = details_state();
    assert_eq!(state.price_preview(&SiteFeatures::extended()), Some(80));
    assert_eq!(state.price_preview(&SiteFeatures::simplified()), None);
}

#[test]
fn reset_returns_to_empty_first_step() {
    let mut state = details_state();
    state.card_form_open = true;
    state.reset();
    assert_eq!(state, ReservationState::default());
}
