use super::*;

fn valid_card() -> CardDetails {
    CardDetails {
        number: "4111 1111 1111 1111".to_owned(),
        name: "Ali Hassan".to_owned(),
        expiry: "12/27".to_owned(),
        cvv: "123".to_owned(),
    }
}

#[test]
fn payment_method_parses_button_values() {
    for method in PaymentMethod::ALL {
        assert_eq!(PaymentMethod::parse(method.as_str()), Some(method));
    }
    assert_eq!(PaymentMethod::parse("paypal"), None);
}

#[test]
fn card_number_is_grouped_by_four() {
    assert_eq!(format_card_number("4111111111111111"), "4111 1111 1111 1111");
    assert_eq!(format_card_number("4111 11111"), "4111 1111 1");
    assert_eq!(format_card_number(""), "");
}

#[test]
fn expiry_inserts_slash_after_month() {
    assert_eq!(format_expiry("1"), "1");
    assert_eq!(format_expiry("12"), "12/");
    assert_eq!(format_expiry("1227"), "12/27");
    assert_eq!(format_expiry("12/275"), "12/27");
    assert_eq!(format_expiry("ab"), "");
}

#[test]
fn cvv_input_strips_non_digits() {
    let mut card = CardDetails::default();
    card.edit(CardField::Cvv, "1a2-3");
    assert_eq!(card.cvv, "123");
    assert_eq!(card.value(CardField::Cvv), "123");
}

#[test]
fn valid_card_passes() {
    assert_eq!(validate_card(&valid_card()), Ok(()));
}

#[test]
fn short_or_non_digit_card_number_fails() {
    let mut card = valid_card();
    card.number = "4111 1111 1111 111".to_owned();
    let errors = validate_card(&card).unwrap_err();
    assert_eq!(errors.for_field(CardField::Number), Some(CardError::Number));

    card.number = "4111 1111 1111 111x".to_owned();
    assert!(validate_card(&card).is_err());
}

#[test]
fn all_card_failures_reported_together() {
    let errors = validate_card(&CardDetails::default()).unwrap_err();
    assert_eq!(errors.len(), 4);
    assert_eq!(errors.message_for(CardField::Expiry), Some(i18n::ERR_CARD_EXPIRY));
    assert_eq!(errors.message_for(CardField::Cvv), Some(i18n::ERR_CARD_CVV));
}

#[test]
fn expiry_must_match_mm_yy() {
    let mut card = valid_card();
    card.expiry = "1/27".to_owned();
    let errors = validate_card(&card).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.for_field(CardField::Expiry), Some(CardError::Expiry));
}

#[test]
fn cvv_must_be_exactly_three_digits() {
    let mut card = valid_card();
    card.cvv = "1234".to_owned();
    assert!(validate_card(&card).is_err());
    card.cvv = "12".to_owned();
    assert!(validate_card(&card).is_err());
}

#[test]
fn blank_cardholder_name_fails() {
    let mut card = valid_card();
    card.name = "   ".to_owned();
    let errors = validate_card(&card).unwrap_err();
    assert_eq!(errors.for_field(CardField::Name), Some(CardError::Name));
}
