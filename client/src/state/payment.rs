//! Payment method selection and the simulated card form.
//!
//! No payment is processed anywhere. A valid card form, the cliQ redirect
//! stub and pay-on-arrival all end in a local acknowledgement.

#[cfg(test)]
#[path = "payment_test.rs"]
mod payment_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::i18n::{self, Bilingual};
use crate::state::validation::{FieldError, FieldErrors};

pub const MIN_CARD_DIGITS: usize = 16;
pub const CVV_DIGITS: usize = 3;

static EXPIRY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{2}/[0-9]{2}$").expect("static regex"));

/// The three mutually exclusive payment choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaymentMethod {
    Card,
    Cliq,
    Arrival,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [PaymentMethod::Card, PaymentMethod::Cliq, PaymentMethod::Arrival];

    /// Value of the button's `data-payment` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Card => "credit-card",
            Self::Cliq => "cliq",
            Self::Arrival => "arrival",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "credit-card" => Some(Self::Card),
            "cliq" => Some(Self::Cliq),
            "arrival" => Some(Self::Arrival),
            _ => None,
        }
    }

    pub fn label(self) -> Bilingual {
        match self {
            Self::Card => i18n::PAY_CARD,
            Self::Cliq => i18n::PAY_CLIQ,
            Self::Arrival => i18n::PAY_ARRIVAL,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardField {
    Number,
    Name,
    Expiry,
    Cvv,
}

/// Raw card form input, already normalized by the `format_*` helpers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardDetails {
    pub number: String,
    pub name: String,
    pub expiry: String,
    pub cvv: String,
}

impl CardDetails {
    /// Store `raw` into `field`, applying the as-you-type formatting.
    pub fn edit(&mut self, field: CardField, raw: &str) {
        match field {
            CardField::Number => self.number = format_card_number(raw),
            CardField::Name => self.name = raw.to_owned(),
            CardField::Expiry => self.expiry = format_expiry(raw),
            CardField::Cvv => self.cvv = strip_non_digits(raw),
        }
    }

    pub fn value(&self, field: CardField) -> &str {
        match field {
            CardField::Number => &self.number,
            CardField::Name => &self.name,
            CardField::Expiry => &self.expiry,
            CardField::Cvv => &self.cvv,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardError {
    Number,
    Name,
    Expiry,
    Cvv,
}

impl FieldError for CardError {
    type Field = CardField;

    fn field(self) -> CardField {
        match self {
            Self::Number => CardField::Number,
            Self::Name => CardField::Name,
            Self::Expiry => CardField::Expiry,
            Self::Cvv => CardField::Cvv,
        }
    }

    fn message(self) -> Bilingual {
        match self {
            Self::Number => i18n::ERR_CARD_NUMBER,
            Self::Name => i18n::ERR_CARD_NAME,
            Self::Expiry => i18n::ERR_CARD_EXPIRY,
            Self::Cvv => i18n::ERR_CARD_CVV,
        }
    }
}

pub type CardErrors = FieldErrors<CardError>;

pub fn strip_non_digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Drop whitespace and regroup into blocks of four: `"4111111111111111"` →
/// `"4111 1111 1111 1111"`.
pub fn format_card_number(raw: &str) -> String {
    let compact: Vec<char> = raw.chars().filter(|c| !c.is_whitespace()).collect();
    compact
        .chunks(4)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Keep digits and insert `/` after the month: `"1227"` → `"12/27"`.
pub fn format_expiry(raw: &str) -> String {
    let digits = strip_non_digits(raw);
    if digits.len() < 2 {
        return digits;
    }
    let (month, rest) = digits.split_at(2);
    let year: String = rest.chars().take(2).collect();
    format!("{month}/{year}")
}

/// Validate the card form, collecting one error per failing field.
pub fn validate_card(card: &CardDetails) -> Result<(), CardErrors> {
    let mut errors = CardErrors::default();

    let number: String = card.number.chars().filter(|c| !c.is_whitespace()).collect();
    if number.len() < MIN_CARD_DIGITS || !number.chars().all(|c| c.is_ascii_digit()) {
        errors.push(CardError::Number);
    }
    if card.name.trim().is_empty() {
        errors.push(CardError::Name);
    }
    if !EXPIRY_RE.is_match(&card.expiry) {
        errors.push(CardError::Expiry);
    }
    if card.cvv.len() != CVV_DIGITS || !card.cvv.chars().all(|c| c.is_ascii_digit()) {
        errors.push(CardError::Cvv);
    }

    errors.into_result(())
}
