//! Three-step reservation wizard: date → guest details → confirmation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Step 1 → 2 is entered only by selecting an eligible calendar date; step
//! 2 → 3 only by a submit that passes validation. `back` returns 2 → 1 and a
//! reset returns to step 1 with an empty draft. The draft is never persisted.
//!
//! TRADE-OFFS
//! ==========
//! When payment is enabled the draft is kept through step 3 and cleared once
//! a payment method completes; otherwise it is cleared as soon as the
//! reservation is accepted.

#[cfg(test)]
#[path = "reservation_test.rs"]
mod reservation_test;

use std::sync::LazyLock;

use regex::Regex;
use time::Date;

use crate::config::SiteFeatures;
use crate::i18n::{self, Bilingual};
use crate::state::payment::{CardDetails, CardErrors};
use crate::state::validation::{FieldError, FieldErrors};

pub const PRICE_PER_PERSON: u32 = 20;
pub const MAX_PARTY_SIZE: u8 = 10;

static JORDAN_MOBILE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^07[0-9]{8}$").expect("static regex"));

/// Exactly one step is shown at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WizardStep {
    #[default]
    SelectDate,
    EnterDetails,
    Confirmed,
}

impl WizardStep {
    /// 1-based step number used in element ids (`reservation-step-N`).
    pub fn number(self) -> u8 {
        match self {
            Self::SelectDate => 1,
            Self::EnterDetails => 2,
            Self::Confirmed => 3,
        }
    }

    /// Whether this step is already behind the wizard at `current`.
    pub fn is_done_at(self, current: WizardStep) -> bool {
        current.number() > self.number()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MealTime {
    Lunch,
    Dinner,
}

impl MealTime {
    pub const ALL: [MealTime; 2] = [MealTime::Lunch, MealTime::Dinner];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "lunch" => Some(Self::Lunch),
            "dinner" => Some(Self::Dinner),
            _ => None,
        }
    }

    pub fn label(self) -> Bilingual {
        match self {
            Self::Lunch => i18n::MEAL_LUNCH,
            Self::Dinner => i18n::MEAL_DINNER,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftField {
    FullName,
    Phone,
    People,
    MealTime,
}

/// Form-bound guest details, kept as the raw strings the inputs hold.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReservationDraft {
    pub full_name: String,
    pub phone: String,
    pub people: String,
    pub meal_time: String,
}

impl ReservationDraft {
    pub fn edit(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::FullName => self.full_name = value,
            DraftField::Phone => self.phone = value,
            DraftField::People => self.people = value,
            DraftField::MealTime => self.meal_time = value,
        }
    }

    pub fn value(&self, field: DraftField) -> &str {
        match field {
            DraftField::FullName => &self.full_name,
            DraftField::Phone => &self.phone,
            DraftField::People => &self.people,
            DraftField::MealTime => &self.meal_time,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReservationError {
    NameRequired,
    NameTooShort,
    PhoneRequired,
    PhoneInvalid,
    PeopleRequired,
    MealTimeRequired,
    DateMissing,
}

/// Fields that can carry a validation message. `Date` has no input of its
/// own; its message is shown above the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReservationField {
    FullName,
    Phone,
    People,
    MealTime,
    Date,
}

impl FieldError for ReservationError {
    type Field = ReservationField;

    fn field(self) -> ReservationField {
        match self {
            Self::NameRequired | Self::NameTooShort => ReservationField::FullName,
            Self::PhoneRequired | Self::PhoneInvalid => ReservationField::Phone,
            Self::PeopleRequired => ReservationField::People,
            Self::MealTimeRequired => ReservationField::MealTime,
            Self::DateMissing => ReservationField::Date,
        }
    }

    fn message(self) -> Bilingual {
        match self {
            Self::NameRequired => i18n::ERR_NAME_REQUIRED,
            Self::NameTooShort => i18n::ERR_NAME_WORDS,
            Self::PhoneRequired => i18n::ERR_PHONE_REQUIRED,
            Self::PhoneInvalid => i18n::ERR_PHONE_FORMAT,
            Self::PeopleRequired => i18n::ERR_PEOPLE,
            Self::MealTimeRequired => i18n::ERR_MEAL_TIME,
            Self::DateMissing => i18n::ERR_DATE,
        }
    }
}

pub type ReservationErrors = FieldErrors<ReservationError>;

/// A validated reservation, acknowledged locally only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reservation {
    pub full_name: String,
    pub phone: String,
    pub people: u8,
    pub meal_time: Option<MealTime>,
    pub date: Date,
}

impl Reservation {
    pub fn total_price(&self) -> u32 {
        u32::from(self.people) * PRICE_PER_PERSON
    }

    /// JSON record written to the console log on acceptance.
    pub fn to_log_record(&self) -> serde_json::Value {
        serde_json::json!({
            "name": self.full_name,
            "phone": self.phone,
            "people": self.people,
            "mealTime": self.meal_time.map(MealTime::as_str),
            "date": self.date.to_string(),
            "total": self.total_price(),
        })
    }
}

/// Whether `name` has at least `min_words` whitespace-separated tokens.
pub fn has_min_words(name: &str, min_words: usize) -> bool {
    name.split_whitespace().count() >= min_words
}

/// Jordanian mobile number: `07` followed by exactly eight digits.
pub fn is_jordanian_mobile(phone: &str) -> bool {
    JORDAN_MOBILE_RE.is_match(phone)
}

/// Party size if `raw` is an integer in 1–10.
pub fn parse_party_size(raw: &str) -> Option<u8> {
    raw.trim().parse::<u8>().ok().filter(|n| (1..=MAX_PARTY_SIZE).contains(n))
}

/// Total for the price preview; `None` hides the panel.
pub fn preview_total(raw_people: &str) -> Option<u32> {
    parse_party_size(raw_people).map(|n| u32::from(n) * PRICE_PER_PERSON)
}

/// Validate `draft` for `date`, running every check.
pub fn validate(
    draft: &ReservationDraft,
    date: Option<Date>,
    features: &SiteFeatures,
) -> Result<Reservation, ReservationErrors> {
    let mut errors = ReservationErrors::default();

    let full_name = draft.full_name.trim();
    if full_name.is_empty() {
        errors.push(ReservationError::NameRequired);
    } else if !has_min_words(full_name, features.name_min_words) {
        errors.push(ReservationError::NameTooShort);
    }

    let phone = draft.phone.trim();
    if phone.is_empty() {
        errors.push(ReservationError::PhoneRequired);
    } else if !is_jordanian_mobile(phone) {
        errors.push(ReservationError::PhoneInvalid);
    }

    let people = parse_party_size(&draft.people);
    if people.is_none() {
        errors.push(ReservationError::PeopleRequired);
    }

    let meal_time = MealTime::parse(&draft.meal_time);
    if features.enable_meal_time && meal_time.is_none() {
        errors.push(ReservationError::MealTimeRequired);
    }

    if date.is_none() {
        errors.push(ReservationError::DateMissing);
    }

    match (people, date) {
        (Some(people), Some(date)) if errors.is_empty() => Ok(Reservation {
            full_name: full_name.to_owned(),
            phone: phone.to_owned(),
            people,
            meal_time: if features.enable_meal_time { meal_time } else { None },
            date,
        }),
        _ => Err(errors),
    }
}

/// Wizard state plus the transient draft and card form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReservationState {
    pub step: WizardStep,
    pub draft: ReservationDraft,
    pub errors: ReservationErrors,
    /// Reservation awaiting payment (payment-enabled sites only).
    pub pending: Option<Reservation>,
    pub card_form_open: bool,
    pub card: CardDetails,
    pub card_errors: CardErrors,
}

impl ReservationState {
    /// Step 1 → 2, after the calendar accepted a selection.
    pub fn date_selected(&mut self) {
        self.step = WizardStep::EnterDetails;
    }

    /// Step 2 → 1. Keeps the draft.
    pub fn back(&mut self) {
        if self.step == WizardStep::EnterDetails {
            self.step = WizardStep::SelectDate;
        }
    }

    /// Show step 1 without touching the draft ("Book now"). From the
    /// confirmation step this starts a new booking: an unpaid reservation
    /// and the card form are dropped.
    pub fn show_calendar(&mut self) {
        if self.step == WizardStep::Confirmed {
            self.pending = None;
            self.card_form_open = false;
            self.card = CardDetails::default();
            self.card_errors = CardErrors::default();
        }
        self.step = WizardStep::SelectDate;
    }

    pub fn edit(&mut self, field: DraftField, value: String) {
        self.draft.edit(field, value);
    }

    /// Validate and, on success, advance to the confirmation step.
    ///
    /// Previous messages are cleared first. Returns the accepted reservation
    /// so the caller can acknowledge it.
    pub fn submit(&mut self, date: Option<Date>, features: &SiteFeatures) -> Option<Reservation> {
        self.errors = ReservationErrors::default();
        if self.step != WizardStep::EnterDetails {
            return None;
        }
        match validate(&self.draft, date, features) {
            Ok(reservation) => {
                self.step = WizardStep::Confirmed;
                if features.enable_payment {
                    self.pending = Some(reservation.clone());
                } else {
                    self.draft = ReservationDraft::default();
                }
                Some(reservation)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    /// Total for the price preview, when enabled and the party size is valid.
    pub fn price_preview(&self, features: &SiteFeatures) -> Option<u32> {
        if !features.enable_price_preview {
            return None;
        }
        preview_total(&self.draft.people)
    }

    /// Full reset back to step 1 with an empty draft.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
