//! Application state and command dispatch.
//!
//! SYSTEM CONTEXT
//! ==============
//! One [`SiteState`] value lives in an `RwSignal` provided through context.
//! Components turn user actions into [`Command`]s; [`SiteState::dispatch`]
//! applies them synchronously and returns the browser work to perform as
//! [`SideEffect`]s, which `util::dispatch` executes. Keeping the reducer free
//! of DOM access is what makes the whole flow testable natively.

#[cfg(test)]
#[path = "site_test.rs"]
mod site_test;

use time::Date;

use crate::config::SiteFeatures;
use crate::i18n::{self, Language};
use crate::state::calendar::CalendarState;
use crate::state::faq::FaqState;
use crate::state::payment::{CardErrors, CardField, PaymentMethod, validate_card};
use crate::state::prefs::Preferences;
use crate::state::reservation::{DraftField, Reservation, ReservationState, WizardStep};
use crate::state::theme::Theme;
use crate::state::ui::UiState;

/// One user action or browser notification.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Preferences read from storage after hydration.
    RestorePreferences(Preferences),
    CycleTheme,
    SelectTheme(Theme),
    SetLanguage(Language),
    PrevMonth,
    NextMonth,
    SelectDate(Date),
    StartReservation,
    EditDraft(DraftField, String),
    SubmitReservation,
    BackToCalendar,
    ChoosePayment(PaymentMethod),
    EditCard(CardField, String),
    SubmitCard,
    CancelCard,
    ResetReservation,
    ToggleFaqItem(usize),
    ToggleFaqList,
    ToggleMobileMenu,
    CloseMobileMenu,
    PageScrolled(f64),
    CopySucceeded,
    CopyFailed(String),
    CopyRevertDue(u64),
}

/// Browser work requested by a dispatched command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SideEffect {
    /// Set `data-theme` on `<html>`.
    ApplyTheme(Theme),
    /// Set `dir` and `lang` on `<html>`.
    ApplyLanguage(Language),
    PersistPreferences(Preferences),
    ResetCarousel,
    ScrollToReservation,
    /// Blocking acknowledgement shown to the visitor.
    Notice(&'static str),
    LogReservation(Reservation),
    LogError(String),
    ScheduleCopyRevert { seq: u64 },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteState {
    pub prefs: Preferences,
    pub calendar: CalendarState,
    pub reservation: ReservationState,
    pub faq: FaqState,
    pub ui: UiState,
}

impl SiteState {
    pub fn new(prefs: Preferences, features: &SiteFeatures) -> Self {
        Self {
            prefs,
            calendar: CalendarState::default(),
            reservation: ReservationState::default(),
            faq: FaqState::new(features.enable_faq_list_toggle),
            ui: UiState::default(),
        }
    }

    pub fn language(&self) -> Language {
        self.prefs.language
    }

    /// Effects that bring the document in line with the loaded preferences.
    pub fn startup_effects(&self) -> Vec<SideEffect> {
        vec![SideEffect::ApplyTheme(self.prefs.theme), SideEffect::ApplyLanguage(self.prefs.language)]
    }

    /// Apply `command` and return the browser work it requires.
    pub fn dispatch(&mut self, command: Command, features: &SiteFeatures) -> Vec<SideEffect> {
        let lang = self.prefs.language;
        match command {
            Command::RestorePreferences(prefs) => {
                self.prefs = prefs;
                self.startup_effects()
            }
            Command::CycleTheme => self.set_theme(self.prefs.theme.next()),
            Command::SelectTheme(theme) => self.set_theme(theme),
            Command::SetLanguage(language) => {
                self.prefs.language = language;
                self.faq.collapse();
                vec![
                    SideEffect::ApplyLanguage(language),
                    SideEffect::PersistPreferences(self.prefs),
                    SideEffect::ResetCarousel,
                ]
            }
            Command::PrevMonth => {
                if features.enable_month_navigation {
                    self.calendar.prev_month();
                }
                Vec::new()
            }
            Command::NextMonth => {
                if features.enable_month_navigation {
                    self.calendar.next_month();
                }
                Vec::new()
            }
            Command::SelectDate(date) => {
                if self.reservation.step == WizardStep::SelectDate && self.calendar.select(date) {
                    self.reservation.date_selected();
                }
                Vec::new()
            }
            Command::StartReservation => {
                self.reservation.show_calendar();
                vec![SideEffect::ScrollToReservation]
            }
            Command::EditDraft(field, value) => {
                self.reservation.edit(field, value);
                Vec::new()
            }
            Command::SubmitReservation => match self.reservation.submit(self.calendar.selected, features) {
                Some(reservation) => {
                    if !features.enable_payment {
                        self.calendar.clear_selection();
                    }
                    vec![SideEffect::LogReservation(reservation)]
                }
                None => Vec::new(),
            },
            Command::BackToCalendar => {
                self.reservation.back();
                Vec::new()
            }
            Command::ChoosePayment(method) => self.choose_payment(method, lang, features),
            Command::EditCard(field, value) => {
                self.reservation.card.edit(field, &value);
                Vec::new()
            }
            Command::SubmitCard => self.submit_card(lang),
            Command::CancelCard => {
                self.reservation.card_form_open = false;
                Vec::new()
            }
            Command::ResetReservation => {
                self.reset_booking();
                Vec::new()
            }
            Command::ToggleFaqItem(index) => {
                if self.faq.list_open {
                    self.faq.toggle_item(index);
                }
                Vec::new()
            }
            Command::ToggleFaqList => {
                if features.enable_faq_list_toggle {
                    self.faq.toggle_list();
                }
                Vec::new()
            }
            Command::ToggleMobileMenu => {
                self.ui.toggle_mobile_menu();
                Vec::new()
            }
            Command::CloseMobileMenu => {
                self.ui.close_mobile_menu();
                Vec::new()
            }
            Command::PageScrolled(y) => {
                self.ui.page_scrolled(y);
                Vec::new()
            }
            Command::CopySucceeded => {
                let seq = self.ui.copy_succeeded();
                vec![SideEffect::ScheduleCopyRevert { seq }]
            }
            Command::CopyFailed(reason) => vec![
                SideEffect::LogError(format!("Failed to copy: {reason}")),
                SideEffect::Notice(i18n::COPY_FAILED.pick(lang)),
            ],
            Command::CopyRevertDue(seq) => {
                self.ui.copy_revert_due(seq);
                Vec::new()
            }
        }
    }

    fn set_theme(&mut self, theme: Theme) -> Vec<SideEffect> {
        self.prefs.theme = theme;
        vec![SideEffect::ApplyTheme(theme), SideEffect::PersistPreferences(self.prefs)]
    }

    fn choose_payment(&mut self, method: PaymentMethod, lang: Language, features: &SiteFeatures) -> Vec<SideEffect> {
        if !features.enable_payment || self.reservation.step != WizardStep::Confirmed {
            return Vec::new();
        }
        match method {
            PaymentMethod::Card => {
                self.reservation.card_form_open = true;
                Vec::new()
            }
            PaymentMethod::Cliq => {
                self.reset_booking();
                vec![SideEffect::Notice(i18n::NOTICE_CLIQ.pick(lang))]
            }
            PaymentMethod::Arrival => {
                self.reset_booking();
                vec![SideEffect::Notice(i18n::NOTICE_ARRIVAL.pick(lang))]
            }
        }
    }

    fn submit_card(&mut self, lang: Language) -> Vec<SideEffect> {
        self.reservation.card_errors = CardErrors::default();
        if !self.reservation.card_form_open {
            return Vec::new();
        }
        match validate_card(&self.reservation.card) {
            Ok(()) => {
                self.reset_booking();
                vec![SideEffect::Notice(i18n::NOTICE_CARD_SUCCESS.pick(lang))]
            }
            Err(errors) => {
                self.reservation.card_errors = errors;
                Vec::new()
            }
        }
    }

    fn reset_booking(&mut self) {
        self.reservation.reset();
        self.calendar.clear_selection();
    }
}
