//! Command dispatch and side-effect execution.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components hold a [`SiteHandle`] from context and call
//! [`SiteHandle::dispatch`]. The reducer runs inside the signal update; the
//! returned [`SideEffect`]s run afterwards, outside the borrow, since some
//! of them (the copy-revert timer) dispatch again later.

#[cfg(test)]
#[path = "dispatch_test.rs"]
mod dispatch_test;

use leptos::prelude::*;

use crate::config::SiteFeatures;
use crate::state::site::{Command, SideEffect, SiteState};
use crate::util::{dom, preferences};

/// Shared handle to the site state and the active variant's features.
#[derive(Clone, Copy)]
pub struct SiteHandle {
    pub state: RwSignal<SiteState>,
    pub features: SiteFeatures,
}

impl SiteHandle {
    pub fn new(state: SiteState, features: SiteFeatures) -> Self {
        Self { state: RwSignal::new(state), features }
    }

    pub fn dispatch(self, command: Command) {
        let features = self.features;
        let effects = self
            .state
            .try_update(|s| s.dispatch(command, &features))
            .unwrap_or_default();
        self.run(effects);
    }

    /// Execute browser work requested by the reducer.
    pub fn run(self, effects: Vec<SideEffect>) {
        for effect in effects {
            match effect {
                SideEffect::ApplyTheme(theme) => preferences::apply_theme(theme),
                SideEffect::ApplyLanguage(lang) => preferences::apply_language(lang),
                SideEffect::PersistPreferences(prefs) => preferences::save(prefs),
                SideEffect::ResetCarousel => dom::reset_scroll_left(dom::REVIEWS_CONTAINER_ID),
                SideEffect::ScrollToReservation => dom::scroll_to_id(dom::RESERVATION_SECTION_ID),
                SideEffect::Notice(message) => dom::notice(message),
                SideEffect::LogReservation(reservation) => {
                    leptos::logging::log!("Reservation submitted: {}", reservation.to_log_record());
                }
                SideEffect::LogError(message) => leptos::logging::error!("{message}"),
                SideEffect::ScheduleCopyRevert { seq } => self.schedule_copy_revert(seq),
            }
        }
    }

    fn schedule_copy_revert(self, seq: u64) {
        #[cfg(feature = "hydrate")]
        {
            gloo_timers::callback::Timeout::new(crate::state::ui::COPY_FEEDBACK_MS, move || {
                self.dispatch(Command::CopyRevertDue(seq));
            })
            .forget();
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = seq;
        }
    }
}
