//! Reservation calendar: month grid construction and date eligibility.
//!
//! SYSTEM CONTEXT
//! ==============
//! The grid is rebuilt in full on every render trigger (load, language
//! switch, month navigation, selection). It is small, so no incremental
//! patching is attempted.
//!
//! ELIGIBILITY
//! ===========
//! A date is bookable iff it is a Thursday, Friday or Saturday on or after
//! 2026-01-20. The rule is a fixed business rule, not configuration.

#[cfg(test)]
#[path = "calendar_test.rs"]
mod calendar_test;

use time::macros::date;
use time::{Date, Month, Weekday};

use crate::config::SiteFeatures;

/// First date that can be booked.
pub const FIRST_BOOKABLE: Date = date!(2026 - 01 - 20);
/// Last date that carries the "almost sold out" badge.
pub const SCARCITY_UNTIL: Date = date!(2026 - 01 - 27);
/// Earliest month the calendar can display.
pub const FLOOR_YEAR: i32 = 2026;
pub const FLOOR_MONTH: Month = Month::January;

/// Whether `date` can be selected for a reservation.
pub fn is_eligible(date: Date) -> bool {
    date >= FIRST_BOOKABLE && matches!(date.weekday(), Weekday::Thursday | Weekday::Friday | Weekday::Saturday)
}

/// Whether an eligible `date` is annotated as nearly full. Informational only.
pub fn is_scarce(date: Date) -> bool {
    is_eligible(date) && date <= SCARCITY_UNTIL && matches!(date.weekday(), Weekday::Thursday | Weekday::Friday)
}

/// One rendered day cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DayCell {
    pub date: Date,
    pub eligible: bool,
    pub scarce: bool,
    pub selected: bool,
}

/// A month laid out for a Sunday-first grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: Month,
    /// Blank cells before day 1 (0 = month starts on Sunday).
    pub leading_blanks: u8,
    pub days: Vec<DayCell>,
}

impl MonthGrid {
    pub fn selected_count(&self) -> usize {
        self.days.iter().filter(|d| d.selected).count()
    }
}

/// Displayed month and current selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CalendarState {
    pub year: i32,
    pub month: Month,
    pub selected: Option<Date>,
}

impl Default for CalendarState {
    fn default() -> Self {
        Self { year: FLOOR_YEAR, month: FLOOR_MONTH, selected: None }
    }
}

impl CalendarState {
    pub fn at_floor(&self) -> bool {
        self.year < FLOOR_YEAR || (self.year == FLOOR_YEAR && self.month == FLOOR_MONTH)
    }

    /// Whether the "previous" control is enabled.
    pub fn can_go_prev(&self) -> bool {
        !self.at_floor()
    }

    /// Step back one month. No-op at January 2026.
    pub fn prev_month(&mut self) -> bool {
        if self.at_floor() {
            return false;
        }
        if self.month == Month::January {
            self.year -= 1;
        }
        self.month = self.month.previous();
        true
    }

    /// Step forward one month. There is no upper bound.
    pub fn next_month(&mut self) {
        if self.month == Month::December {
            self.year += 1;
        }
        self.month = self.month.next();
    }

    /// Select `date` if it is eligible. Returns whether the selection changed
    /// or was confirmed.
    pub fn select(&mut self, date: Date) -> bool {
        if !is_eligible(date) {
            return false;
        }
        self.selected = Some(date);
        true
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Build the grid for the displayed month.
    ///
    /// Out-of-range years (beyond what `time` can represent) yield an empty
    /// grid rather than panicking.
    pub fn grid(&self, features: &SiteFeatures) -> MonthGrid {
        let mut grid = MonthGrid { year: self.year, month: self.month, leading_blanks: 0, days: Vec::new() };
        let Ok(first) = Date::from_calendar_date(self.year, self.month, 1) else {
            return grid;
        };
        grid.leading_blanks = first.weekday().number_days_from_sunday();
        let count = usize::from(self.month.length(self.year));
        grid.days = std::iter::successors(Some(first), |d| d.next_day())
            .take(count)
            .map(|date| DayCell {
                date,
                eligible: is_eligible(date),
                scarce: features.enable_scarcity_badge && is_scarce(date),
                selected: self.selected == Some(date),
            })
            .collect();
        grid
    }
}
