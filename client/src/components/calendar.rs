//! Month calendar for picking a reservation date.

use leptos::prelude::*;

use crate::components::text::{Text, use_language};
use crate::i18n;
use crate::state::calendar::DayCell;
use crate::state::site::Command;
use crate::util::dispatch::SiteHandle;

#[component]
pub fn Calendar() -> impl IntoView {
    let site = expect_context::<SiteHandle>();
    let lang = use_language();
    let features = site.features;
    let grid = Memo::new(move |_| site.state.with(|s| s.calendar.grid(&features)));
    let can_go_prev = move || site.state.with(|s| s.calendar.can_go_prev());

    let nav_button = move |label: i18n::Bilingual, glyph: &'static str, command: Command| {
        let disabled = {
            let command = command.clone();
            move || command == Command::PrevMonth && !can_go_prev()
        };
        view! {
            <button
                class="calendar-nav"
                aria-label=move || label.pick(lang.get())
                disabled=disabled
                on:click=move |_| site.dispatch(command.clone())
            >
                {glyph}
            </button>
        }
    };

    view! {
        <div class="calendar">
            <div class="calendar-header">
                {features
                    .enable_month_navigation
                    .then(|| nav_button(i18n::CALENDAR_PREV, "‹", Command::PrevMonth))}
                <h4 class="calendar-month">
                    {move || grid.with(|g| i18n::month_caption(g.year, g.month, lang.get()))}
                </h4>
                {features
                    .enable_month_navigation
                    .then(|| nav_button(i18n::CALENDAR_NEXT, "›", Command::NextMonth))}
            </div>
            <div class="calendar-weekdays">
                {move || {
                    i18n::weekday_headers(lang.get())
                        .into_iter()
                        .map(|day| view! { <div class="calendar-weekday">{day}</div> })
                        .collect_view()
                }}
            </div>
            <div class="calendar-days">
                {move || {
                    let g = grid.get();
                    let blanks = (0..g.leading_blanks)
                        .map(|_| view! { <div class="calendar-day empty"></div> })
                        .collect_view();
                    let days = g.days.into_iter().map(|cell| day_cell(site, cell)).collect_view();
                    (blanks, days)
                }}
            </div>
            <p class="calendar-hint">
                <Text label=i18n::CALENDAR_HINT/>
            </p>
        </div>
    }
}

fn day_cell(site: SiteHandle, cell: DayCell) -> impl IntoView {
    let date = cell.date;
    view! {
        <div
            class="calendar-day"
            class:available=cell.eligible
            class:disabled=!cell.eligible
            class:selected=cell.selected
            class:scarce=cell.scarce
            data-date=date.to_string()
            on:click=move |_| {
                if cell.eligible {
                    site.dispatch(Command::SelectDate(date));
                }
            }
        >
            <span class="day-number">{date.day()}</span>
            {cell
                .scarce
                .then(|| {
                    view! {
                        <span class="scarcity-badge">
                            <Text label=i18n::SCARCITY_BADGE/>
                        </span>
                    }
                })}
        </div>
    }
}
