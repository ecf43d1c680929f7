//! Three-step reservation wizard: date, details, confirmation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Exactly one step panel is visible at a time, driven by
//! `ReservationState::step`. Field values live in the site state, so going
//! back to the calendar and forward again keeps what was typed.

use leptos::prelude::*;

use crate::components::calendar::Calendar;
use crate::components::payment::PaymentPanel;
use crate::components::text::{Text, use_language};
use crate::i18n::{self, Bilingual};
use crate::state::reservation::{DraftField, MealTime, ReservationField, WizardStep};
use crate::state::site::Command;
use crate::util::dispatch::SiteHandle;
use crate::util::dom;

const STEPS: [WizardStep; 3] = [WizardStep::SelectDate, WizardStep::EnterDetails, WizardStep::Confirmed];

#[component]
pub fn ReservationSection() -> impl IntoView {
    let site = expect_context::<SiteHandle>();
    let step = Memo::new(move |_| site.state.with(|s| s.reservation.step));

    view! {
        <section id=dom::RESERVATION_SECTION_ID class="reservation">
            <div class="container">
                <h2 class="section-title">
                    <Text label=i18n::RESERVATION_TITLE/>
                </h2>
                <div class="reservation-steps">
                    {STEPS
                        .into_iter()
                        .map(|s| {
                            view! {
                                <span
                                    class="step-indicator"
                                    class:active={move || step.get() == s}
                                    class:done={move || s.is_done_at(step.get())}
                                >
                                    {s.number()}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <Show when=move || step.get() == WizardStep::SelectDate>
                    <div class="reservation-step" data-step="1">
                        <h3>
                            <Text label=i18n::STEP_DATE_TITLE/>
                        </h3>
                        <Calendar/>
                    </div>
                </Show>
                <Show when=move || step.get() == WizardStep::EnterDetails>
                    <DetailsForm/>
                </Show>
                <Show when=move || step.get() == WizardStep::Confirmed>
                    <Confirmation/>
                </Show>
            </div>
        </section>
    }
}

#[component]
fn DetailsForm() -> impl IntoView {
    let site = expect_context::<SiteHandle>();
    let lang = use_language();
    let features = site.features;

    let selected_date = move || {
        site.state
            .with(|s| s.calendar.selected)
            .map(|d| i18n::format_long_date(d, lang.get()))
            .unwrap_or_default()
    };
    let date_error = move || {
        site.state
            .with(|s| s.reservation.errors.message_for(ReservationField::Date))
            .map(|m| m.pick(lang.get()))
    };
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        site.dispatch(Command::SubmitReservation);
    };

    view! {
        <div class="reservation-step" data-step="2">
            <h3>
                <Text label=i18n::STEP_DETAILS_TITLE/>
            </h3>
            <p class="selected-date-display">
                <Text label=i18n::SELECTED_DATE_LABEL/>
                " "
                <strong>{selected_date}</strong>
            </p>
            {move || date_error().map(|message| view! { <p class="error-message form-error">{message}</p> })}
            <form class="reservation-form" novalidate=true on:submit=on_submit>
                <DraftInput
                    field=DraftField::FullName
                    error_field=ReservationField::FullName
                    label=i18n::FULL_NAME_LABEL
                    placeholder=i18n::FULL_NAME_PLACEHOLDER
                    input_type="text"
                />
                <DraftInput
                    field=DraftField::Phone
                    error_field=ReservationField::Phone
                    label=i18n::PHONE_LABEL
                    placeholder=i18n::PHONE_PLACEHOLDER
                    input_type="tel"
                />
                <DraftInput
                    field=DraftField::People
                    error_field=ReservationField::People
                    label=i18n::PEOPLE_LABEL
                    placeholder=i18n::PEOPLE_PLACEHOLDER
                    input_type="number"
                />
                {features.enable_meal_time.then(|| view! { <MealTimeSelect/> })}
                {features.enable_price_preview.then(|| view! { <PricePreview/> })}
                <p class="capacity-note">
                    <Text label=i18n::CAPACITY_NOTE/>
                </p>
                <div class="form-actions">
                    <button
                        type="button"
                        class="btn btn-secondary"
                        on:click=move |_| site.dispatch(Command::BackToCalendar)
                    >
                        <Text label=i18n::BACK_TO_CALENDAR/>
                    </button>
                    <button type="submit" class="btn btn-primary">
                        <Text label=i18n::SUBMIT_RESERVATION/>
                    </button>
                </div>
            </form>
        </div>
    }
}

fn field_id(field: DraftField) -> &'static str {
    match field {
        DraftField::FullName => "full-name",
        DraftField::Phone => "phone",
        DraftField::People => "people",
        DraftField::MealTime => "meal-time",
    }
}

/// Message for `field` in the active language, if it failed validation.
fn error_text(site: SiteHandle, field: ReservationField, lang: Memo<i18n::Language>) -> Option<&'static str> {
    site.state
        .with(|s| s.reservation.errors.message_for(field))
        .map(|m| m.pick(lang.get()))
}

#[component]
fn DraftInput(
    field: DraftField,
    error_field: ReservationField,
    label: Bilingual,
    placeholder: Bilingual,
    input_type: &'static str,
) -> impl IntoView {
    let site = expect_context::<SiteHandle>();
    let lang = use_language();
    let id = field_id(field);
    let value = move || site.state.with(|s| s.reservation.draft.value(field).to_owned());
    let error = move || error_text(site, error_field, lang);

    view! {
        <div class="form-group" class:has-error=move || error().is_some()>
            <label for=id>
                <Text label=label/>
            </label>
            <input
                id=id
                name=id
                type=input_type
                placeholder=move || placeholder.pick(lang.get())
                prop:value=value
                on:input=move |ev| site.dispatch(Command::EditDraft(field, event_target_value(&ev)))
            />
            <span class="error-message">{move || error().unwrap_or_default()}</span>
        </div>
    }
}

#[component]
fn MealTimeSelect() -> impl IntoView {
    let site = expect_context::<SiteHandle>();
    let lang = use_language();
    let id = field_id(DraftField::MealTime);
    let value = move || site.state.with(|s| s.reservation.draft.meal_time.clone());
    let error = move || error_text(site, ReservationField::MealTime, lang);

    view! {
        <div class="form-group" class:has-error=move || error().is_some()>
            <label for=id>
                <Text label=i18n::MEAL_TIME_LABEL/>
            </label>
            <select
                id=id
                name=id
                prop:value=value
                on:change=move |ev| {
                    site.dispatch(Command::EditDraft(DraftField::MealTime, event_target_value(&ev)));
                }
            >
                <option value="">{move || i18n::MEAL_TIME_PROMPT.pick(lang.get())}</option>
                {MealTime::ALL
                    .into_iter()
                    .map(|meal| {
                        view! { <option value=meal.as_str()>{move || meal.label().pick(lang.get())}</option> }
                    })
                    .collect_view()}
            </select>
            <span class="error-message">{move || error().unwrap_or_default()}</span>
        </div>
    }
}

/// Running total, shown only while the party size is a valid 1 to 10.
#[component]
fn PricePreview() -> impl IntoView {
    let site = expect_context::<SiteHandle>();
    let lang = use_language();
    let features = site.features;
    let total = move || site.state.with(|s| s.reservation.price_preview(&features));

    view! {
        <Show when=move || total().is_some()>
            <div class="price-display">
                <p class="price-per-person">
                    <Text label=i18n::PRICE_PER_PERSON/>
                </p>
                <p class="total-price">
                    {move || total().map(|t| i18n::format_total_price(t, lang.get())).unwrap_or_default()}
                </p>
            </div>
        </Show>
    }
}

#[component]
fn Confirmation() -> impl IntoView {
    let site = expect_context::<SiteHandle>();

    view! {
        <div class="reservation-step" data-step="3">
            <div class="success-icon">"✓"</div>
            <h3>
                <Text label=i18n::STEP_CONFIRM_TITLE/>
            </h3>
            <p class="success-message">
                <Text label=i18n::CONFIRMED_TEXT/>
            </p>
            <PendingSummary/>
            {if site.features.enable_payment {
                view! { <PaymentPanel/> }.into_any()
            } else {
                view! {
                    <button class="btn btn-primary" on:click=move |_| site.dispatch(Command::ResetReservation)>
                        <Text label=i18n::NEW_RESERVATION/>
                    </button>
                }
                .into_any()
            }}
        </div>
    }
}

/// Date, party size and total of the reservation awaiting payment.
#[component]
fn PendingSummary() -> impl IntoView {
    let site = expect_context::<SiteHandle>();
    let lang = use_language();
    let pending = move || site.state.with(|s| s.reservation.pending.clone());

    move || {
        pending().map(|reservation| {
            let (date, people, total) = (reservation.date, reservation.people, reservation.total_price());
            view! {
                <div class="reservation-summary">
                    <p>
                        <Text label=i18n::SELECTED_DATE_LABEL/>
                        " "
                        <strong>{move || i18n::format_long_date(date, lang.get())}</strong>
                    </p>
                    <p>
                        <Text label=i18n::PEOPLE_LABEL/>
                        ": "
                        <strong>{people}</strong>
                    </p>
                    <p class="total-price">
                        {move || i18n::format_total_price(total, lang.get())}
                    </p>
                </div>
            }
        })
    }
}
