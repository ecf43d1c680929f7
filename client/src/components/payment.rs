//! Payment method buttons and the card form shown after confirmation.

use leptos::prelude::*;

use crate::components::text::{Text, use_language};
use crate::i18n::{self, Bilingual};
use crate::state::payment::{CardField, PaymentMethod};
use crate::state::site::Command;
use crate::util::dispatch::SiteHandle;

#[component]
pub fn PaymentPanel() -> impl IntoView {
    let site = expect_context::<SiteHandle>();
    let form_open = move || site.state.with(|s| s.reservation.card_form_open);
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        site.dispatch(Command::SubmitCard);
    };

    view! {
        <div class="payment-options">
            <h4>
                <Text label=i18n::PAYMENT_TITLE/>
            </h4>
            <div class="payment-methods">
                {PaymentMethod::ALL
                    .into_iter()
                    .map(|method| {
                        view! {
                            <button
                                type="button"
                                class="payment-btn"
                                data-payment=method.as_str()
                                on:click=move |_| site.dispatch(Command::ChoosePayment(method))
                            >
                                <Text label=method.label()/>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <Show when=form_open>
                <form class="credit-card-form" novalidate=true on:submit=on_submit>
                    <CardInput field=CardField::Number label=i18n::CARD_NUMBER_LABEL placeholder="1234 5678 9012 3456"/>
                    <CardInput field=CardField::Name label=i18n::CARD_NAME_LABEL placeholder=""/>
                    <div class="form-row">
                        <CardInput field=CardField::Expiry label=i18n::CARD_EXPIRY_LABEL placeholder="MM/YY"/>
                        <CardInput field=CardField::Cvv label=i18n::CARD_CVV_LABEL placeholder="123"/>
                    </div>
                    <div class="form-actions">
                        <button type="button" class="btn btn-secondary" on:click=move |_| site.dispatch(Command::CancelCard)>
                            <Text label=i18n::CARD_CANCEL/>
                        </button>
                        <button type="submit" class="btn btn-primary">
                            <Text label=i18n::CARD_PAY/>
                        </button>
                    </div>
                </form>
            </Show>
        </div>
    }
}

fn card_field_id(field: CardField) -> &'static str {
    match field {
        CardField::Number => "card-number",
        CardField::Name => "card-name",
        CardField::Expiry => "card-expiry",
        CardField::Cvv => "card-cvv",
    }
}

/// One card input. Formatting is applied by the state on every edit, and
/// the input mirrors the formatted value back.
#[component]
fn CardInput(field: CardField, label: Bilingual, placeholder: &'static str) -> impl IntoView {
    let site = expect_context::<SiteHandle>();
    let lang = use_language();
    let id = card_field_id(field);
    let value = move || site.state.with(|s| s.reservation.card.value(field).to_owned());
    let error = move || {
        site.state
            .with(|s| s.reservation.card_errors.message_for(field))
            .map(|m| m.pick(lang.get()))
    };

    view! {
        <div class="form-group" class:has-error=move || error().is_some()>
            <label for=id>
                <Text label=label/>
            </label>
            <input
                id=id
                name=id
                type="text"
                inputmode=if field == CardField::Name { "text" } else { "numeric" }
                placeholder=placeholder
                prop:value=value
                on:input=move |ev| site.dispatch(Command::EditCard(field, event_target_value(&ev)))
            />
            <span class="error-message">{move || error().unwrap_or_default()}</span>
        </div>
    }
}
