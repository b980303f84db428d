//! Checkout page: cart summary, contact form and order notification.
//!
//! DATA FLOW
//! =========
//! The form is validated locally, then the current cart and contact fields
//! are posted as a `CheckoutNotice`. The cart is cleared only after the
//! server confirms the notification went out.

#[cfg(test)]
#[path = "checkout_test.rs"]
mod checkout_test;

use cart::CheckoutNotice;
use leptos::prelude::*;

use crate::state::cart::use_cart;

const MISSING_CONTACT: &str = "Ingresa tu nombre y tu celular.";
const EMPTY_CART: &str = "Tu carrito está vacío.";
const SENDING: &str = "Enviando pedido...";
const CONFIRMED: &str = "¡Pedido recibido! Te contactaremos por WhatsApp.";

/// Trimmed contact fields ready for a notice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Contact {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Name and phone are required; email may be blank.
pub(crate) fn validate_contact(
    name: &str,
    email: &str,
    phone: &str,
) -> Result<Contact, &'static str> {
    let name = name.trim();
    let phone = phone.trim();
    if name.is_empty() || phone.is_empty() {
        return Err(MISSING_CONTACT);
    }
    Ok(Contact {
        name: name.to_owned(),
        email: email.trim().to_owned(),
        phone: phone.to_owned(),
    })
}

/// Build the notice for the current cart, refusing an empty one.
pub(crate) fn build_notice(
    contact: &Contact,
    items: &[cart::CartItem],
) -> Result<CheckoutNotice, &'static str> {
    if items.is_empty() {
        return Err(EMPTY_CART);
    }
    let notice = CheckoutNotice::from_cart(&contact.name, &contact.email, &contact.phone, items);
    Ok(notice)
}

pub(crate) fn failure_message(err: &str) -> String {
    format!("No pudimos enviar tu pedido: {err}")
}

#[component]
pub fn CheckoutPage() -> impl IntoView {
    let cart = use_cart();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let done = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let notice = validate_contact(&name.get(), &email.get(), &phone.get())
            .and_then(|contact| build_notice(&contact, &cart.items()));
        let notice = match notice {
            Ok(notice) => notice,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(SENDING.to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::notify_checkout(&notice).await {
                Ok(()) => {
                    log::info!("order notified for {}", notice.customer());
                    cart.clear();
                    done.set(true);
                    info.set(CONFIRMED.to_owned());
                }
                Err(e) => {
                    log::warn!("checkout notify failed: {e}");
                    info.set(failure_message(&e));
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            log::debug!(
                "checkout submit ignored outside the browser: {}",
                notice.customer()
            );
            busy.set(false);
        }
    };

    let view_state = cart.view;

    view! {
        <main class="checkout-page">
            <h1>"Finalizar compra"</h1>
            <section class="checkout-summary">
                <ul class="checkout-summary__items">
                    {move || {
                        view_state
                            .with(|v| v.lines.clone())
                            .into_iter()
                            .map(|line| {
                                view! {
                                    <li class="checkout-summary__item">
                                        <span>{line.name}</span>
                                        <span>{line.price_label}</span>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
                <p class="checkout-summary__total">
                    {move || view_state.with(|v| v.total_label.clone())}
                </p>
            </section>
            <Show
                when=move || !done.get()
                fallback=|| view! { <a class="btn" href="/">"Seguir comprando"</a> }
            >
                <form class="checkout-form" on:submit=on_submit>
                    <input
                        id="checkoutName"
                        class="checkout-input"
                        type="text"
                        placeholder="Nombre"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <input
                        id="checkoutEmail"
                        class="checkout-input"
                        type="email"
                        placeholder="Correo"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        id="checkoutPhone"
                        class="checkout-input"
                        type="tel"
                        placeholder="Celular"
                        prop:value=move || phone.get()
                        on:input=move |ev| phone.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Confirmar pedido"
                    </button>
                </form>
            </Show>
            <Show when=move || !info.get().is_empty()>
                <p class="checkout-message">{move || info.get()}</p>
            </Show>
        </main>
    }
}
