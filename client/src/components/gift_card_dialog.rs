//! Gift-card offer button and the value dialog it opens.
//!
//! The dialog validates the typed value with `cart::GiftCard`; an invalid
//! value keeps the dialog open and alerts the customer, a valid one goes into
//! the cart and closes the dialog.

#[cfg(test)]
#[path = "gift_card_dialog_test.rs"]
mod gift_card_dialog_test;

use cart::GiftCard;
use cart::gift::ADDED_MESSAGE;
use leptos::prelude::*;

use crate::state::cart::use_cart;
use crate::util::dialog::alert;

/// Offer card with the button that opens [`GiftCardDialog`].
#[component]
pub fn GiftCardOffer() -> impl IntoView {
    let open = RwSignal::new(false);

    view! {
        <article class="product-card product-card--gift">
            <div class="product-card__img" style="background-image: url(./imgs/gift.png)"></div>
            <h3 class="product-card__name">"Tarjeta de Regalo"</h3>
            <p class="product-card__desc">"Tú eliges el valor, desde $10.000 COP."</p>
            <button id="giftBuyBtn" class="btn btn--primary" on:click=move |_| open.set(true)>
                "Comprar"
            </button>
        </article>
        <Show when=move || open.get()>
            <GiftCardDialog open=open />
        </Show>
    }
}

/// Modal asking for the gift-card value.
#[component]
pub fn GiftCardDialog(open: RwSignal<bool>) -> impl IntoView {
    let cart = use_cart();
    let value = RwSignal::new(String::new());
    let input_ref = NodeRef::<leptos::html::Input>::new();

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let close = move || {
        value.set(String::new());
        open.set(false);
    };
    let on_accept = move || match GiftCard::from_input(&value.get_untracked()) {
        Ok(card) => {
            if cart.add(card.into_item()).is_some() {
                close();
                alert(ADDED_MESSAGE);
            }
        }
        Err(err) => {
            log::debug!("gift card rejected: {err}");
            alert(err.user_message());
        }
    };
    // Escape is heard on the window so it works wherever focus sits.
    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            if dialog_key(&ev.key()) == Some(DialogKey::Close) {
                ev.prevent_default();
                close();
            }
        });
        on_cleanup(move || handle.remove());
    }
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if dialog_key(&ev.key()) == Some(DialogKey::Accept) {
            ev.prevent_default();
            on_accept();
        }
    };

    view! {
        <div id="giftModal" class="dialog-backdrop" on:click=move |_| close()>
            <div
                class="dialog dialog--gift"
                role="dialog"
                aria-modal="true"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <div class="dialog__header">
                    <h2>"Tarjeta de Regalo"</h2>
                    <button
                        id="giftModalClose"
                        class="dialog__close"
                        on:click=move |_| close()
                        title="Cerrar"
                    >
                        "✕"
                    </button>
                </div>
                <label class="dialog__label">
                    "Valor (COP)"
                    <input
                        id="giftValue"
                        class="dialog__input"
                        type="number"
                        min="10000"
                        step="1000"
                        placeholder="10000"
                        node_ref=input_ref
                        prop:value=move || value.get()
                        on:input=move |ev| value.set(event_target_value(&ev))
                    />
                </label>
                <div class="dialog__actions">
                    <button id="giftModalCancel" class="btn" on:click=move |_| close()>
                        "Cancelar"
                    </button>
                    <button
                        id="giftModalAccept"
                        class="btn btn--primary"
                        on:click=move |_| on_accept()
                    >
                        "Añadir al carrito"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DialogKey {
    Close,
    Accept,
}

fn dialog_key(key: &str) -> Option<DialogKey> {
    match key {
        "Escape" | "Esc" => Some(DialogKey::Close),
        "Enter" => Some(DialogKey::Accept),
        _ => None,
    }
}
