//! Floating cart: button with badge, dropdown with lines, total and actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered once by `App`, outside the routes, so it survives navigation.
//! Everything it shows comes from `CartContext::view`, which the cart store
//! listener refreshes after every add, remove or clear.

use cart::view::{EMPTY_MESSAGE, PULSE_CLASS, dom_ids};
use cart::{CartLine, CartView, ItemId};
use leptos::prelude::*;

use crate::state::cart::use_cart;

/// Cart button plus dropdown panel.
#[component]
pub fn CartWidget() -> impl IntoView {
    let cart = use_cart();
    let view_state = cart.view;
    let open = cart.open;
    let pulse = cart.pulse;

    let on_toggle = move |_| {
        if !open.get_untracked() {
            cart.refresh();
        }
        open.update(|o| *o = !*o);
    };
    let on_clear = move |_| cart.clear();
    let on_remove = Callback::new(move |id: ItemId| {
        cart.remove(&id);
        open.set(true);
    });

    #[cfg(feature = "hydrate")]
    install_outside_click(open);

    let button_class = move || {
        if pulse.get() {
            format!("cart__button {PULSE_CLASS}")
        } else {
            "cart__button".to_owned()
        }
    };
    let checkout_class = move || view_state.with(|v| v.checkout.class());
    let checkout_href = move || view_state.with(|v| v.checkout.href.clone());
    let checkout_aria = move || view_state.with(|v| v.checkout.aria_disabled());
    let on_checkout = move |ev: leptos::ev::MouseEvent| {
        if !view_state.with_untracked(|v| v.checkout.enabled) {
            ev.prevent_default();
            return;
        }
        open.set(false);
    };

    view! {
        <div class="cart">
            <button
                id=dom_ids::CART_BUTTON
                class=button_class
                on:click=on_toggle
                aria-label="Carrito"
                aria-expanded=move || if open.get() { "true" } else { "false" }
            >
                "🛒"
                <span id=dom_ids::CART_COUNT class="cart__count">
                    {move || view_state.with(|v| v.badge.clone())}
                </span>
            </button>
            <div id=dom_ids::CART_DROPDOWN class="cart__dropdown" hidden=move || !open.get()>
                <div class="cart__header">
                    <span class="cart__title">"Carrito"</span>
                    <button id=dom_ids::CART_CLEAR class="btn cart__clear" on:click=on_clear>
                        "Vaciar"
                    </button>
                </div>
                <ul id=dom_ids::CART_ITEMS class="cart__items">
                    <Show
                        when=move || !view_state.with(CartView::is_empty)
                        fallback=|| view! { <li class="cart__empty">{EMPTY_MESSAGE}</li> }
                    >
                        <For
                            each=move || view_state.with(|v| v.lines.clone())
                            key=|line| line.id.clone()
                            children=move |line| {
                                view! { <CartLineRow line=line on_remove=on_remove /> }
                            }
                        />
                    </Show>
                </ul>
                <div class="cart__footer">
                    <span id=dom_ids::CART_TOTAL class="cart__total">
                        {move || view_state.with(|v| v.total_label.clone())}
                    </span>
                    <a
                        id=dom_ids::CART_CHECKOUT
                        class=checkout_class
                        href=checkout_href
                        aria-disabled=checkout_aria
                        on:click=on_checkout
                    >
                        "Pagar →"
                    </a>
                </div>
            </div>
        </div>
    }
}

/// One dropdown row with thumbnail, name, price and remove control.
#[component]
fn CartLineRow(line: CartLine, on_remove: Callback<ItemId>) -> impl IntoView {
    let CartLine {
        id,
        name,
        price_label,
        thumbnail_style,
    } = line;
    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        on_remove.run(id.clone());
    };

    view! {
        <li class="cart__item">
            <span class="cart__thumb" style=thumbnail_style aria-hidden="true"></span>
            <span class="cart__name">{name}</span>
            <span class="cart__price">{price_label}</span>
            <button class="cart__remove" on:click=on_click title="Quitar" aria-label="Quitar">
                "✕"
            </button>
        </li>
    }
}

/// Close the dropdown when a click lands outside `.cart`.
#[cfg(feature = "hydrate")]
fn install_outside_click(open: RwSignal<bool>) {
    use wasm_bindgen::JsCast as _;

    let handle = window_event_listener(leptos::ev::click, move |ev| {
        if !open.get_untracked() {
            return;
        }
        let Some(target) = ev.target() else {
            return;
        };
        let Ok(target) = target.dyn_into::<web_sys::Element>() else {
            return;
        };
        if matches!(target.closest(".cart"), Ok(None)) {
            open.set(false);
        }
    });
    on_cleanup(move || handle.remove());
}
