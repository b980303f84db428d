//! Catalog card that hands its product over to the product page.

use cart::ProductSelection;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::util::browser_storage;

/// Route of the product detail page.
pub const PRODUCT_ROUTE: &str = "/product";

/// A clickable catalog entry.
#[component]
pub fn ProductCard(
    name: &'static str,
    /// Display price, e.g. `"85.000"`.
    price: &'static str,
    #[prop(optional)] desc: &'static str,
    /// CSS `background-image` value such as `url(./imgs/buzo.png)`.
    #[prop(optional)] image: &'static str,
) -> impl IntoView {
    let navigate = use_navigate();
    let on_open = move |_| {
        let selection =
            ProductSelection::from_card(Some(name), Some(price), Some(desc), Some(image));
        if let Err(err) = browser_storage::adapter().save_selection(&selection) {
            log::warn!("product selection not stored: {err}");
        }
        navigate(PRODUCT_ROUTE, NavigateOptions::default());
    };
    let image_style = if image.is_empty() {
        None
    } else {
        Some(format!("background-image: {image}"))
    };

    view! {
        <article class="product-card" on:click=on_open role="link" tabindex="0">
            <div class="product-card__img" style=image_style></div>
            <h3 class="product-card__name">{name}</h3>
            <p class="product-card__price">{format!("${price}")}</p>
            <p class="product-card__desc">{desc}</p>
        </article>
    }
}
