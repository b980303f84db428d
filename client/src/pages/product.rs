//! Product detail page fed by the selection a catalog card stored.

use cart::ProductSelection;
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::state::cart::use_cart;
#[cfg(feature = "hydrate")]
use crate::util::browser_storage;

/// What the page shows before and after reading the stored selection.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Selection {
    Loading,
    Missing,
    Found(ProductSelection),
}

#[component]
pub fn ProductPage() -> impl IntoView {
    let cart = use_cart();
    let selection = RwSignal::new(Selection::Loading);

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let loaded = browser_storage::adapter().load_selection();
        selection.set(loaded.map_or(Selection::Missing, Selection::Found));
    });

    let on_add = move |_| {
        let Selection::Found(product) = selection.get_untracked() else {
            return;
        };
        if cart.add(product.to_cart_item()).is_some() {
            cart.open.set(true);
        }
    };

    view! {
        <main class="product-page">
            {move || match selection.get() {
                Selection::Loading => {
                    view! { <p class="product-page__status">"Cargando…"</p> }.into_any()
                }
                Selection::Missing => {
                    view! {
                        <div class="product-page__status">
                            <p>"No encontramos el producto seleccionado."</p>
                            <a class="btn" href="/">"Volver a la tienda"</a>
                        </div>
                    }
                        .into_any()
                }
                Selection::Found(product) => {
                    let image_style = (!product.image.is_empty())
                        .then(|| format!("background-image: {}", product.image));
                    view! {
                        <article class="product-detail">
                            <div
                                id="productModalImage"
                                class="product-detail__img"
                                style=image_style
                            ></div>
                            <div class="product-detail__body">
                                <h1 id="productTitle">{product.name.clone()}</h1>
                                <p id="productPrice" class="product-detail__price">
                                    {format!("${}", product.price)}
                                </p>
                                <p id="productDescription">{product.desc.clone()}</p>
                                <button id="productAdd" class="btn btn--primary" on:click=on_add>
                                    "Añadir al carrito"
                                </button>
                            </div>
                        </article>
                    }
                        .into_any()
                }
            }}
        </main>
    }
}
