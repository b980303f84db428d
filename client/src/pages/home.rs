//! Storefront landing page: featured catalog plus the gift-card offer.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::gift_card_dialog::GiftCardOffer;
use crate::components::product_card::ProductCard;

#[derive(Clone, Copy)]
pub(crate) struct CatalogEntry {
    pub name: &'static str,
    pub price: &'static str,
    pub desc: &'static str,
    pub image: &'static str,
}

pub(crate) const FEATURED: &[CatalogEntry] = &[
    CatalogEntry {
        name: "Buzo Cyberduck",
        price: "85.000",
        desc: "Buzo negro con capucha y pato bordado.",
        image: "url(./imgs/buzo.png)",
    },
    CatalogEntry {
        name: "Gorra Pato",
        price: "30.000",
        desc: "Gorra ajustable con visera curva.",
        image: "url(./imgs/gorra.png)",
    },
    CatalogEntry {
        name: "Camiseta Glitch",
        price: "55.000",
        desc: "Camiseta de algodón con estampado glitch.",
        image: "url(./imgs/camiseta.png)",
    },
    CatalogEntry {
        name: "Stickers Neón",
        price: "12.500",
        desc: "Pack de seis stickers reflectivos.",
        image: "url(./imgs/stickers.png)",
    },
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="home-page">
            <header class="home-page__hero">
                <h1>"Cyberduck"</h1>
                <p>"Ropa y accesorios para patos del futuro."</p>
            </header>
            <section class="catalog">
                {FEATURED
                    .iter()
                    .map(|entry| {
                        view! {
                            <ProductCard
                                name=entry.name
                                price=entry.price
                                desc=entry.desc
                                image=entry.image
                            />
                        }
                    })
                    .collect_view()}
                <GiftCardOffer />
            </section>
        </main>
    }
}
