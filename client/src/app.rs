//! Root application component with routing and the cart context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::cart_widget::CartWidget;
use crate::pages::{checkout::CheckoutPage, home::HomePage, product::ProductPage};
use crate::state::cart::provide_cart_context;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// The cart widget sits beside the routes so its dropdown state survives
/// navigation between catalog, product and checkout.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_cart_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/cyberduck.css"/>
        <Title text="Cyberduck"/>

        <Router>
            <CartWidget/>
            <Routes fallback=|| "Página no encontrada.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("product") view=ProductPage/>
                <Route path=StaticSegment("checkout") view=CheckoutPage/>
            </Routes>
        </Router>
    }
}
