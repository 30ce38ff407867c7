use crate::shared::cart::CartService;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

/// Top bar: brand on the left, cart shortcut with a live unit counter on
/// the right.
#[component]
pub fn TopHeader() -> impl IntoView {
    let cart = CartService::expect();

    let units = move || cart.total_units();

    view! {
        <header class="app-header">
            <div class="app-header__brand">
                <A href="/">
                    <span class="app-header__title">"Administración de Distribución"</span>
                </A>
            </div>
            <div class="app-header__actions">
                <A href="/carrito" attr:class="app-header__cart">
                    {icon("cart")}
                    {move || {
                        let n = units();
                        (n > 0).then(|| view! {
                            <span class="app-header__cart-badge">{n}</span>
                        })
                    }}
                </A>
            </div>
        </header>
    }
}
