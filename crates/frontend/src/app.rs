use crate::routes::routes::AppRoutes;
use crate::shared::cart::CartService;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the shared cart store to the whole app via context.
    provide_context(CartService::new());

    view! {
        <AppRoutes />
    }
}
