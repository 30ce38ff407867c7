use crate::dashboards::d001_overview::OverviewDashboard;
use crate::domain::a001_client::ui::details::ClientDetails;
use crate::domain::a001_client::ui::list::ClientList;
use crate::domain::a002_product::ui::details::ProductDetails;
use crate::domain::a002_product::ui::list::ProductCatalog;
use crate::domain::a003_order::ui::list::OrderList;
use crate::domain::a004_dispatch::ui::board::DispatchBoard;
use crate::domain::a005_shipment::ui::board::ShipmentBoard;
use crate::domain::a006_payment::ui::list::PaymentList;
use crate::layout::Shell;
use crate::usecases::u101_checkout::view::CheckoutPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_navigate;
use leptos_router::path;
use std::rc::Rc;

#[component]
fn ClientCreatePage() -> impl IntoView {
    let navigate_saved = use_navigate();
    let navigate_cancel = use_navigate();

    view! {
        <ClientDetails
            on_saved=Rc::new(move |_| navigate_saved("/clientes", Default::default()))
            on_cancel=Rc::new(move |_| navigate_cancel("/clientes", Default::default()))
        />
    }
}

#[component]
fn ProductCreatePage() -> impl IntoView {
    let navigate_saved = use_navigate();
    let navigate_cancel = use_navigate();

    view! {
        <ProductDetails
            on_saved=Rc::new(move |_| navigate_saved("/productos", Default::default()))
            on_cancel=Rc::new(move |_| navigate_cancel("/productos", Default::default()))
        />
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page page--not-found">
            <h2>"Página no encontrada"</h2>
            <p>"La ruta solicitada no existe."</p>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=OverviewDashboard />
                    <Route path=path!("/clientes") view=ClientList />
                    <Route path=path!("/clientes/nuevo") view=ClientCreatePage />
                    <Route path=path!("/productos") view=ProductCatalog />
                    <Route path=path!("/productos/nuevo") view=ProductCreatePage />
                    <Route path=path!("/carrito") view=CheckoutPage />
                    <Route path=path!("/ordenes") view=OrderList />
                    <Route path=path!("/despachos") view=DispatchBoard />
                    <Route path=path!("/envios") view=ShipmentBoard />
                    <Route path=path!("/pagos") view=PaymentList />
                </Routes>
            </Shell>
        </Router>
    }
}
