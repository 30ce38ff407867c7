use super::api;
use crate::shared::cart::{fits_stock, join_lines, subtotal, tax, total, CartService};
use crate::shared::icons::icon;
use crate::shared::money::format_currency;
use contracts::domain::a001_client::{Client, ClientId};
use contracts::domain::a002_product::Product;
use contracts::domain::a003_order::{CreateOrderRequest, OrderLine};
use leptos::prelude::*;
use leptos_router::components::A;

fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}

#[component]
#[allow(non_snake_case)]
pub fn CheckoutPage() -> impl IntoView {
    let cart = CartService::expect();

    let (products, set_products) = signal::<Vec<Product>>(Vec::new());
    let (clients, set_clients) = signal::<Vec<Client>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (client_id, set_client_id) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    wasm_bindgen_futures::spawn_local(async move {
        match api::fetch_products().await {
            Ok(v) => set_products.set(v),
            Err(e) => set_error.set(Some(e)),
        }
        match api::fetch_clients().await {
            Ok(v) => set_clients.set(v),
            Err(e) => set_error.set(Some(e)),
        }
    });

    let lines = move || join_lines(&cart.items.get(), &products.get());

    let increment = move |id: contracts::domain::a002_product::ProductId, qty: u32| {
        let stock = products
            .get_untracked()
            .iter()
            .find(|p| p.id_producto == id)
            .map(|p| p.stock)
            .unwrap_or(0);
        if !fits_stock(qty, stock) {
            alert("No hay stock suficiente");
            return;
        }
        cart.set_quantity(id, qty + 1);
    };

    let submit = move || {
        let raw_client = client_id.get_untracked();
        let Ok(id_cliente) = raw_client.parse::<i64>() else {
            alert("Seleccione un cliente");
            return;
        };

        let productos: Vec<OrderLine> = cart
            .items
            .get_untracked()
            .into_iter()
            .map(|(id_producto, cantidad)| OrderLine {
                id_producto,
                cantidad,
            })
            .collect();
        if productos.is_empty() {
            alert("El carrito está vacío");
            return;
        }

        let notas = cart.notes.get_untracked();
        let request = CreateOrderRequest {
            id_cliente: ClientId::new(id_cliente),
            productos,
            notas: (!notas.trim().is_empty()).then(|| notas.trim().to_string()),
        };

        set_submitting.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::create_order(&request).await {
                Ok(order) => {
                    cart.clear();
                    alert(&format!("Orden #{} generada", order.id_orden.value()));
                }
                Err(e) => alert(&format!("No se pudo generar la orden: {}", e)),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Carrito"}</h1>
                </div>
                <div class="header__actions">
                    <button
                        class="button button--secondary"
                        disabled=move || cart.items.get().is_empty()
                        on:click=move |_| cart.clear()
                    >
                        {icon("trash")}
                        {"Vaciar carrito"}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box" style="background: var(--color-error-50); border-color: var(--color-error-100);">
                    <span class="warning-box__icon" style="color: var(--color-error);">"⚠"</span>
                    <span class="warning-box__text" style="color: var(--color-error);">{e}</span>
                </div>
            })}

            {move || {
                let current = lines();
                if current.is_empty() {
                    view! {
                        <div class="empty-state">
                            {"El carrito está vacío. "}
                            <A href="/productos">{"Ir al catálogo"}</A>
                        </div>
                    }.into_any()
                } else {
                    let sub = subtotal(&current);
                    view! {
                        <div class="checkout">
                            <div class="table">
                                <table class="table__data table--striped">
                                    <thead class="table__head">
                                        <tr>
                                            <th class="table__header-cell">{"Producto"}</th>
                                            <th class="table__header-cell">{"Precio"}</th>
                                            <th class="table__header-cell">{"Cantidad"}</th>
                                            <th class="table__header-cell">{"Total"}</th>
                                            <th class="table__header-cell"></th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {current.iter().map(|line| {
                                            let id = line.product.id_producto;
                                            let qty = line.quantity;
                                            view! {
                                                <tr class="table__row">
                                                    <td class="table__cell">{line.product.nombre.clone()}</td>
                                                    <td class="table__cell">
                                                        {format_currency(crate::shared::money::parse_price(&line.product.precio))}
                                                    </td>
                                                    <td class="table__cell">
                                                        <button
                                                            class="button button--icon"
                                                            on:click=move |_| cart.set_quantity(id, qty.saturating_sub(1))
                                                        >
                                                            {icon("minus")}
                                                        </button>
                                                        <span class="checkout__qty">{qty}</span>
                                                        <button
                                                            class="button button--icon"
                                                            on:click=move |_| increment(id, qty)
                                                        >
                                                            {icon("plus")}
                                                        </button>
                                                    </td>
                                                    <td class="table__cell">{format_currency(line.line_total())}</td>
                                                    <td class="table__cell">
                                                        <button
                                                            class="button button--icon"
                                                            on:click=move |_| cart.remove(id)
                                                        >
                                                            {icon("trash")}
                                                        </button>
                                                    </td>
                                                </tr>
                                            }
                                        }).collect_view()}
                                    </tbody>
                                </table>
                            </div>

                            <div class="checkout__summary">
                                <div class="form-group">
                                    <label for="cliente">{"Cliente"}</label>
                                    <select
                                        id="cliente"
                                        class="select"
                                        on:change=move |ev| set_client_id.set(event_target_value(&ev))
                                    >
                                        <option value="">{"Seleccione un cliente"}</option>
                                        {move || clients.get().into_iter().map(|c| {
                                            let value = c.id_cliente.value().to_string();
                                            let selected = client_id.get() == value;
                                            view! {
                                                <option value=value selected=selected>{c.nombre.clone()}</option>
                                            }
                                        }).collect_view()}
                                    </select>
                                </div>

                                <div class="form-group">
                                    <label for="notas">{"Notas"}</label>
                                    <textarea
                                        id="notas"
                                        placeholder="Instrucciones de entrega (opcional)"
                                        prop:value=move || cart.notes.get()
                                        on:input=move |ev| cart.set_notes(event_target_value(&ev))
                                    />
                                </div>

                                <div class="checkout__totals">
                                    <div>{format!("Subtotal: {}", format_currency(sub))}</div>
                                    <div>{format!("IVA (12%): {}", format_currency(tax(sub)))}</div>
                                    <div class="checkout__grand-total">
                                        {format!("Total: {}", format_currency(total(sub)))}
                                    </div>
                                </div>

                                <button
                                    class="button button--primary"
                                    disabled=move || submitting.get() || client_id.get().is_empty()
                                    on:click=move |_| submit()
                                >
                                    {move || if submitting.get() { "Generando..." } else { "Generar orden" }}
                                </button>
                            </div>
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}
