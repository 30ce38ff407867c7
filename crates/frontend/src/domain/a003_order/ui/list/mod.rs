use crate::domain::a003_order::state::{build_rows, filter_rows, OrderRow};
use crate::shared::api_utils::{get_json, post_empty};
use crate::shared::components::ui::Badge;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::money::format_currency;
use contracts::domain::a001_client::Client;
use contracts::domain::a002_product::Product;
use contracts::domain::a003_order::Order;
use contracts::domain::a006_payment::Payment;
use contracts::enums::{OrderStatus, PaymentStatus};
use leptos::prelude::*;

fn status_badge(estado: OrderStatus) -> impl IntoView {
    let variant = match estado {
        OrderStatus::Pendiente => "warning",
        OrderStatus::EnProceso => "primary",
        OrderStatus::Enviado => "primary",
        OrderStatus::Entregado => "success",
        OrderStatus::Cancelado => "error",
    };
    view! { <Badge variant=variant.to_string()>{estado.display_name()}</Badge> }
}

fn payment_badge(pago: Option<PaymentStatus>) -> impl IntoView {
    let (variant, label) = match pago {
        Some(PaymentStatus::Success) => ("success", "Pagado"),
        Some(PaymentStatus::Failure) => ("error", "Fallido"),
        Some(PaymentStatus::Processing) => ("primary", "Procesando"),
        Some(PaymentStatus::Pending) | None => ("warning", "Pendiente"),
    };
    view! { <Badge variant=variant.to_string()>{label}</Badge> }
}

#[component]
#[allow(non_snake_case)]
pub fn OrderList() -> impl IntoView {
    let (orders, set_orders) = signal::<Vec<Order>>(Vec::new());
    let (clients, set_clients) = signal::<Vec<Client>>(Vec::new());
    let (products, set_products) = signal::<Vec<Product>>(Vec::new());
    let (payments, set_payments) = signal::<Vec<Payment>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (text_filter, set_text_filter) = signal(String::new());
    let (status_filter, set_status_filter) = signal(String::new());
    let (date_filter, set_date_filter) = signal(String::new());
    let (detail_id, set_detail_id) = signal::<Option<i64>>(None);
    let (paying_id, set_paying_id) = signal::<Option<i64>>(None);

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_all().await {
                Ok((o, c, pr, pa)) => {
                    set_orders.set(o);
                    set_clients.set(c);
                    set_products.set(pr);
                    set_payments.set(pa);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let rows = move || {
        build_rows(&orders.get(), &clients.get(), &products.get(), &payments.get())
    };

    let visible = move || {
        filter_rows(
            rows(),
            &text_filter.get(),
            &status_filter.get(),
            &date_filter.get(),
        )
    };

    let detail_row = move || {
        detail_id
            .get()
            .and_then(|id| rows().into_iter().find(|r| r.id == id))
    };

    let pay = move |id: i64| {
        set_paying_id.set(Some(id));
        wasm_bindgen_futures::spawn_local(async move {
            let result = simulate_payment(id).await;
            set_paying_id.set(None);
            let message = match result {
                Ok(p) => {
                    let text = if p.status == PaymentStatus::Success {
                        format!("Pago de la orden #{} aprobado", id)
                    } else {
                        format!(
                            "Pago de la orden #{} rechazado: {}",
                            id,
                            p.failure_reason
                                .clone()
                                .unwrap_or_else(|| p.status.display_name().to_string())
                        )
                    };
                    // The response carries the order's new payment state.
                    set_payments.update(|items| {
                        if let Some(slot) =
                            items.iter_mut().find(|x| x.order_id == p.order_id)
                        {
                            *slot = p;
                        } else {
                            items.push(p);
                        }
                    });
                    text
                }
                Err(e) => format!("Error al procesar el pago: {}", e),
            };
            if let Some(win) = web_sys::window() {
                let _ = win.alert_with_message(&message);
            }
        });
    };

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Órdenes"}</h1>
                </div>
                <div class="header__actions">
                    <SearchInput
                        value=text_filter
                        on_change=Callback::new(move |v| set_text_filter.set(v))
                        placeholder="Orden o cliente..."
                    />
                    <input
                        type="date"
                        class="input"
                        prop:value=move || date_filter.get()
                        on:input=move |ev| set_date_filter.set(event_target_value(&ev))
                    />
                    <select
                        class="select"
                        on:change=move |ev| set_status_filter.set(event_target_value(&ev))
                    >
                        <option value="">{"Todos los estados"}</option>
                        {OrderStatus::all().into_iter().map(|s| {
                            view! { <option value=s.code()>{s.display_name()}</option> }
                        }).collect_view()}
                    </select>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        {"Actualizar"}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box" style="background: var(--color-error-50); border-color: var(--color-error-100);">
                    <span class="warning-box__icon" style="color: var(--color-error);">"⚠"</span>
                    <span class="warning-box__text" style="color: var(--color-error);">{e}</span>
                </div>
            })}

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"Orden"}</th>
                            <th class="table__header-cell">{"Fecha"}</th>
                            <th class="table__header-cell">{"Cliente"}</th>
                            <th class="table__header-cell">{"Estado"}</th>
                            <th class="table__header-cell">{"Pago"}</th>
                            <th class="table__header-cell">{"Líneas"}</th>
                            <th class="table__header-cell">{"Total"}</th>
                            <th class="table__header-cell">{"Acciones"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || visible().into_iter().map(|row: OrderRow| {
                            let id = row.id;
                            let is_paying = move || paying_id.get() == Some(id);
                            let can_pay = row.can_pay();
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{format!("#{}", id)}</td>
                                    <td class="table__cell">{format_date(&row.fecha)}</td>
                                    <td class="table__cell">{row.cliente.clone()}</td>
                                    <td class="table__cell">{status_badge(row.estado)}</td>
                                    <td class="table__cell">{payment_badge(row.pago)}</td>
                                    <td class="table__cell">{row.lineas.len()}</td>
                                    <td class="table__cell">{format_currency(row.total)}</td>
                                    <td class="table__cell">
                                        <button
                                            class="button button--small"
                                            on:click=move |_| set_detail_id.set(Some(id))
                                        >
                                            {icon("eye")}
                                            {"Ver"}
                                        </button>
                                        {can_pay.then(|| view! {
                                            <button
                                                class="button button--small button--primary"
                                                disabled=is_paying
                                                on:click=move |_| pay(id)
                                            >
                                                {move || if is_paying() { "Procesando..." } else { "Pagar" }}
                                            </button>
                                        })}
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            {move || (orders.get().is_empty() && error.get().is_none()).then(|| view! {
                <div class="empty-state">{"No hay órdenes registradas."}</div>
            })}

            // Detail modal
            {move || detail_row().map(|row| view! {
                <div class="modal-backdrop" on:click=move |_| set_detail_id.set(None)>
                    <div class="modal" on:click=|ev| ev.stop_propagation()>
                        <div class="modal__header">
                            <h3>{format!("Orden #{}", row.id)}</h3>
                            <button class="button button--icon" on:click=move |_| set_detail_id.set(None)>
                                {icon("x")}
                            </button>
                        </div>
                        <div class="modal__body">
                            <p>{format!("Cliente: {}", row.cliente)}</p>
                            <p>{format!("Fecha: {}", format_date(&row.fecha))}</p>
                            <p>{"Pago: "}{payment_badge(row.pago)}</p>
                            <table class="table__data">
                                <thead>
                                    <tr>
                                        <th>{"Producto"}</th>
                                        <th>{"Cantidad"}</th>
                                        <th>{"Precio"}</th>
                                        <th>{"Total"}</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {row.lineas.iter().map(|l| view! {
                                        <tr>
                                            <td>{l.producto.clone()}</td>
                                            <td>{l.cantidad}</td>
                                            <td>{format_currency(l.precio_unitario)}</td>
                                            <td>{format_currency(l.total)}</td>
                                        </tr>
                                    }).collect_view()}
                                </tbody>
                            </table>
                            <div class="modal__total">
                                {format!("Total: {}", format_currency(row.total))}
                            </div>
                        </div>
                    </div>
                </div>
            })}
        </div>
    }
}

async fn fetch_all(
) -> Result<(Vec<Order>, Vec<Client>, Vec<Product>, Vec<Payment>), String> {
    let orders = get_json("/api/ordenes").await?;
    let clients = get_json("/api/clientes").await?;
    let products = get_json("/api/productos").await?;
    let payments = get_json("/api/payments").await?;
    Ok((orders, clients, products, payments))
}

async fn simulate_payment(order_id: i64) -> Result<Payment, String> {
    post_empty(&format!("/api/payments/{}/simulate", order_id)).await
}
