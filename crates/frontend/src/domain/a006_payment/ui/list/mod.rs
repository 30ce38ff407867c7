use crate::domain::a006_payment::state::{build_rows, filter_rows, PaymentRow};
use crate::shared::api_utils::{get_json, post_empty};
use crate::shared::components::ui::Badge;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::money::format_currency;
use contracts::domain::a001_client::Client;
use contracts::domain::a002_product::Product;
use contracts::domain::a003_order::Order;
use contracts::domain::a006_payment::Payment;
use contracts::enums::PaymentStatus;
use leptos::prelude::*;

fn status_badge(status: PaymentStatus) -> impl IntoView {
    let variant = match status {
        PaymentStatus::Pending => "warning",
        PaymentStatus::Processing => "primary",
        PaymentStatus::Success => "success",
        PaymentStatus::Failure => "error",
    };
    view! { <Badge variant=variant.to_string()>{status.display_name()}</Badge> }
}

#[component]
#[allow(non_snake_case)]
pub fn PaymentList() -> impl IntoView {
    let (payments, set_payments) = signal::<Vec<Payment>>(Vec::new());
    let (orders, set_orders) = signal::<Vec<Order>>(Vec::new());
    let (clients, set_clients) = signal::<Vec<Client>>(Vec::new());
    let (products, set_products) = signal::<Vec<Product>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (text_filter, set_text_filter) = signal(String::new());
    let (status_filter, set_status_filter) = signal(String::new());
    let (simulating_id, set_simulating_id) = signal::<Option<i64>>(None);

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_all().await {
                Ok((p, o, c, pr)) => {
                    set_payments.set(p);
                    set_orders.set(o);
                    set_clients.set(c);
                    set_products.set(pr);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let rows = move || {
        filter_rows(
            build_rows(&payments.get(), &orders.get(), &clients.get(), &products.get()),
            &text_filter.get(),
            &status_filter.get(),
        )
    };

    let simulate = move |order_id: i64| {
        set_simulating_id.set(Some(order_id));
        wasm_bindgen_futures::spawn_local(async move {
            match simulate_payment(order_id).await {
                Ok(updated) => {
                    // The response replaces the matching row; new payments
                    // are appended so they appear without a refetch.
                    set_payments.update(|items| {
                        if let Some(slot) =
                            items.iter_mut().find(|p| p.order_id == updated.order_id)
                        {
                            *slot = updated;
                        } else {
                            items.push(updated);
                        }
                    });
                }
                Err(e) => {
                    if let Some(win) = web_sys::window() {
                        let _ = win
                            .alert_with_message(&format!("Error al procesar el pago: {}", e));
                    }
                }
            }
            set_simulating_id.set(None);
        });
    };

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Pagos"}</h1>
                </div>
                <div class="header__actions">
                    <SearchInput
                        value=text_filter
                        on_change=Callback::new(move |v| set_text_filter.set(v))
                        placeholder="Orden o transacción..."
                    />
                    <select
                        class="select"
                        on:change=move |ev| set_status_filter.set(event_target_value(&ev))
                    >
                        <option value="">{"Todos los estados"}</option>
                        {PaymentStatus::all().into_iter().map(|s| {
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
                            <th class="table__header-cell">{"Cliente"}</th>
                            <th class="table__header-cell">{"Estado"}</th>
                            <th class="table__header-cell">{"Monto"}</th>
                            <th class="table__header-cell">{"Método"}</th>
                            <th class="table__header-cell">{"Fecha"}</th>
                            <th class="table__header-cell">{"Detalle"}</th>
                            <th class="table__header-cell">{"Acciones"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || rows().into_iter().map(|row: PaymentRow| {
                            let order_id = row.order_id;
                            let is_simulating = move || simulating_id.get() == Some(order_id);
                            let can_simulate = !row.status.is_final();
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{format!("#{}", order_id)}</td>
                                    <td class="table__cell">{row.cliente.clone()}</td>
                                    <td class="table__cell">{status_badge(row.status)}</td>
                                    <td class="table__cell">{format_currency(row.amount)}</td>
                                    <td class="table__cell">
                                        {row.metodo_pago.clone().unwrap_or_else(|| "-".to_string())}
                                    </td>
                                    <td class="table__cell">
                                        {row.processing_date
                                            .map(|d| format_datetime(&d))
                                            .unwrap_or_else(|| "-".to_string())}
                                    </td>
                                    <td class="table__cell">
                                        {match (&row.failure_reason, &row.transaction_id) {
                                            (Some(reason), _) => reason.clone(),
                                            (None, Some(tx)) => tx.clone(),
                                            (None, None) => "-".to_string(),
                                        }}
                                    </td>
                                    <td class="table__cell">
                                        {can_simulate.then(|| view! {
                                            <button
                                                class="button button--small button--primary"
                                                disabled=is_simulating
                                                on:click=move |_| simulate(order_id)
                                            >
                                                {move || if is_simulating() {
                                                    "Procesando..."
                                                } else {
                                                    "Simular pago"
                                                }}
                                            </button>
                                        })}
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            {move || (payments.get().is_empty() && error.get().is_none()).then(|| view! {
                <div class="empty-state">{"No hay pagos registrados."}</div>
            })}
        </div>
    }
}

async fn fetch_all() -> Result<(Vec<Payment>, Vec<Order>, Vec<Client>, Vec<Product>), String> {
    let payments = get_json("/api/payments").await?;
    let orders = get_json("/api/ordenes").await?;
    let clients = get_json("/api/clientes").await?;
    let products = get_json("/api/productos").await?;
    Ok((payments, orders, clients, products))
}

async fn simulate_payment(order_id: i64) -> Result<Payment, String> {
    post_empty(&format!("/api/payments/{}/simulate", order_id)).await
}
