//! Landing dashboard: headline counters plus the latest orders.

use crate::domain::a003_order::state::{build_rows, OrderRow};
use crate::shared::api_utils::get_json;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::{StatCard, ValueFormat};
use crate::shared::components::ui::Badge;
use crate::shared::date_utils::format_date;
use crate::shared::money::format_currency;
use contracts::domain::a001_client::Client;
use contracts::domain::a002_product::Product;
use contracts::domain::a003_order::Order;
use leptos::prelude::*;

const RECENT_ORDERS: usize = 4;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct OverviewStats {
    pub clients: usize,
    pub products_in_stock: i64,
    pub orders_today: usize,
    pub monthly_sales: f64,
}

/// Headline numbers derived from the raw fetches. `today` and `month`
/// come from the caller so the math stays clock-independent.
pub fn compute_stats(
    clients: &[Client],
    products: &[Product],
    orders: &[Order],
    rows: &[OrderRow],
    today: &str,
    month: &str,
) -> OverviewStats {
    let products_in_stock = products.iter().map(|p| p.stock.max(0) as i64).sum();
    let orders_today = orders.iter().filter(|o| o.fecha.starts_with(today)).count();
    let monthly_sales = rows
        .iter()
        .filter(|r| r.fecha.starts_with(month))
        .map(|r| r.total)
        .sum();

    OverviewStats {
        clients: clients.len(),
        products_in_stock,
        orders_today,
        monthly_sales,
    }
}

#[component]
#[allow(non_snake_case)]
pub fn OverviewDashboard() -> impl IntoView {
    let (stats, set_stats) = signal::<Option<OverviewStats>>(None);
    let (recent, set_recent) = signal::<Vec<OrderRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);

    wasm_bindgen_futures::spawn_local(async move {
        match fetch_all().await {
            Ok((clients, products, orders)) => {
                let rows = build_rows(&orders, &clients, &products, &[]);
                let now = chrono::Utc::now();
                let today = now.format("%Y-%m-%d").to_string();
                let month = now.format("%Y-%m").to_string();
                set_stats.set(Some(compute_stats(
                    &clients, &products, &orders, &rows, &today, &month,
                )));
                set_recent.set(rows.into_iter().take(RECENT_ORDERS).collect());
            }
            Err(e) => set_error.set(Some(e)),
        }
    });

    view! {
        <div class="page">
            <PageHeader title="Resumen" subtitle={"Estado general de la distribución".to_string()}>
                {()}
            </PageHeader>

            {move || error.get().map(|e| view! {
                <div class="warning-box" style="background: var(--color-error-50); border-color: var(--color-error-100);">
                    <span class="warning-box__icon" style="color: var(--color-error);">"⚠"</span>
                    <span class="warning-box__text" style="color: var(--color-error);">{e}</span>
                </div>
            })}

            <div class="stat-grid">
                <StatCard
                    label="Clientes".to_string()
                    icon_name="clients".to_string()
                    value=Signal::derive(move || stats.get().map(|s| s.clients as f64))
                    format=ValueFormat::Integer
                />
                <StatCard
                    label="Unidades en stock".to_string()
                    icon_name="products".to_string()
                    value=Signal::derive(move || stats.get().map(|s| s.products_in_stock as f64))
                    format=ValueFormat::Integer
                />
                <StatCard
                    label="Órdenes de hoy".to_string()
                    icon_name="orders".to_string()
                    value=Signal::derive(move || stats.get().map(|s| s.orders_today as f64))
                    format=ValueFormat::Integer
                />
                <StatCard
                    label="Ventas del mes".to_string()
                    icon_name="payments".to_string()
                    value=Signal::derive(move || stats.get().map(|s| s.monthly_sales))
                    format=ValueFormat::Money
                />
            </div>

            <h2 class="section-title">{"Órdenes recientes"}</h2>
            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"Orden"}</th>
                            <th class="table__header-cell">{"Fecha"}</th>
                            <th class="table__header-cell">{"Cliente"}</th>
                            <th class="table__header-cell">{"Estado"}</th>
                            <th class="table__header-cell">{"Total"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || recent.get().into_iter().map(|row| view! {
                            <tr class="table__row">
                                <td class="table__cell">{format!("#{}", row.id)}</td>
                                <td class="table__cell">{format_date(&row.fecha)}</td>
                                <td class="table__cell">{row.cliente.clone()}</td>
                                <td class="table__cell">
                                    <Badge>{row.estado.display_name()}</Badge>
                                </td>
                                <td class="table__cell">{format_currency(row.total)}</td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

async fn fetch_all() -> Result<(Vec<Client>, Vec<Product>, Vec<Order>), String> {
    let clients = get_json("/api/clientes").await?;
    let products = get_json("/api/productos").await?;
    let orders = get_json("/api/ordenes").await?;
    Ok((clients, products, orders))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_client::ClientId;
    use contracts::domain::a002_product::ProductId;
    use contracts::domain::a003_order::{OrderId, OrderLine};
    use contracts::enums::OrderStatus;

    fn client(id: i64) -> Client {
        Client {
            id_cliente: ClientId::new(id),
            nombre: format!("Cliente {}", id),
            direccion: String::new(),
            contacto: String::new(),
        }
    }

    fn product(id: i64, stock: i32) -> Product {
        Product {
            id_producto: ProductId::new(id),
            nombre: String::new(),
            precio: "10.00".to_string(),
            stock,
            imagen_url: None,
            categoria: String::new(),
        }
    }

    fn order(id: i64, fecha: &str) -> Order {
        Order {
            id_orden: OrderId::new(id),
            fecha: fecha.to_string(),
            estado: OrderStatus::Pendiente,
            id_cliente: ClientId::new(1),
            productos: vec![OrderLine {
                id_producto: ProductId::new(1),
                cantidad: 1,
            }],
        }
    }

    #[test]
    fn test_compute_stats() {
        let clients = vec![client(1), client(2)];
        let products = vec![product(1, 5), product(2, -3)];
        let orders = vec![
            order(1, "2025-03-07"),
            order(2, "2025-03-01"),
            order(3, "2025-02-20"),
        ];
        let rows = build_rows(&orders, &clients, &products, &[]);

        let stats = compute_stats(&clients, &products, &orders, &rows, "2025-03-07", "2025-03");
        assert_eq!(stats.clients, 2);
        assert_eq!(stats.products_in_stock, 5);
        assert_eq!(stats.orders_today, 1);
        assert_eq!(stats.monthly_sales, 20.0);
    }
}
