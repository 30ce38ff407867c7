//! Projection of payments into display rows.
//!
//! A payment only carries the order id; the rows join orders and clients
//! so the table can show who is paying for what.

use crate::domain::a003_order::state::order_total;
use crate::shared::list_utils::Searchable;
use contracts::domain::a001_client::Client;
use contracts::domain::a002_product::Product;
use contracts::domain::a003_order::Order;
use contracts::domain::a006_payment::Payment;
use contracts::enums::PaymentStatus;

#[derive(Clone, Debug)]
pub struct PaymentRow {
    pub order_id: i64,
    pub cliente: String,
    pub status: PaymentStatus,
    pub amount: f64,
    pub metodo_pago: Option<String>,
    pub transaction_id: Option<String>,
    pub failure_reason: Option<String>,
    pub processing_date: Option<chrono::DateTime<chrono::Utc>>,
}

pub fn build_rows(
    payments: &[Payment],
    orders: &[Order],
    clients: &[Client],
    products: &[Product],
) -> Vec<PaymentRow> {
    let mut rows: Vec<PaymentRow> = payments
        .iter()
        .map(|p| {
            let order = orders.iter().find(|o| o.id_orden == p.order_id);
            let cliente = order
                .and_then(|o| clients.iter().find(|c| c.id_cliente == o.id_cliente))
                .map(|c| c.nombre.clone())
                .unwrap_or_else(|| "Desconocido".to_string());

            // Prefer the amount the payment service recorded; fall back to
            // repricing the order against the catalog.
            let amount = p.amount.unwrap_or_else(|| {
                order.map(|o| order_total(o, products)).unwrap_or(0.0)
            });

            PaymentRow {
                order_id: p.order_id.value(),
                cliente,
                status: p.status,
                amount,
                metodo_pago: p.metodo_pago.clone(),
                transaction_id: p.transaction_id.clone(),
                failure_reason: p.failure_reason.clone(),
                processing_date: p.processing_date,
            }
        })
        .collect();

    rows.sort_by(|a, b| b.order_id.cmp(&a.order_id));
    rows
}

impl Searchable for PaymentRow {
    fn matches_filter(&self, filter: &str) -> bool {
        let f = filter.to_lowercase();
        self.order_id.to_string().contains(&f)
            || self
                .transaction_id
                .as_ref()
                .map(|tx| tx.to_lowercase().contains(&f))
                .unwrap_or(false)
    }
}

/// Payment list filters; an empty status code means "all".
pub fn filter_rows(rows: Vec<PaymentRow>, text: &str, status_code: &str) -> Vec<PaymentRow> {
    let rows = crate::shared::list_utils::filter_list(rows, text);
    if status_code.is_empty() {
        return rows;
    }
    rows.into_iter()
        .filter(|r| r.status.code() == status_code)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_client::ClientId;
    use contracts::domain::a002_product::ProductId;
    use contracts::domain::a003_order::{OrderId, OrderLine};
    use contracts::enums::OrderStatus;

    fn payment(order_id: i64, status: PaymentStatus, amount: Option<f64>) -> Payment {
        Payment {
            order_id: OrderId::new(order_id),
            status,
            processing_date: None,
            amount,
            metodo_pago: None,
            transaction_id: None,
            failure_reason: None,
        }
    }

    fn order(id: i64, cliente: i64) -> Order {
        Order {
            id_orden: OrderId::new(id),
            fecha: "2025-03-07".to_string(),
            estado: OrderStatus::Pendiente,
            id_cliente: ClientId::new(cliente),
            productos: vec![OrderLine {
                id_producto: ProductId::new(1),
                cantidad: 2,
            }],
        }
    }

    fn client(id: i64, nombre: &str) -> Client {
        Client {
            id_cliente: ClientId::new(id),
            nombre: nombre.to_string(),
            direccion: String::new(),
            contacto: String::new(),
        }
    }

    fn product(id: i64, precio: &str) -> Product {
        Product {
            id_producto: ProductId::new(id),
            nombre: String::new(),
            precio: precio.to_string(),
            stock: 10,
            imagen_url: None,
            categoria: String::new(),
        }
    }

    #[test]
    fn test_build_rows_joins_client_and_reprices_missing_amount() {
        let payments = vec![payment(1, PaymentStatus::Pending, None)];
        let orders = vec![order(1, 5)];
        let clients = vec![client(5, "Bodega San Juan")];
        let products = vec![product(1, "2.50")];

        let rows = build_rows(&payments, &orders, &clients, &products);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].cliente, "Bodega San Juan");
        assert_eq!(rows[0].amount, 5.0);
    }

    #[test]
    fn test_build_rows_prefers_recorded_amount() {
        let payments = vec![payment(1, PaymentStatus::Success, Some(99.0))];
        let orders = vec![order(1, 5)];
        let clients = vec![client(5, "Bodega")];
        let products = vec![product(1, "2.50")];

        let rows = build_rows(&payments, &orders, &clients, &products);
        assert_eq!(rows[0].amount, 99.0);
    }

    #[test]
    fn test_build_rows_orphan_payment_still_listed() {
        let payments = vec![payment(7, PaymentStatus::Failure, None)];
        let rows = build_rows(&payments, &[], &[], &[]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].cliente, "Desconocido");
        assert_eq!(rows[0].amount, 0.0);
    }

    #[test]
    fn test_filter_rows_by_status() {
        let payments = vec![
            payment(1, PaymentStatus::Success, Some(1.0)),
            payment(2, PaymentStatus::Failure, Some(2.0)),
        ];
        let rows = build_rows(&payments, &[], &[], &[]);
        assert_eq!(filter_rows(rows.clone(), "", "SUCCESS").len(), 1);
        assert_eq!(filter_rows(rows, "", "").len(), 2);
    }

    #[test]
    fn test_filter_rows_by_transaction_id() {
        let mut p = payment(123, PaymentStatus::Success, Some(1.0));
        p.transaction_id = Some("TX-9001".to_string());
        let rows = build_rows(&[p], &[], &[], &[]);

        assert_eq!(filter_rows(rows.clone(), "tx-9001", "").len(), 1);
        assert_eq!(filter_rows(rows.clone(), "123", "").len(), 1);
        assert_eq!(filter_rows(rows, "tx-404", "").len(), 0);
    }
}
