//! Pure projection of orders into display rows.
//!
//! Orders reference clients and products by id only; the rows join the
//! three fetches so the table can show names and money totals.

use crate::shared::list_utils::Searchable;
use crate::shared::money::parse_price;
use contracts::domain::a001_client::Client;
use contracts::domain::a002_product::Product;
use contracts::domain::a003_order::Order;
use contracts::domain::a006_payment::Payment;
use contracts::enums::{OrderStatus, PaymentStatus};

#[derive(Clone, Debug)]
pub struct OrderLineRow {
    pub producto: String,
    pub cantidad: u32,
    pub precio_unitario: f64,
    pub total: f64,
}

#[derive(Clone, Debug)]
pub struct OrderRow {
    pub id: i64,
    pub fecha: String,
    pub cliente: String,
    pub estado: OrderStatus,
    /// Status of the order's payment, when one exists.
    pub pago: Option<PaymentStatus>,
    pub lineas: Vec<OrderLineRow>,
    pub total: f64,
}

impl OrderRow {
    /// An order invites payment until its payment reaches a final state.
    pub fn can_pay(&self) -> bool {
        self.pago.map(|s| !s.is_final()).unwrap_or(true)
    }
}

/// Sum of an order's lines priced against the current catalog. Lines whose
/// product is unknown contribute zero.
pub fn order_total(order: &Order, products: &[Product]) -> f64 {
    order
        .productos
        .iter()
        .map(|line| {
            products
                .iter()
                .find(|p| p.id_producto == line.id_producto)
                .map(|p| parse_price(&p.precio) * line.cantidad as f64)
                .unwrap_or(0.0)
        })
        .sum()
}

pub fn build_rows(
    orders: &[Order],
    clients: &[Client],
    products: &[Product],
    payments: &[Payment],
) -> Vec<OrderRow> {
    let mut rows: Vec<OrderRow> = orders
        .iter()
        .map(|order| {
            let cliente = clients
                .iter()
                .find(|c| c.id_cliente == order.id_cliente)
                .map(|c| c.nombre.clone())
                .unwrap_or_else(|| format!("Cliente #{}", order.id_cliente.value()));

            let pago = payments
                .iter()
                .find(|p| p.order_id == order.id_orden)
                .map(|p| p.status);

            let lineas = order
                .productos
                .iter()
                .map(|line| {
                    let (producto, precio_unitario) = products
                        .iter()
                        .find(|p| p.id_producto == line.id_producto)
                        .map(|p| (p.nombre.clone(), parse_price(&p.precio)))
                        .unwrap_or_else(|| {
                            (format!("Producto #{}", line.id_producto.value()), 0.0)
                        });
                    OrderLineRow {
                        producto,
                        cantidad: line.cantidad,
                        precio_unitario,
                        total: precio_unitario * line.cantidad as f64,
                    }
                })
                .collect();

            OrderRow {
                id: order.id_orden.value(),
                fecha: order.fecha.clone(),
                cliente,
                estado: order.estado,
                pago,
                lineas,
                total: order_total(order, products),
            }
        })
        .collect();

    // Newest first
    rows.sort_by(|a, b| b.id.cmp(&a.id));
    rows
}

impl Searchable for OrderRow {
    fn matches_filter(&self, filter: &str) -> bool {
        let f = filter.to_lowercase();
        self.id.to_string().contains(&f) || self.cliente.to_lowercase().contains(&f)
    }
}

/// Apply the order review filters. Empty status code or date mean "all";
/// the free-text filter follows the usual 3-character minimum.
pub fn filter_rows(
    rows: Vec<OrderRow>,
    text: &str,
    status_code: &str,
    date: &str,
) -> Vec<OrderRow> {
    let rows = crate::shared::list_utils::filter_list(rows, text);
    rows.into_iter()
        .filter(|r| status_code.is_empty() || r.estado.code() == status_code)
        .filter(|r| date.is_empty() || r.fecha == date)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_client::ClientId;
    use contracts::domain::a002_product::ProductId;
    use contracts::domain::a003_order::{OrderId, OrderLine};

    fn client(id: i64, nombre: &str) -> Client {
        Client {
            id_cliente: ClientId::new(id),
            nombre: nombre.to_string(),
            direccion: String::new(),
            contacto: String::new(),
        }
    }

    fn product(id: i64, nombre: &str, precio: &str) -> Product {
        Product {
            id_producto: ProductId::new(id),
            nombre: nombre.to_string(),
            precio: precio.to_string(),
            stock: 10,
            imagen_url: None,
            categoria: String::new(),
        }
    }

    fn order(id: i64, cliente: i64, lines: Vec<(i64, u32)>) -> Order {
        Order {
            id_orden: OrderId::new(id),
            fecha: "2025-03-07".to_string(),
            estado: OrderStatus::Pendiente,
            id_cliente: ClientId::new(cliente),
            productos: lines
                .into_iter()
                .map(|(p, q)| OrderLine {
                    id_producto: ProductId::new(p),
                    cantidad: q,
                })
                .collect(),
        }
    }

    #[test]
    fn test_order_total_joins_prices() {
        let products = vec![product(1, "Arroz", "2.50"), product(2, "Azúcar", "1.25")];
        let o = order(1, 1, vec![(1, 2), (2, 4)]);
        assert_eq!(order_total(&o, &products), 10.0);
    }

    #[test]
    fn test_order_total_unknown_product_counts_zero() {
        let products = vec![product(1, "Arroz", "2.50")];
        let o = order(1, 1, vec![(1, 1), (99, 5)]);
        assert_eq!(order_total(&o, &products), 2.5);
    }

    fn payment(order_id: i64, status: PaymentStatus) -> Payment {
        Payment {
            order_id: OrderId::new(order_id),
            status,
            processing_date: None,
            amount: None,
            metodo_pago: None,
            transaction_id: None,
            failure_reason: None,
        }
    }

    #[test]
    fn test_build_rows_resolves_names_and_sorts_newest_first() {
        let clients = vec![client(1, "Bodega San Juan")];
        let products = vec![product(1, "Arroz", "2.50")];
        let orders = vec![order(1, 1, vec![(1, 1)]), order(2, 7, vec![(1, 2)])];

        let rows = build_rows(&orders, &clients, &products, &[]);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, 2);
        assert_eq!(rows[0].cliente, "Cliente #7");
        assert_eq!(rows[1].cliente, "Bodega San Juan");
        assert_eq!(rows[1].lineas[0].producto, "Arroz");
    }

    #[test]
    fn test_build_rows_joins_payment_status() {
        let clients = vec![client(1, "Bodega")];
        let products = vec![product(1, "Arroz", "2.50")];
        let orders = vec![order(1, 1, vec![(1, 1)]), order(2, 1, vec![(1, 1)])];
        let payments = vec![payment(1, PaymentStatus::Success)];

        let rows = build_rows(&orders, &clients, &products, &payments);
        let paid = rows.iter().find(|r| r.id == 1).unwrap();
        let unpaid = rows.iter().find(|r| r.id == 2).unwrap();

        assert_eq!(paid.pago, Some(PaymentStatus::Success));
        assert!(!paid.can_pay());
        assert_eq!(unpaid.pago, None);
        assert!(unpaid.can_pay());
    }

    #[test]
    fn test_can_pay_until_payment_is_final() {
        let orders = vec![order(1, 1, vec![(1, 1)])];
        let pending = build_rows(&orders, &[], &[], &[payment(1, PaymentStatus::Pending)]);
        assert!(pending[0].can_pay());

        let failed = build_rows(&orders, &[], &[], &[payment(1, PaymentStatus::Failure)]);
        assert!(!failed[0].can_pay());
    }

    #[test]
    fn test_filter_rows_by_status_code() {
        let clients = vec![client(1, "Bodega")];
        let products = vec![product(1, "Arroz", "2.50")];
        let orders = vec![order(1, 1, vec![(1, 1)])];
        let rows = build_rows(&orders, &clients, &products, &[]);

        assert_eq!(filter_rows(rows.clone(), "", "", "").len(), 1);
        assert_eq!(filter_rows(rows.clone(), "", "pendiente", "").len(), 1);
        assert_eq!(filter_rows(rows, "", "entregado", "").len(), 0);
    }

    #[test]
    fn test_filter_rows_by_text_and_date() {
        let clients = vec![client(1, "Bodega San Juan")];
        let products = vec![product(1, "Arroz", "2.50")];
        let orders = vec![order(1, 1, vec![(1, 1)])];
        let rows = build_rows(&orders, &clients, &products, &[]);

        assert_eq!(filter_rows(rows.clone(), "bodega", "", "").len(), 1);
        assert_eq!(filter_rows(rows.clone(), "otra tienda", "", "").len(), 0);
        assert_eq!(filter_rows(rows.clone(), "", "", "2025-03-07").len(), 1);
        assert_eq!(filter_rows(rows, "", "", "2025-01-01").len(), 0);
    }
}
