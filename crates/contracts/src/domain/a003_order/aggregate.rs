use crate::domain::a001_client::aggregate::ClientId;
use crate::domain::a002_product::aggregate::ProductId;
use crate::domain::common::EntityId;
use crate::enums::OrderStatus;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub i64);

impl OrderId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl EntityId for OrderId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<i64>()
            .map(OrderId::new)
            .map_err(|e| format!("Invalid id: {}", e))
    }
}

// ============================================================================
// Record
// ============================================================================
/// One (product, quantity) line of an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLine {
    #[serde(rename = "idProducto")]
    pub id_producto: ProductId,
    pub cantidad: u32,
}

/// Order as stored by the orders service. `fecha` is an ISO date string;
/// prices are never stored on the order, totals are joined from the product
/// list at render time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "idOrden")]
    pub id_orden: OrderId,
    #[serde(default)]
    pub fecha: String,
    pub estado: OrderStatus,
    #[serde(rename = "idCliente")]
    pub id_cliente: ClientId,
    #[serde(default)]
    pub productos: Vec<OrderLine>,
}

impl Order {
    pub fn total_units(&self) -> u32 {
        self.productos.iter().map(|l| l.cantidad).sum()
    }
}

// ============================================================================
// DTO
// ============================================================================
/// Create-order request body (`POST /api/ordenes`), built from the cart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    #[serde(rename = "idCliente")]
    pub id_cliente: ClientId,
    pub productos: Vec<OrderLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notas: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_units() {
        let order = Order {
            id_orden: OrderId::new(1),
            fecha: "2024-01-15".into(),
            estado: OrderStatus::Pendiente,
            id_cliente: ClientId::new(3),
            productos: vec![
                OrderLine { id_producto: ProductId::new(1), cantidad: 5 },
                OrderLine { id_producto: ProductId::new(2), cantidad: 10 },
            ],
        };
        assert_eq!(order.total_units(), 15);
    }

    #[test]
    fn test_create_request_wire_shape() {
        let req = CreateOrderRequest {
            id_cliente: ClientId::new(7),
            productos: vec![OrderLine { id_producto: ProductId::new(2), cantidad: 3 }],
            notas: None,
        };
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(
            json,
            r#"{"idCliente":7,"productos":[{"idProducto":2,"cantidad":3}]}"#
        );
    }

    #[test]
    fn test_order_with_legacy_status() {
        let json = r#"{"idOrden":9,"fecha":"2024-01-12","estado":"pending","idCliente":2,"productos":[]}"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.estado, OrderStatus::Pendiente);
    }
}
