use crate::domain::a003_order::aggregate::OrderId;
use crate::enums::PaymentStatus;
use serde::{Deserialize, Serialize};

// ============================================================================
// Record
// ============================================================================
/// Payment row of the payment service. Keyed by the order id (one payment per
/// order), so there is no separate payment id on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    #[serde(rename = "orderId")]
    pub order_id: OrderId,
    pub status: PaymentStatus,
    #[serde(rename = "processingDate", default)]
    pub processing_date: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(rename = "metodoPago", default)]
    pub metodo_pago: Option<String>,
    #[serde(rename = "transactionId", default)]
    pub transaction_id: Option<String>,
    #[serde(rename = "failureReason", default)]
    pub failure_reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_wire_shape() {
        // The simulate endpoint only guarantees orderId/status/processingDate.
        let json = r#"{"orderId":11,"status":"SUCCESS","processingDate":"2024-01-15T10:00:00Z"}"#;
        let p: Payment = serde_json::from_str(json).unwrap();
        assert_eq!(p.order_id.value(), 11);
        assert_eq!(p.status, PaymentStatus::Success);
        assert_eq!(p.transaction_id, None);
        assert_eq!(p.failure_reason, None);
    }

    #[test]
    fn test_enriched_wire_shape() {
        let json = r#"{"orderId":3,"status":"FAILURE","amount":890.25,"metodoPago":"Tarjeta de Débito","failureReason":"Fondos insuficientes"}"#;
        let p: Payment = serde_json::from_str(json).unwrap();
        assert_eq!(p.amount, Some(890.25));
        assert_eq!(p.failure_reason.as_deref(), Some("Fondos insuficientes"));
    }
}
