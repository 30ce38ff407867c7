use crate::domain::a003_order::aggregate::OrderId;
use crate::domain::common::EntityId;
use crate::enums::DispatchStatus;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DispatchId(pub i64);

impl DispatchId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl EntityId for DispatchId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<i64>()
            .map(DispatchId::new)
            .map_err(|e| format!("Invalid id: {}", e))
    }
}

// ============================================================================
// Record
// ============================================================================
/// Internal record tracking packing/payment-gating status of an order prior
/// to shipment. `fecha_despacho` stays a plain string, the dispatch service
/// never normalized it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dispatch {
    #[serde(rename = "idDespacho")]
    pub id_despacho: DispatchId,
    #[serde(rename = "idOrden")]
    pub id_orden: OrderId,
    #[serde(rename = "fechaDespacho", default)]
    pub fecha_despacho: Option<String>,
    pub estado: DispatchStatus,
    #[serde(rename = "direccionEntrega", default)]
    pub direccion_entrega: String,
}

// ============================================================================
// DTO
// ============================================================================
/// Body of `PUT /api/despachos/agendar/{idDespacho}`: schedules the dispatch
/// with a delivery address and date, moving it to the next state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleDispatchRequest {
    #[serde(rename = "fechaDespacho")]
    pub fecha_despacho: String,
    pub estado: DispatchStatus,
    #[serde(rename = "direccionEntrega")]
    pub direccion_entrega: String,
}

/// Body of `PUT /api/despachos/{idDespacho}/estado`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateDispatchStatusRequest {
    pub estado: DispatchStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_names() {
        let json = r#"{"idDespacho":3,"idOrden":11,"fechaDespacho":"2024-01-15","estado":"pendiente","direccionEntrega":"Av. Principal 123, Quito"}"#;
        let d: Dispatch = serde_json::from_str(json).unwrap();
        assert_eq!(d.id_despacho.value(), 3);
        assert_eq!(d.id_orden.value(), 11);
        assert_eq!(d.estado, DispatchStatus::Pendiente);
    }

    #[test]
    fn test_missing_optional_fields() {
        let json = r#"{"idDespacho":4,"idOrden":12,"estado":"enviado"}"#;
        let d: Dispatch = serde_json::from_str(json).unwrap();
        assert_eq!(d.fecha_despacho, None);
        assert_eq!(d.direccion_entrega, "");
    }
}
