use crate::domain::a003_order::aggregate::OrderId;
use crate::domain::a004_dispatch::aggregate::DispatchId;
use crate::domain::common::EntityId;
use crate::enums::ShipmentStatus;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShipmentId(pub i64);

impl ShipmentId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl EntityId for ShipmentId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<i64>()
            .map(ShipmentId::new)
            .map_err(|e| format!("Invalid id: {}", e))
    }
}

// ============================================================================
// Record
// ============================================================================
/// Record tracking carrier hand-off and delivery of a dispatched order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shipment {
    #[serde(rename = "idEnvio")]
    pub id_envio: ShipmentId,
    #[serde(rename = "idDespacho")]
    pub id_despacho: DispatchId,
    #[serde(rename = "idOrden")]
    pub id_orden: OrderId,
    #[serde(rename = "fechaDespacho", default)]
    pub fecha_despacho: Option<chrono::DateTime<chrono::Utc>>,
    pub estado: ShipmentStatus,
    #[serde(rename = "direccionEntrega", default)]
    pub direccion_entrega: String,
    #[serde(rename = "correoUsuario", default)]
    pub correo_usuario: String,
    // Carrier fields are optional: older shipment rows predate them.
    #[serde(default)]
    pub transportista: Option<String>,
    #[serde(rename = "numeroGuia", default)]
    pub numero_guia: Option<String>,
}

// ============================================================================
// DTO
// ============================================================================
/// Body of `PUT /api/envios/{idEnvio}/estado`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateShipmentStatusRequest {
    pub estado: ShipmentStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_names() {
        let json = r#"{"idEnvio":1,"idDespacho":3,"idOrden":11,"fechaDespacho":"2024-01-15T14:30:00Z","estado":"en tránsito","direccionEntrega":"Calle Secundaria 456, Guayaquil","correoUsuario":"esquina@mail.ec"}"#;
        let s: Shipment = serde_json::from_str(json).unwrap();
        assert_eq!(s.id_envio.value(), 1);
        assert_eq!(s.estado, ShipmentStatus::EnTransito);
        assert_eq!(s.transportista, None);
    }
}
