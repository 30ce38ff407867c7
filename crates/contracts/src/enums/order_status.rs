use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Order lifecycle states.
///
/// The services historically mixed Spanish and English status strings
/// ("pendiente" vs "pending"), so parsing accepts both and everything is
/// normalized to the Spanish wire codes on the way out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Pendiente,
    EnProceso,
    Enviado,
    Entregado,
    Cancelado,
}

impl OrderStatus {
    /// Wire code written to the backend.
    pub fn code(&self) -> &'static str {
        match self {
            OrderStatus::Pendiente => "pendiente",
            OrderStatus::EnProceso => "en proceso",
            OrderStatus::Enviado => "enviado",
            OrderStatus::Entregado => "entregado",
            OrderStatus::Cancelado => "cancelado",
        }
    }

    /// Human-readable label for the UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pendiente => "Pendiente",
            OrderStatus::EnProceso => "En Proceso",
            OrderStatus::Enviado => "Enviado",
            OrderStatus::Entregado => "Entregado",
            OrderStatus::Cancelado => "Cancelado",
        }
    }

    pub fn all() -> Vec<OrderStatus> {
        vec![
            OrderStatus::Pendiente,
            OrderStatus::EnProceso,
            OrderStatus::Enviado,
            OrderStatus::Entregado,
            OrderStatus::Cancelado,
        ]
    }

    /// Tolerant parse: case-insensitive, accepts the English synonyms the
    /// older page variants used.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "pendiente" | "pending" => Some(OrderStatus::Pendiente),
            "en proceso" | "processing" => Some(OrderStatus::EnProceso),
            "enviado" | "shipped" => Some(OrderStatus::Enviado),
            "entregado" | "delivered" => Some(OrderStatus::Entregado),
            "cancelado" | "cancelled" | "canceled" => Some(OrderStatus::Cancelado),
            _ => None,
        }
    }
}

impl Serialize for OrderStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for OrderStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        // Unknown inbound statuses normalize to the initial state so records
        // never fall out of the UI.
        Ok(OrderStatus::from_code(&s).unwrap_or(OrderStatus::Pendiente))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tolerant_parse() {
        assert_eq!(OrderStatus::from_code("pendiente"), Some(OrderStatus::Pendiente));
        assert_eq!(OrderStatus::from_code("PENDING"), Some(OrderStatus::Pendiente));
        assert_eq!(OrderStatus::from_code("shipped"), Some(OrderStatus::Enviado));
        assert_eq!(OrderStatus::from_code("algo raro"), None);
    }

    #[test]
    fn test_serde_normalizes_to_spanish() {
        let status: OrderStatus = serde_json::from_str("\"delivered\"").unwrap();
        assert_eq!(status, OrderStatus::Entregado);
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"entregado\"");
    }

    #[test]
    fn test_unknown_falls_back_to_initial() {
        let status: OrderStatus = serde_json::from_str("\"???\"").unwrap();
        assert_eq!(status, OrderStatus::Pendiente);
    }
}
