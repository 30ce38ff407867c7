use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Carrier hand-off and delivery states of a shipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShipmentStatus {
    EnPreparacion,
    EnTransito,
    Enviada,
    Entregado,
}

impl ShipmentStatus {
    pub fn code(&self) -> &'static str {
        match self {
            ShipmentStatus::EnPreparacion => "en preparación",
            ShipmentStatus::EnTransito => "en tránsito",
            ShipmentStatus::Enviada => "enviada",
            ShipmentStatus::Entregado => "entregado",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ShipmentStatus::EnPreparacion => "En Preparación",
            ShipmentStatus::EnTransito => "En Tránsito",
            ShipmentStatus::Enviada => "Enviada",
            ShipmentStatus::Entregado => "Entregado",
        }
    }

    pub fn all() -> Vec<ShipmentStatus> {
        vec![
            ShipmentStatus::EnPreparacion,
            ShipmentStatus::EnTransito,
            ShipmentStatus::Enviada,
            ShipmentStatus::Entregado,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "en preparación" | "en preparacion" | "pending" => Some(ShipmentStatus::EnPreparacion),
            "en tránsito" | "en transito" | "in-transit" => Some(ShipmentStatus::EnTransito),
            "enviada" | "enviado" => Some(ShipmentStatus::Enviada),
            "entregado" | "entregada" | "delivered" => Some(ShipmentStatus::Entregado),
            _ => None,
        }
    }

    pub fn next(&self) -> Option<ShipmentStatus> {
        match self {
            ShipmentStatus::EnPreparacion => Some(ShipmentStatus::EnTransito),
            ShipmentStatus::EnTransito => Some(ShipmentStatus::Enviada),
            ShipmentStatus::Enviada => Some(ShipmentStatus::Entregado),
            ShipmentStatus::Entregado => None,
        }
    }
}

impl Serialize for ShipmentStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for ShipmentStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(ShipmentStatus::from_code(&s).unwrap_or(ShipmentStatus::EnPreparacion))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accent_insensitive_parse() {
        assert_eq!(
            ShipmentStatus::from_code("en transito"),
            Some(ShipmentStatus::EnTransito)
        );
        assert_eq!(
            ShipmentStatus::from_code("En Tránsito"),
            Some(ShipmentStatus::EnTransito)
        );
    }

    #[test]
    fn test_serde_round_trip() {
        for status in ShipmentStatus::all() {
            let json = serde_json::to_string(&status).unwrap();
            let back: ShipmentStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(back, status);
        }
    }
}
