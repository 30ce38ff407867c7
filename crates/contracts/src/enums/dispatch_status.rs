use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Packing/payment-gating states of a dispatch, one board column each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DispatchStatus {
    Pendiente,
    Enviado,
    Entregado,
}

impl DispatchStatus {
    pub fn code(&self) -> &'static str {
        match self {
            DispatchStatus::Pendiente => "pendiente",
            DispatchStatus::Enviado => "enviado",
            DispatchStatus::Entregado => "entregado",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DispatchStatus::Pendiente => "Pendiente",
            DispatchStatus::Enviado => "Enviado",
            DispatchStatus::Entregado => "Entregado",
        }
    }

    pub fn all() -> Vec<DispatchStatus> {
        vec![
            DispatchStatus::Pendiente,
            DispatchStatus::Enviado,
            DispatchStatus::Entregado,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "pendiente" | "pending" => Some(DispatchStatus::Pendiente),
            "enviado" | "shipped" => Some(DispatchStatus::Enviado),
            "entregado" | "delivered" => Some(DispatchStatus::Entregado),
            _ => None,
        }
    }

    /// Next state of the manual pipeline, if any.
    pub fn next(&self) -> Option<DispatchStatus> {
        match self {
            DispatchStatus::Pendiente => Some(DispatchStatus::Enviado),
            DispatchStatus::Enviado => Some(DispatchStatus::Entregado),
            DispatchStatus::Entregado => None,
        }
    }
}

impl Serialize for DispatchStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for DispatchStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(DispatchStatus::from_code(&s).unwrap_or(DispatchStatus::Pendiente))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_order() {
        assert_eq!(DispatchStatus::Pendiente.next(), Some(DispatchStatus::Enviado));
        assert_eq!(DispatchStatus::Enviado.next(), Some(DispatchStatus::Entregado));
        assert_eq!(DispatchStatus::Entregado.next(), None);
    }

    #[test]
    fn test_serde_round_trip() {
        for status in DispatchStatus::all() {
            let json = serde_json::to_string(&status).unwrap();
            let back: DispatchStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(back, status);
        }
    }
}
