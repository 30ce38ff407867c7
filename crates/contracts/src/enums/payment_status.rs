use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Payment processing states. The payment service writes uppercase codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Pending,
    Processing,
    Success,
    Failure,
}

impl PaymentStatus {
    pub fn code(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "PENDING",
            PaymentStatus::Processing => "PROCESSING",
            PaymentStatus::Success => "SUCCESS",
            PaymentStatus::Failure => "FAILURE",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "Pendiente",
            PaymentStatus::Processing => "Procesando",
            PaymentStatus::Success => "Exitoso",
            PaymentStatus::Failure => "Fallido",
        }
    }

    pub fn all() -> Vec<PaymentStatus> {
        vec![
            PaymentStatus::Pending,
            PaymentStatus::Processing,
            PaymentStatus::Success,
            PaymentStatus::Failure,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "PENDING" => Some(PaymentStatus::Pending),
            "PROCESSING" => Some(PaymentStatus::Processing),
            "SUCCESS" | "PAID" => Some(PaymentStatus::Success),
            "FAILURE" | "FAILED" => Some(PaymentStatus::Failure),
            _ => None,
        }
    }

    pub fn is_final(&self) -> bool {
        matches!(self, PaymentStatus::Success | PaymentStatus::Failure)
    }
}

impl Serialize for PaymentStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for PaymentStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(PaymentStatus::from_code(&s).unwrap_or(PaymentStatus::Pending))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_parse() {
        assert_eq!(PaymentStatus::from_code("success"), Some(PaymentStatus::Success));
        assert_eq!(PaymentStatus::from_code("failed"), Some(PaymentStatus::Failure));
    }

    #[test]
    fn test_final_states() {
        assert!(PaymentStatus::Success.is_final());
        assert!(PaymentStatus::Failure.is_final());
        assert!(!PaymentStatus::Pending.is_final());
        assert!(!PaymentStatus::Processing.is_final());
    }
}
