use crate::domain::common::EntityId;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(pub i64);

impl ClientId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl EntityId for ClientId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<i64>()
            .map(ClientId::new)
            .map_err(|e| format!("Invalid id: {}", e))
    }
}

// ============================================================================
// Record
// ============================================================================
/// Registered client of the distribution network.
///
/// `contacto` is a free-form contact string on the wire (the backend joins
/// email and phone into a single column).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    #[serde(rename = "idCliente")]
    pub id_cliente: ClientId,
    pub nombre: String,
    #[serde(default)]
    pub direccion: String,
    #[serde(default)]
    pub contacto: String,
}

// ============================================================================
// DTO
// ============================================================================
/// Registration form payload. Richer than the wire record: the extra fields
/// are folded into `direccion`/`contacto` when building the create request.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ClientDto {
    pub nombre: String,
    #[serde(rename = "cedulaRuc", default)]
    pub cedula_ruc: String,
    #[serde(default)]
    pub telefono: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub direccion: String,
    #[serde(default)]
    pub ciudad: String,
    #[serde(rename = "codigoPostal", default)]
    pub codigo_postal: String,
}

/// Create-client request body (`POST /api/clientes`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateClientRequest {
    pub nombre: String,
    pub direccion: String,
    pub contacto: String,
}

impl ClientDto {
    /// Fold the form fields into the three-column wire shape.
    pub fn to_request(&self) -> CreateClientRequest {
        let mut direccion = self.direccion.trim().to_string();
        for part in [self.ciudad.trim(), self.codigo_postal.trim()] {
            if !part.is_empty() {
                if !direccion.is_empty() {
                    direccion.push_str(", ");
                }
                direccion.push_str(part);
            }
        }

        let mut contacto = self.email.trim().to_string();
        if !self.telefono.trim().is_empty() {
            if !contacto.is_empty() {
                contacto.push_str(" / ");
            }
            contacto.push_str(self.telefono.trim());
        }

        CreateClientRequest {
            nombre: self.nombre.trim().to_string(),
            direccion,
            contacto,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_request_folds_fields() {
        let dto = ClientDto {
            nombre: "Supermercado Central".into(),
            cedula_ruc: "1790012345001".into(),
            telefono: "+593 99 123 4567".into(),
            email: "compras@central.ec".into(),
            direccion: "Av. Principal 123".into(),
            ciudad: "Quito".into(),
            codigo_postal: "170101".into(),
        };

        let req = dto.to_request();
        assert_eq!(req.nombre, "Supermercado Central");
        assert_eq!(req.direccion, "Av. Principal 123, Quito, 170101");
        assert_eq!(req.contacto, "compras@central.ec / +593 99 123 4567");
    }

    #[test]
    fn test_to_request_skips_empty_parts() {
        let dto = ClientDto {
            nombre: "Tienda La Esquina".into(),
            email: "esquina@mail.ec".into(),
            direccion: "Calle Secundaria 456".into(),
            ..Default::default()
        };

        let req = dto.to_request();
        assert_eq!(req.direccion, "Calle Secundaria 456");
        assert_eq!(req.contacto, "esquina@mail.ec");
    }

    #[test]
    fn test_wire_field_names() {
        let json = r#"{"idCliente":7,"nombre":"Bodega San Juan","direccion":"Sector Norte 321","contacto":"bodega@mail.ec"}"#;
        let client: Client = serde_json::from_str(json).unwrap();
        assert_eq!(client.id_cliente.value(), 7);
        assert_eq!(client.nombre, "Bodega San Juan");
    }
}
