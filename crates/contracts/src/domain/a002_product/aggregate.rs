use crate::domain::common::EntityId;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl ProductId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl EntityId for ProductId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<i64>()
            .map(ProductId::new)
            .map_err(|e| format!("Invalid id: {}", e))
    }
}

// ============================================================================
// Stock level
// ============================================================================
/// Derived availability bucket used by the catalog badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockLevel {
    Available,
    Low,
    Out,
}

/// Below this count the catalog shows a "stock bajo" warning.
pub const LOW_STOCK_THRESHOLD: i32 = 10;

// ============================================================================
// Record
// ============================================================================
/// Catalog product. `precio` travels as a decimal string on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "idProducto", alias = "id_producto")]
    pub id_producto: ProductId,
    pub nombre: String,
    pub precio: String,
    #[serde(default)]
    pub stock: i32,
    #[serde(rename = "imagenUrl", default)]
    pub imagen_url: Option<String>,
    #[serde(default)]
    pub categoria: String,
}

impl Product {
    pub fn stock_level(&self) -> StockLevel {
        if self.stock <= 0 {
            StockLevel::Out
        } else if self.stock < LOW_STOCK_THRESHOLD {
            StockLevel::Low
        } else {
            StockLevel::Available
        }
    }
}

// ============================================================================
// DTO
// ============================================================================
/// Create-product request body (`POST /api/productos`). The image is uploaded
/// separately and referenced by the URL the upload endpoint returns.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProductDto {
    pub nombre: String,
    pub precio: String,
    pub stock: i32,
    #[serde(rename = "imagenUrl")]
    pub imagen_url: String,
    pub categoria: String,
}

/// Response of the image upload endpoint (`POST /api/productos/upload`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_level_buckets() {
        let mut p = Product {
            id_producto: ProductId::new(1),
            nombre: "Arroz Premium 1kg".into(),
            precio: "2.50".into(),
            stock: 120,
            imagen_url: None,
            categoria: "Granos".into(),
        };
        assert_eq!(p.stock_level(), StockLevel::Available);

        p.stock = 9;
        assert_eq!(p.stock_level(), StockLevel::Low);

        p.stock = 0;
        assert_eq!(p.stock_level(), StockLevel::Out);
    }

    #[test]
    fn test_wire_field_names() {
        let json = r#"{"idProducto":4,"nombre":"Monitor LED 24\"","precio":"129.99","stock":15,"imagenUrl":"https://cdn.example.com/monitor.jpg","categoria":"Monitores"}"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.id_producto.value(), 4);
        assert_eq!(p.precio, "129.99");
        assert_eq!(p.imagen_url.as_deref(), Some("https://cdn.example.com/monitor.jpg"));
    }
}
