//! Shared shopping cart store.
//!
//! The cart holds only product ids and quantities; prices and names are
//! joined against the freshly fetched catalog at render time, so a price
//! change on the backend is reflected the next time the cart page loads.
//! The whole cart is snapshotted to localStorage on every mutation and
//! restored on startup.

use contracts::domain::a002_product::{Product, ProductId};
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::shared::money::parse_price;

const STORAGE_KEY: &str = "distribucion.cart";

/// VAT applied on top of the cart subtotal.
pub const IVA_RATE: f64 = 0.12;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct CartSnapshot {
    items: BTreeMap<ProductId, u32>,
    notes: String,
}

/// A cart line joined against the current catalog.
#[derive(Debug, Clone)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    pub fn line_total(&self) -> f64 {
        parse_price(&self.product.precio) * self.quantity as f64
    }
}

/// App-wide cart store, provided via context from `App`.
#[derive(Clone, Copy)]
pub struct CartService {
    pub items: RwSignal<BTreeMap<ProductId, u32>>,
    pub notes: RwSignal<String>,
}

impl CartService {
    pub fn new() -> Self {
        let snapshot = load_snapshot().unwrap_or_default();
        Self {
            items: RwSignal::new(snapshot.items),
            notes: RwSignal::new(snapshot.notes),
        }
    }

    pub fn expect() -> Self {
        expect_context::<CartService>()
    }

    /// Add one unit of a product. Returns false without changing the cart
    /// when the requested total would exceed the known stock.
    pub fn add(&self, product: &Product) -> bool {
        let current = self.items.get_untracked().get(&product.id_producto).copied().unwrap_or(0);
        if !fits_stock(current, product.stock) {
            return false;
        }
        self.items.update(|items| {
            *items.entry(product.id_producto).or_insert(0) += 1;
        });
        self.persist();
        true
    }

    /// Set the quantity of a line directly; zero removes the line.
    pub fn set_quantity(&self, id: ProductId, quantity: u32) {
        self.items.update(|items| {
            if quantity == 0 {
                items.remove(&id);
            } else {
                items.insert(id, quantity);
            }
        });
        self.persist();
    }

    pub fn remove(&self, id: ProductId) {
        self.items.update(|items| {
            items.remove(&id);
        });
        self.persist();
    }

    /// Empty the cart in memory and in localStorage.
    pub fn clear(&self) {
        self.items.update(|items| items.clear());
        self.notes.set(String::new());
        if let Some(storage) = storage() {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }

    pub fn set_notes(&self, notes: String) {
        self.notes.set(notes);
        self.persist();
    }

    /// Total number of units across all lines (the header badge).
    pub fn total_units(&self) -> u32 {
        self.items.get().values().sum()
    }

    fn persist(&self) {
        let snapshot = CartSnapshot {
            items: self.items.get_untracked(),
            notes: self.notes.get_untracked(),
        };
        if let (Some(storage), Ok(json)) = (storage(), serde_json::to_string(&snapshot)) {
            let _ = storage.set_item(STORAGE_KEY, &json);
        }
    }
}

/// Whether one more unit fits within the known stock. Negative stock counts
/// as zero, the same clamp the catalog badges apply.
pub fn fits_stock(current: u32, stock: i32) -> bool {
    (current as i64) < stock.max(0) as i64
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn load_snapshot() -> Option<CartSnapshot> {
    let json = storage()?.get_item(STORAGE_KEY).ok().flatten()?;
    serde_json::from_str(&json).ok()
}

/// Join cart quantities against the fetched catalog. Lines whose product
/// no longer exists are dropped silently.
pub fn join_lines(items: &BTreeMap<ProductId, u32>, products: &[Product]) -> Vec<CartLine> {
    items
        .iter()
        .filter_map(|(id, qty)| {
            products.iter().find(|p| p.id_producto == *id).map(|p| CartLine {
                product: p.clone(),
                quantity: *qty,
            })
        })
        .collect()
}

pub fn subtotal(lines: &[CartLine]) -> f64 {
    lines.iter().map(|l| l.line_total()).sum()
}

pub fn tax(subtotal: f64) -> f64 {
    subtotal * IVA_RATE
}

pub fn total(subtotal: f64) -> f64 {
    subtotal + tax(subtotal)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, precio: &str, stock: i32) -> Product {
        Product {
            id_producto: ProductId::new(id),
            nombre: format!("Producto {}", id),
            precio: precio.to_string(),
            stock,
            imagen_url: None,
            categoria: "general".to_string(),
        }
    }

    #[test]
    fn test_join_lines_drops_unknown_products() {
        let mut items = BTreeMap::new();
        items.insert(ProductId::new(1), 2);
        items.insert(ProductId::new(99), 1);

        let catalog = vec![product(1, "10.00", 5)];
        let lines = join_lines(&items, &catalog);

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].quantity, 2);
    }

    #[test]
    fn test_line_total_and_subtotal() {
        let mut items = BTreeMap::new();
        items.insert(ProductId::new(1), 2);
        items.insert(ProductId::new(2), 1);

        let catalog = vec![product(1, "10.50", 5), product(2, "4.00", 5)];
        let lines = join_lines(&items, &catalog);

        assert_eq!(subtotal(&lines), 25.0);
    }

    #[test]
    fn test_tax_and_total() {
        let sub = 100.0;
        assert!((tax(sub) - 12.0).abs() < 1e-9);
        assert!((total(sub) - 112.0).abs() < 1e-9);
    }

    #[test]
    fn test_fits_stock_clamps_negative_to_zero() {
        assert!(!fits_stock(0, -3));
        assert!(!fits_stock(0, 0));
        assert!(fits_stock(0, 1));
        assert!(fits_stock(4, 5));
        assert!(!fits_stock(5, 5));
    }

    #[test]
    fn test_snapshot_serde_round_trip() {
        let mut items = BTreeMap::new();
        items.insert(ProductId::new(3), 4);
        let snapshot = CartSnapshot {
            items,
            notes: "entregar en la tarde".to_string(),
        };

        let json = serde_json::to_string(&snapshot).unwrap();
        let back: CartSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.items.get(&ProductId::new(3)), Some(&4));
        assert_eq!(back.notes, "entregar en la tarde");
    }
}
