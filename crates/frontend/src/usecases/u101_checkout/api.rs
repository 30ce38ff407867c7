use crate::shared::api_utils::{get_json, post_json};
use contracts::domain::a001_client::Client;
use contracts::domain::a002_product::Product;
use contracts::domain::a003_order::{CreateOrderRequest, Order};

pub async fn fetch_products() -> Result<Vec<Product>, String> {
    get_json("/api/productos").await
}

pub async fn fetch_clients() -> Result<Vec<Client>, String> {
    get_json("/api/clientes").await
}

pub async fn create_order(request: &CreateOrderRequest) -> Result<Order, String> {
    post_json("/api/ordenes", request).await
}
