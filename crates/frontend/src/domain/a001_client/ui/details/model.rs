use crate::shared::api_utils::post_json;
use contracts::domain::a001_client::{Client, ClientDto};

/// Register a new client. The form payload is folded into the
/// three-column wire shape before sending.
pub async fn save_form(dto: ClientDto) -> Result<Client, String> {
    post_json("/api/clientes", &dto.to_request()).await
}
