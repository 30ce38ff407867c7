use crate::shared::api_utils::{post_form_data, post_json};
use contracts::domain::a002_product::{Product, ProductDto, UploadResponse};
use web_sys::{File, FormData};

/// Upload a product image; the returned URL goes into the create request.
pub async fn upload_image(file: File) -> Result<String, String> {
    let form = FormData::new().map_err(|e| format!("{e:?}"))?;
    form.append_with_blob("file", &file)
        .map_err(|e| format!("{e:?}"))?;
    let resp: UploadResponse = post_form_data("/api/productos/upload", &form).await?;
    Ok(resp.url)
}

pub async fn save_form(dto: ProductDto) -> Result<Product, String> {
    post_json("/api/productos", &dto).await
}
