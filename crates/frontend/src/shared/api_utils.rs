//! API utilities for frontend-backend communication
//!
//! Provides helpers for constructing API URLs and issuing JSON requests.
//! Every helper resolves to `Result<_, String>`; callers decide whether the
//! failure becomes an inline error box or a blocking alert.

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{FormData, Request, RequestInit, RequestMode, Response};

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location, using
/// port 8080 for the API gateway.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:8080", protocol, hostname)
}

/// Build a full API URL from a path (should start with "/api/").
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

async fn send(request: Request) -> Result<Response, String> {
    let url = request.url();
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| {
            log::error!("fetch {} failed: {:?}", url, e);
            format!("Fetch failed: {:?}", e)
        })?;
    let resp: Response = resp_value.dyn_into().map_err(|_| "Not a Response")?;
    if !resp.ok() {
        log::error!("{} answered HTTP {}", url, resp.status());
        return Err(format!("HTTP {}", resp.status()));
    }
    Ok(resp)
}

async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, String> {
    let json = wasm_bindgen_futures::JsFuture::from(
        resp.json().map_err(|e| format!("Failed to parse JSON: {:?}", e))?,
    )
    .await
    .map_err(|e| format!("Failed to get JSON: {:?}", e))?;
    serde_wasm_bindgen::from_value(json).map_err(|e| e.to_string())
}

fn json_request(method: &str, path: &str, body: Option<&JsValue>) -> Result<Request, String> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);
    if let Some(body) = body {
        opts.set_body(body);
    }

    let request = Request::new_with_str_and_init(&api_url(path), &opts)
        .map_err(|e| format!("Failed to create request: {:?}", e))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("Failed to set header: {:?}", e))?;
    if body.is_some() {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(|e| format!("Failed to set header: {:?}", e))?;
    }
    Ok(request)
}

/// `GET` a JSON resource.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let request = json_request("GET", path, None)?;
    read_json(send(request).await?).await
}

/// `POST` a JSON body and decode the JSON response.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, String> {
    let body = serde_json::to_string(body).map_err(|e| e.to_string())?;
    let request = json_request("POST", path, Some(&JsValue::from_str(&body)))?;
    read_json(send(request).await?).await
}

/// `PUT` a JSON body and decode the JSON response.
pub async fn put_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, String> {
    let body = serde_json::to_string(body).map_err(|e| e.to_string())?;
    let request = json_request("PUT", path, Some(&JsValue::from_str(&body)))?;
    read_json(send(request).await?).await
}

/// `POST` without a body (actions addressed purely by the URL, e.g. the
/// payment simulation endpoint).
pub async fn post_empty<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let request = json_request("POST", path, None)?;
    read_json(send(request).await?).await
}

/// `POST` a multipart form (file uploads). The browser sets the multipart
/// Content-Type boundary itself, so no header is written here.
pub async fn post_form_data<T: DeserializeOwned>(path: &str, form: &FormData) -> Result<T, String> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(form.as_ref());

    let request = Request::new_with_str_and_init(&api_url(path), &opts)
        .map_err(|e| format!("Failed to create request: {:?}", e))?;
    read_json(send(request).await?).await
}
