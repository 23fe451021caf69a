//! HTTP service layer for the product catalog.
//!
//! One function per backend operation, no retries, no request
//! de-duplication. Every call is guarded by a 10 second abort timer.

use contracts::domain::product::aggregate::{Product, ProductDto, UpdateProductDto};
use contracts::shared::envelope;
use gloo_net::http::{Request, Response};
use gloo_timers::callback::Timeout;
use web_sys::AbortController;

use crate::shared::api_utils::api_url;

const REQUEST_TIMEOUT_MS: u32 = 10_000;

/// Abort signal that fires after `REQUEST_TIMEOUT_MS`. The returned timer
/// cancels on drop, so holding it until the response arrives is enough.
fn timeout_signal() -> (Option<web_sys::AbortSignal>, Option<Timeout>) {
    let Ok(controller) = AbortController::new() else {
        return (None, None);
    };
    let signal = controller.signal();
    let timer = Timeout::new(REQUEST_TIMEOUT_MS, move || controller.abort());
    (Some(signal), Some(timer))
}

/// Best-effort error message extraction: prefer a `message` or `error`
/// field from the body, fall back to the status code.
async fn error_message(response: Response) -> String {
    let status = response.status();
    if let Ok(body) = response.json::<serde_json::Value>().await {
        for key in ["message", "error"] {
            if let Some(msg) = body.get(key).and_then(|v| v.as_str()) {
                return msg.to_string();
            }
        }
    }
    format!("HTTP {}", status)
}

/// Decode a normalized collection into products, dropping candidates that
/// do not decode. Diagnostics are debug-build only.
fn decode_products(body: serde_json::Value) -> Vec<Product> {
    envelope::extract_collection(body)
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<Product>(item) {
            Ok(product) => Some(product),
            Err(e) => {
                if cfg!(debug_assertions) {
                    log::debug!("skipping malformed product record: {}", e);
                }
                None
            }
        })
        .collect()
}

pub async fn fetch_products() -> Result<Vec<Product>, String> {
    let (signal, _timer) = timeout_signal();
    let response = Request::get(&api_url("/products"))
        .abort_signal(signal.as_ref())
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    let body: serde_json::Value = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;
    Ok(decode_products(body))
}

pub async fn fetch_product(id: &str) -> Result<Product, String> {
    let (signal, _timer) = timeout_signal();
    let response = Request::get(&api_url(&format!("/products/{}", id)))
        .abort_signal(signal.as_ref())
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json::<Product>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Create a product; returns the created record with its server-assigned id.
pub async fn create_product(dto: &ProductDto) -> Result<Product, String> {
    let (signal, _timer) = timeout_signal();
    let response = Request::post(&api_url("/products"))
        .abort_signal(signal.as_ref())
        .header("Accept", "application/json")
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json::<Product>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn update_product(id: &str, dto: &UpdateProductDto) -> Result<(), String> {
    let (signal, _timer) = timeout_signal();
    let response = Request::patch(&api_url(&format!("/products/{}", id)))
        .abort_signal(signal.as_ref())
        .header("Accept", "application/json")
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }
    Ok(())
}

pub async fn delete_product(id: &str) -> Result<(), String> {
    let (signal, _timer) = timeout_signal();
    let response = Request::delete(&api_url(&format!("/products/{}", id)))
        .abort_signal(signal.as_ref())
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::decode_products;
    use serde_json::json;

    #[test]
    fn decode_accepts_bare_arrays_and_envelopes() {
        let id = uuid::Uuid::new_v4().to_string();
        let bare = json!([{"id": id, "name": "Widget", "price": 9.5}]);
        let products = decode_products(bare);
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Widget");

        let wrapped = json!({"products": [{"id": id, "name": "Widget", "price": 9.5}]});
        assert_eq!(decode_products(wrapped).len(), 1);
    }

    #[test]
    fn decode_drops_malformed_records() {
        let id = uuid::Uuid::new_v4().to_string();
        let body = json!([
            {"id": id, "name": "Widget", "price": 9.5},
            {"id": "not-a-uuid", "name": "Broken", "price": 1.0},
            {"name": "missing id"},
            42
        ]);
        let products = decode_products(body);
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Widget");
    }

    #[test]
    fn decode_degrades_to_empty_on_unknown_shapes() {
        assert!(decode_products(json!({"message": "oops"})).is_empty());
        assert!(decode_products(json!(null)).is_empty());
    }
}
