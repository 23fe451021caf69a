use axum::extract::Path;
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::product::aggregate::{Product, ProductDto, UpdateProductDto};
use serde_json::json;

use crate::domain::product::service::{self, ProductServiceError};

type ErrorBody = (StatusCode, Json<serde_json::Value>);

fn bad_request(message: impl Into<String>) -> ErrorBody {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "message": message.into() })),
    )
}

fn map_service_error(e: ProductServiceError) -> ErrorBody {
    match e {
        ProductServiceError::Validation(msg) => bad_request(msg),
        ProductServiceError::NotFound => (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "Product not found" })),
        ),
        ProductServiceError::Internal(err) => {
            tracing::error!("product operation failed: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "message": "Internal server error" })),
            )
        }
    }
}

/// GET /api/products
pub async fn list_all() -> Result<Json<Vec<Product>>, StatusCode> {
    match service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list products: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/products/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Product>, StatusCode> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(StatusCode::BAD_REQUEST),
    };
    match service::get_by_id(uuid).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// POST /api/products
pub async fn create(
    Json(body): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<Product>), ErrorBody> {
    let dto: ProductDto = serde_json::from_value(body)
        .map_err(|e| bad_request(format!("Invalid product payload: {}", e)))?;

    let product = service::create(dto).await.map_err(map_service_error)?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// PATCH /api/products/:id
pub async fn update(
    Path(id): Path<String>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<Product>, ErrorBody> {
    let uuid = uuid::Uuid::parse_str(&id).map_err(|_| bad_request("Invalid product id"))?;
    let dto: UpdateProductDto = serde_json::from_value(body)
        .map_err(|e| bad_request(format!("Invalid product payload: {}", e)))?;

    let product = service::update_partial(uuid, dto)
        .await
        .map_err(map_service_error)?;
    Ok(Json(product))
}

/// DELETE /api/products/:id
pub async fn delete(Path(id): Path<String>) -> Result<StatusCode, StatusCode> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(StatusCode::BAD_REQUEST),
    };
    match service::delete(uuid).await {
        Ok(true) => Ok(StatusCode::NO_CONTENT),
        Ok(false) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to delete product: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
