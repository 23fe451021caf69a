use super::repository;
use contracts::domain::product::aggregate::{Product, ProductDto, UpdateProductDto};
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum ProductServiceError {
    #[error("{0}")]
    Validation(String),
    #[error("product not found")]
    NotFound,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// Create a new product. The id is assigned here; the client never picks one.
pub async fn create(dto: ProductDto) -> Result<Product, ProductServiceError> {
    let product = Product::new_for_insert(dto.name.trim().to_string(), dto.price);

    product
        .validate()
        .map_err(ProductServiceError::Validation)?;

    repository::insert(&product).await?;
    Ok(product)
}

/// Partial update: absent fields keep their stored value. The merged record
/// is re-validated before writing.
pub async fn update_partial(
    id: Uuid,
    dto: UpdateProductDto,
) -> Result<Product, ProductServiceError> {
    let mut product = repository::get_by_id(id)
        .await?
        .ok_or(ProductServiceError::NotFound)?;

    product.apply(&dto);
    product
        .validate()
        .map_err(ProductServiceError::Validation)?;

    repository::update(&product).await?;
    Ok(product)
}

pub async fn delete(id: Uuid) -> anyhow::Result<bool> {
    repository::delete(id).await
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Product>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> anyhow::Result<Vec<Product>> {
    repository::list_all().await
}
