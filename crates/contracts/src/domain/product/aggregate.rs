use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Unique identifier of a catalog product. Assigned by the server on create;
/// opaque to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub Uuid);

impl ProductId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }

    pub fn as_string(&self) -> String {
        self.0.to_string()
    }

    pub fn parse(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ProductId::new)
            .map_err(|e| format!("Invalid product id: {}", e))
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Catalog product. The server owns the record; the client keeps a transient
/// in-memory copy for rendering only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
}

impl Product {
    /// Create a new product for insertion, with a freshly generated id.
    pub fn new_for_insert(name: String, price: f64) -> Self {
        Self {
            id: ProductId::new_v4(),
            name,
            price,
        }
    }

    /// Create a product with a known id.
    pub fn new_with_id(id: ProductId, name: String, price: f64) -> Self {
        Self { id, name, price }
    }

    /// Apply a partial update. Absent fields keep their current value.
    pub fn apply(&mut self, dto: &UpdateProductDto) {
        if let Some(name) = &dto.name {
            self.name = name.clone();
        }
        if let Some(price) = dto.price {
            self.price = price;
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        validate_name(&self.name)?;
        validate_price(self.price)?;
        Ok(())
    }
}

// ============================================================================
// Validation
// ============================================================================

pub fn validate_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Name is required.".into());
    }
    Ok(())
}

pub fn validate_price(price: f64) -> Result<(), String> {
    if !price.is_finite() || price <= 0.0 {
        return Err("Price must be a positive number.".into());
    }
    Ok(())
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO for creating a product.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProductDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub price: f64,
}

impl ProductDto {
    pub fn validate(&self) -> Result<(), String> {
        validate_name(&self.name)?;
        validate_price(self.price)?;
        Ok(())
    }
}

/// DTO for partial updates. Both fields optional.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateProductDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_empty_name() {
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
        assert!(validate_name("Widget").is_ok());
    }

    #[test]
    fn validate_rejects_non_positive_price() {
        assert!(validate_price(0.0).is_err());
        assert!(validate_price(-1.5).is_err());
        assert!(validate_price(f64::NAN).is_err());
        assert!(validate_price(f64::INFINITY).is_err());
        assert!(validate_price(29.99).is_ok());
    }

    #[test]
    fn apply_keeps_absent_fields() {
        let mut product = Product::new_for_insert("Widget".into(), 10.0);
        product.apply(&UpdateProductDto {
            name: None,
            price: Some(12.5),
        });
        assert_eq!(product.name, "Widget");
        assert_eq!(product.price, 12.5);

        product.apply(&UpdateProductDto {
            name: Some("Gadget".into()),
            price: None,
        });
        assert_eq!(product.name, "Gadget");
        assert_eq!(product.price, 12.5);
    }

    #[test]
    fn product_id_round_trips_through_string() {
        let id = ProductId::new_v4();
        let parsed = ProductId::parse(&id.as_string()).unwrap();
        assert_eq!(id, parsed);
        assert!(ProductId::parse("not-a-uuid").is_err());
    }
}
