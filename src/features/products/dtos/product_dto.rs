use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::products::models::Product;

/// Request DTO for creating or replacing a product.
///
/// Updates are full replacements: optional device attributes that are left
/// out are reset to their defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ProductRequestDto {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(with = "rust_decimal::serde::float")]
    #[validate(custom(function = "crate::shared::validation::money_amount"))]
    #[schema(value_type = f64, example = 24.9)]
    pub price: Decimal,

    #[serde(default)]
    pub image_url: String,

    pub category_id: i64,

    pub manufacturer_id: Option<i64>,

    #[serde(default)]
    #[validate(range(min = 0, message = "Stock must not be negative"))]
    pub stock: i32,

    /// Device type, e.g. "pod", "mod", "disposable"
    #[serde(default)]
    #[validate(length(max = 100))]
    pub vape_type: String,

    /// Output power in watts
    #[serde(default)]
    pub power: i32,

    /// Battery capacity in mAh
    #[serde(default)]
    pub battery_capacity: i32,

    /// Tank capacity in ml
    #[serde(default)]
    pub tank_capacity: f64,

    /// Coil resistance in ohms
    #[serde(default)]
    pub coil_resistance: f64,

    #[serde(default)]
    #[validate(length(max = 100))]
    pub material: String,

    #[serde(default)]
    #[validate(length(max = 100))]
    pub color: String,

    #[serde(default)]
    pub is_new: bool,

    #[serde(default)]
    pub is_featured: bool,
}

/// Response DTO for product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductResponseDto {
    pub id: i64,
    pub name: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub price: Decimal,
    pub image_url: String,
    pub category_id: i64,
    pub manufacturer_id: Option<i64>,
    pub stock: i32,
    pub vape_type: String,
    pub power: i32,
    pub battery_capacity: i32,
    pub tank_capacity: f64,
    pub coil_resistance: f64,
    pub material: String,
    pub color: String,
    pub is_new: bool,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponseDto {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            description: p.description,
            price: p.price,
            image_url: p.image_url,
            category_id: p.category_id,
            manufacturer_id: p.manufacturer_id,
            stock: p.stock,
            vape_type: p.vape_type,
            power: p.power,
            battery_capacity: p.battery_capacity,
            tank_capacity: p.tank_capacity,
            coil_resistance: p.coil_resistance,
            material: p.material,
            color: p.color,
            is_new: p.is_new,
            is_featured: p.is_featured,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}
