use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

/// Database model for product
#[derive(Debug, Clone, FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
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
