use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

/// Database model for purchase
#[derive(Debug, Clone, FromRow)]
pub struct Purchase {
    pub id: i64,
    pub customer_id: i64,
    pub store_id: Option<i64>,
    pub product_id: i64,
    pub quantity: i32,
    pub total_price: Option<Decimal>,
    pub delivery_id: Option<i64>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
