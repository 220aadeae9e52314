use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::purchases::models::Purchase;
use crate::shared::validation::STATUS_REGEX;

/// Status given to purchases recorded without one
pub const DEFAULT_PURCHASE_STATUS: &str = "pending";

/// Request DTO for recording or replacing a purchase
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct PurchaseRequestDto {
    pub customer_id: i64,

    pub store_id: Option<i64>,

    pub product_id: i64,

    #[validate(range(min = 1, message = "Quantity must be positive"))]
    pub quantity: i32,

    #[serde(default, with = "rust_decimal::serde::float_option")]
    #[validate(custom(function = "crate::shared::validation::money_amount"))]
    #[schema(value_type = Option<f64>, example = 49.8)]
    pub total_price: Option<Decimal>,

    pub delivery_id: Option<i64>,

    /// Lowercase snake_case status, defaults to "pending"
    #[validate(length(max = 50), regex(path = *STATUS_REGEX, message = "status must be lowercase words separated by '_'"))]
    pub status: Option<String>,
}

impl PurchaseRequestDto {
    pub fn status_or_default(&self) -> &str {
        self.status.as_deref().unwrap_or(DEFAULT_PURCHASE_STATUS)
    }
}

/// Response DTO for purchase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PurchaseResponseDto {
    pub id: i64,
    pub customer_id: i64,
    pub store_id: Option<i64>,
    pub product_id: i64,
    pub quantity: i32,
    #[serde(with = "rust_decimal::serde::float_option")]
    #[schema(value_type = Option<f64>)]
    pub total_price: Option<Decimal>,
    pub delivery_id: Option<i64>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Purchase> for PurchaseResponseDto {
    fn from(p: Purchase) -> Self {
        Self {
            id: p.id,
            customer_id: p.customer_id,
            store_id: p.store_id,
            product_id: p.product_id,
            quantity: p.quantity,
            total_price: p.total_price,
            delivery_id: p.delivery_id,
            status: p.status,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_defaults_to_pending() {
        let dto: PurchaseRequestDto =
            serde_json::from_value(json!({ "customer_id": 1, "product_id": 2, "quantity": 1 }))
                .unwrap();

        assert!(dto.validate().is_ok());
        assert_eq!(dto.total_price, None);
        assert_eq!(dto.status_or_default(), "pending");
    }

    #[test]
    fn test_zero_quantity_is_rejected() {
        let dto: PurchaseRequestDto =
            serde_json::from_value(json!({ "customer_id": 1, "product_id": 2, "quantity": 0 }))
                .unwrap();

        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("quantity"));
    }

    #[test]
    fn test_total_price_must_fit_money_column() {
        for total in [json!(12.345), json!(25e9), json!(-1)] {
            let dto: PurchaseRequestDto = serde_json::from_value(json!({
                "customer_id": 1,
                "product_id": 2,
                "quantity": 1,
                "total_price": total
            }))
            .unwrap();

            let errors = dto.validate().unwrap_err();
            assert!(errors.field_errors().contains_key("total_price"));
        }
    }

    #[test]
    fn test_malformed_status_is_rejected() {
        let dto: PurchaseRequestDto = serde_json::from_value(json!({
            "customer_id": 1,
            "product_id": 2,
            "quantity": 1,
            "status": "In Delivery"
        }))
        .unwrap();

        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("status"));
    }

    #[test]
    fn test_missing_customer_fails_to_decode() {
        let result = serde_json::from_value::<PurchaseRequestDto>(json!({
            "product_id": 2,
            "quantity": 1
        }));
        assert!(result.is_err());
    }
}
