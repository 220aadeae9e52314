use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{handle_db_error, AppError, Result};
use crate::features::purchases::dtos::{PurchaseRequestDto, PurchaseResponseDto};
use crate::features::purchases::models::Purchase;

pub const PURCHASE_NOT_FOUND: &str = "покупка не найдена";
pub const PRODUCT_DOES_NOT_EXIST: &str = "продукт не существует";

/// Data access operations for purchases
#[async_trait]
pub trait PurchaseRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<PurchaseResponseDto>>;
    async fn get_by_id(&self, id: i64) -> Result<PurchaseResponseDto>;
    async fn create(&self, dto: PurchaseRequestDto) -> Result<PurchaseResponseDto>;
    async fn update(&self, id: i64, dto: PurchaseRequestDto) -> Result<PurchaseResponseDto>;
    async fn delete(&self, id: i64) -> Result<()>;
}

/// Postgres-backed purchase service
pub struct PurchaseService {
    pool: PgPool,
}

impl PurchaseService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PurchaseRepository for PurchaseService {
    async fn list(&self) -> Result<Vec<PurchaseResponseDto>> {
        let purchases = sqlx::query_as::<_, Purchase>(
            r#"
            SELECT id, customer_id, store_id, product_id, quantity, total_price,
                   delivery_id, status, created_at, updated_at
            FROM purchases
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list purchases: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(purchases.into_iter().map(|p| p.into()).collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<PurchaseResponseDto> {
        let purchase = sqlx::query_as::<_, Purchase>(
            r#"
            SELECT id, customer_id, store_id, product_id, quantity, total_price,
                   delivery_id, status, created_at, updated_at
            FROM purchases
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get purchase {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        purchase
            .map(|p| p.into())
            .ok_or_else(|| AppError::NotFound(PURCHASE_NOT_FOUND.to_string()))
    }

    async fn create(&self, dto: PurchaseRequestDto) -> Result<PurchaseResponseDto> {
        let purchase = sqlx::query_as::<_, Purchase>(
            r#"
            INSERT INTO purchases (
                customer_id, store_id, product_id, quantity, total_price, delivery_id, status
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, customer_id, store_id, product_id, quantity, total_price,
                      delivery_id, status, created_at, updated_at
            "#,
        )
        .bind(dto.customer_id)
        .bind(dto.store_id)
        .bind(dto.product_id)
        .bind(dto.quantity)
        .bind(dto.total_price)
        .bind(dto.delivery_id)
        .bind(dto.status_or_default())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create purchase: {:?}", e);
            handle_db_error(e, PRODUCT_DOES_NOT_EXIST)
        })?;

        tracing::info!(
            "Purchase created: id={}, customer_id={}, product_id={}, quantity={}",
            purchase.id,
            purchase.customer_id,
            purchase.product_id,
            purchase.quantity
        );

        Ok(purchase.into())
    }

    async fn update(&self, id: i64, dto: PurchaseRequestDto) -> Result<PurchaseResponseDto> {
        let purchase = sqlx::query_as::<_, Purchase>(
            r#"
            UPDATE purchases
            SET customer_id = $1,
                store_id = $2,
                product_id = $3,
                quantity = $4,
                total_price = $5,
                delivery_id = $6,
                status = $7,
                updated_at = NOW()
            WHERE id = $8
            RETURNING id, customer_id, store_id, product_id, quantity, total_price,
                      delivery_id, status, created_at, updated_at
            "#,
        )
        .bind(dto.customer_id)
        .bind(dto.store_id)
        .bind(dto.product_id)
        .bind(dto.quantity)
        .bind(dto.total_price)
        .bind(dto.delivery_id)
        .bind(dto.status_or_default())
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update purchase {}: {:?}", id, e);
            handle_db_error(e, PRODUCT_DOES_NOT_EXIST)
        })?
        .ok_or_else(|| AppError::NotFound(PURCHASE_NOT_FOUND.to_string()))?;

        Ok(purchase.into())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM purchases WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete purchase {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(PURCHASE_NOT_FOUND.to_string()));
        }

        tracing::info!("Purchase deleted: id={}", id);

        Ok(())
    }
}
