use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{handle_db_error, AppError, Result};
use crate::features::categories::dtos::{CategoryRequestDto, CategoryResponseDto};
use crate::features::categories::models::Category;

pub const CATEGORY_NOT_FOUND: &str = "категория не найдена";
const CATEGORY_IN_USE: &str = "категория используется товарами";

/// Data access operations for categories
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<CategoryResponseDto>>;
    async fn get_by_id(&self, id: i64) -> Result<CategoryResponseDto>;
    async fn create(&self, dto: CategoryRequestDto) -> Result<CategoryResponseDto>;
    async fn update(&self, id: i64, dto: CategoryRequestDto) -> Result<CategoryResponseDto>;
    async fn delete(&self, id: i64) -> Result<()>;
}

/// Postgres-backed category service
pub struct CategoryService {
    pool: PgPool,
}

impl CategoryService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for CategoryService {
    async fn list(&self) -> Result<Vec<CategoryResponseDto>> {
        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, store_id, created_at, updated_at
            FROM categories
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list categories: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(categories.into_iter().map(|c| c.into()).collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<CategoryResponseDto> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, store_id, created_at, updated_at
            FROM categories
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get category {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        category
            .map(|c| c.into())
            .ok_or_else(|| AppError::NotFound(CATEGORY_NOT_FOUND.to_string()))
    }

    async fn create(&self, dto: CategoryRequestDto) -> Result<CategoryResponseDto> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (name, store_id)
            VALUES ($1, $2)
            RETURNING id, name, store_id, created_at, updated_at
            "#,
        )
        .bind(&dto.name)
        .bind(dto.store_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create category: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!("Category created: id={}, name={}", category.id, category.name);

        Ok(category.into())
    }

    async fn update(&self, id: i64, dto: CategoryRequestDto) -> Result<CategoryResponseDto> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            UPDATE categories
            SET name = $1,
                store_id = $2,
                updated_at = NOW()
            WHERE id = $3
            RETURNING id, name, store_id, created_at, updated_at
            "#,
        )
        .bind(&dto.name)
        .bind(dto.store_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update category {}: {:?}", id, e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound(CATEGORY_NOT_FOUND.to_string()))?;

        Ok(category.into())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete category {}: {:?}", id, e);
                handle_db_error(e, CATEGORY_IN_USE)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(CATEGORY_NOT_FOUND.to_string()));
        }

        tracing::info!("Category deleted: id={}", id);

        Ok(())
    }
}
