use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};

use crate::core::error::{handle_db_error, AppError, Result};
use crate::features::products::dtos::{ProductRequestDto, ProductResponseDto};
use crate::features::products::models::Product;

pub const PRODUCT_NOT_FOUND: &str = "продукт не найден";
pub const CATEGORY_DOES_NOT_EXIST: &str = "категория не существует";
const PRODUCT_IN_USE: &str = "продукт используется в покупках";

/// Data access operations for products
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<ProductResponseDto>>;
    async fn get_by_id(&self, id: i64) -> Result<ProductResponseDto>;
    async fn create(&self, dto: ProductRequestDto) -> Result<ProductResponseDto>;
    async fn update(&self, id: i64, dto: ProductRequestDto) -> Result<ProductResponseDto>;
    async fn delete(&self, id: i64) -> Result<()>;
}

/// Postgres-backed product service
pub struct ProductService {
    pool: PgPool,
}

impl ProductService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fail with a validation error unless the category row exists
    async fn ensure_category_exists(conn: &mut PgConnection, category_id: i64) -> Result<()> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM categories WHERE id = $1)")
                .bind(category_id)
                .fetch_one(conn)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to check category {}: {:?}", category_id, e);
                    AppError::Database(e)
                })?;

        if !exists {
            return Err(AppError::Validation(CATEGORY_DOES_NOT_EXIST.to_string()));
        }

        Ok(())
    }
}

#[async_trait]
impl ProductRepository for ProductService {
    async fn list(&self) -> Result<Vec<ProductResponseDto>> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, description, price, image_url, category_id, manufacturer_id,
                   stock, vape_type, power, battery_capacity, tank_capacity, coil_resistance,
                   material, color, is_new, is_featured, created_at, updated_at
            FROM products
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list products: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(products.into_iter().map(|p| p.into()).collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<ProductResponseDto> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, description, price, image_url, category_id, manufacturer_id,
                   stock, vape_type, power, battery_capacity, tank_capacity, coil_resistance,
                   material, color, is_new, is_featured, created_at, updated_at
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get product {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        product
            .map(|p| p.into())
            .ok_or_else(|| AppError::NotFound(PRODUCT_NOT_FOUND.to_string()))
    }

    async fn create(&self, dto: ProductRequestDto) -> Result<ProductResponseDto> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        Self::ensure_category_exists(&mut tx, dto.category_id).await?;

        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (
                name, description, price, image_url, category_id, manufacturer_id,
                stock, vape_type, power, battery_capacity, tank_capacity, coil_resistance,
                material, color, is_new, is_featured
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
            RETURNING id, name, description, price, image_url, category_id, manufacturer_id,
                      stock, vape_type, power, battery_capacity, tank_capacity, coil_resistance,
                      material, color, is_new, is_featured, created_at, updated_at
            "#,
        )
        .bind(&dto.name)
        .bind(&dto.description)
        .bind(dto.price)
        .bind(&dto.image_url)
        .bind(dto.category_id)
        .bind(dto.manufacturer_id)
        .bind(dto.stock)
        .bind(&dto.vape_type)
        .bind(dto.power)
        .bind(dto.battery_capacity)
        .bind(dto.tank_capacity)
        .bind(dto.coil_resistance)
        .bind(&dto.material)
        .bind(&dto.color)
        .bind(dto.is_new)
        .bind(dto.is_featured)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create product: {:?}", e);
            handle_db_error(e, CATEGORY_DOES_NOT_EXIST)
        })?;

        tx.commit().await.map_err(AppError::Database)?;

        tracing::info!(
            "Product created: id={}, category_id={}",
            product.id,
            product.category_id
        );

        Ok(product.into())
    }

    /// A missing product is reported before a bad category; the latter
    /// surfaces as a foreign key violation.
    async fn update(&self, id: i64, dto: ProductRequestDto) -> Result<ProductResponseDto> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            UPDATE products
            SET name = $1,
                description = $2,
                price = $3,
                image_url = $4,
                category_id = $5,
                manufacturer_id = $6,
                stock = $7,
                vape_type = $8,
                power = $9,
                battery_capacity = $10,
                tank_capacity = $11,
                coil_resistance = $12,
                material = $13,
                color = $14,
                is_new = $15,
                is_featured = $16,
                updated_at = NOW()
            WHERE id = $17
            RETURNING id, name, description, price, image_url, category_id, manufacturer_id,
                      stock, vape_type, power, battery_capacity, tank_capacity, coil_resistance,
                      material, color, is_new, is_featured, created_at, updated_at
            "#,
        )
        .bind(&dto.name)
        .bind(&dto.description)
        .bind(dto.price)
        .bind(&dto.image_url)
        .bind(dto.category_id)
        .bind(dto.manufacturer_id)
        .bind(dto.stock)
        .bind(&dto.vape_type)
        .bind(dto.power)
        .bind(dto.battery_capacity)
        .bind(dto.tank_capacity)
        .bind(dto.coil_resistance)
        .bind(&dto.material)
        .bind(&dto.color)
        .bind(dto.is_new)
        .bind(dto.is_featured)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update product {}: {:?}", id, e);
            handle_db_error(e, CATEGORY_DOES_NOT_EXIST)
        })?
        .ok_or_else(|| AppError::NotFound(PRODUCT_NOT_FOUND.to_string()))?;

        Ok(product.into())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete product {}: {:?}", id, e);
                handle_db_error(e, PRODUCT_IN_USE)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(PRODUCT_NOT_FOUND.to_string()));
        }

        tracing::info!("Product deleted: id={}", id);

        Ok(())
    }
}
