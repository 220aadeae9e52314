use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath};
use crate::features::products::dtos::{ProductRequestDto, ProductResponseDto};
use crate::features::products::services::ProductRepository;
use crate::shared::types::MessageResponse;

/// List all products
#[utoipa::path(
    get,
    path = "/api/v1/products",
    responses(
        (status = 200, description = "List of products", body = Vec<ProductResponseDto>),
        (status = 401, description = "Missing authorization header")
    ),
    tag = "products",
    security(("bearer_auth" = []))
)]
pub async fn list_products(
    State(service): State<Arc<dyn ProductRepository>>,
) -> Result<Json<Vec<ProductResponseDto>>> {
    let products = service.list().await?;
    Ok(Json(products))
}

/// Get product by id
#[utoipa::path(
    get,
    path = "/api/v1/products/{id}",
    params(
        ("id" = i64, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product found", body = ProductResponseDto),
        (status = 404, description = "Product not found")
    ),
    tag = "products",
    security(("bearer_auth" = []))
)]
pub async fn get_product(
    State(service): State<Arc<dyn ProductRepository>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ProductResponseDto>> {
    let product = service.get_by_id(id).await?;
    Ok(Json(product))
}

/// Create a product
///
/// The referenced category must already exist.
#[utoipa::path(
    post,
    path = "/api/v1/products",
    request_body = ProductRequestDto,
    responses(
        (status = 200, description = "Product created", body = ProductResponseDto),
        (status = 400, description = "Validation error or unknown category")
    ),
    tag = "products",
    security(("bearer_auth" = []))
)]
pub async fn create_product(
    State(service): State<Arc<dyn ProductRepository>>,
    AppJson(dto): AppJson<ProductRequestDto>,
) -> Result<Json<ProductResponseDto>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let product = service.create(dto).await?;
    Ok(Json(product))
}

/// Replace a product
#[utoipa::path(
    put,
    path = "/api/v1/products/{id}",
    params(
        ("id" = i64, Path, description = "Product id")
    ),
    request_body = ProductRequestDto,
    responses(
        (status = 200, description = "Product updated", body = ProductResponseDto),
        (status = 400, description = "Validation error or unknown category"),
        (status = 404, description = "Product not found")
    ),
    tag = "products",
    security(("bearer_auth" = []))
)]
pub async fn update_product(
    State(service): State<Arc<dyn ProductRepository>>,
    AppPath(id): AppPath<i64>,
    AppJson(dto): AppJson<ProductRequestDto>,
) -> Result<Json<ProductResponseDto>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let product = service.update(id, dto).await?;
    Ok(Json(product))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/api/v1/products/{id}",
    params(
        ("id" = i64, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product deleted", body = MessageResponse),
        (status = 400, description = "Product is still referenced by purchases"),
        (status = 404, description = "Product not found")
    ),
    tag = "products",
    security(("bearer_auth" = []))
)]
pub async fn delete_product(
    State(service): State<Arc<dyn ProductRepository>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<MessageResponse>> {
    service.delete(id).await?;
    Ok(Json(MessageResponse::new("продукт удалён")))
}
