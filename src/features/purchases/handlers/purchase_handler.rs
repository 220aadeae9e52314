use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath};
use crate::features::purchases::dtos::{PurchaseRequestDto, PurchaseResponseDto};
use crate::features::purchases::services::PurchaseRepository;
use crate::shared::types::MessageResponse;

/// List all purchases
#[utoipa::path(
    get,
    path = "/api/v1/purchases",
    responses(
        (status = 200, description = "List of purchases", body = Vec<PurchaseResponseDto>),
        (status = 401, description = "Missing authorization header")
    ),
    tag = "purchases",
    security(("bearer_auth" = []))
)]
pub async fn list_purchases(
    State(service): State<Arc<dyn PurchaseRepository>>,
) -> Result<Json<Vec<PurchaseResponseDto>>> {
    let purchases = service.list().await?;
    Ok(Json(purchases))
}

/// Get purchase by id
#[utoipa::path(
    get,
    path = "/api/v1/purchases/{id}",
    params(
        ("id" = i64, Path, description = "Purchase id")
    ),
    responses(
        (status = 200, description = "Purchase found", body = PurchaseResponseDto),
        (status = 404, description = "Purchase not found")
    ),
    tag = "purchases",
    security(("bearer_auth" = []))
)]
pub async fn get_purchase(
    State(service): State<Arc<dyn PurchaseRepository>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<PurchaseResponseDto>> {
    let purchase = service.get_by_id(id).await?;
    Ok(Json(purchase))
}

/// Record a purchase
#[utoipa::path(
    post,
    path = "/api/v1/purchases",
    request_body = PurchaseRequestDto,
    responses(
        (status = 200, description = "Purchase recorded", body = PurchaseResponseDto),
        (status = 400, description = "Validation error or unknown product")
    ),
    tag = "purchases",
    security(("bearer_auth" = []))
)]
pub async fn create_purchase(
    State(service): State<Arc<dyn PurchaseRepository>>,
    AppJson(dto): AppJson<PurchaseRequestDto>,
) -> Result<Json<PurchaseResponseDto>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let purchase = service.create(dto).await?;
    Ok(Json(purchase))
}

/// Replace a purchase
#[utoipa::path(
    put,
    path = "/api/v1/purchases/{id}",
    params(
        ("id" = i64, Path, description = "Purchase id")
    ),
    request_body = PurchaseRequestDto,
    responses(
        (status = 200, description = "Purchase updated", body = PurchaseResponseDto),
        (status = 400, description = "Validation error or unknown product"),
        (status = 404, description = "Purchase not found")
    ),
    tag = "purchases",
    security(("bearer_auth" = []))
)]
pub async fn update_purchase(
    State(service): State<Arc<dyn PurchaseRepository>>,
    AppPath(id): AppPath<i64>,
    AppJson(dto): AppJson<PurchaseRequestDto>,
) -> Result<Json<PurchaseResponseDto>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let purchase = service.update(id, dto).await?;
    Ok(Json(purchase))
}

/// Delete a purchase
#[utoipa::path(
    delete,
    path = "/api/v1/purchases/{id}",
    params(
        ("id" = i64, Path, description = "Purchase id")
    ),
    responses(
        (status = 200, description = "Purchase deleted", body = MessageResponse),
        (status = 404, description = "Purchase not found")
    ),
    tag = "purchases",
    security(("bearer_auth" = []))
)]
pub async fn delete_purchase(
    State(service): State<Arc<dyn PurchaseRepository>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<MessageResponse>> {
    service.delete(id).await?;
    Ok(Json(MessageResponse::new("покупка удалена")))
}
