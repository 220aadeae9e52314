use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::purchases::handlers;
use crate::features::purchases::services::PurchaseRepository;

/// Create routes for the purchases feature (mounted under `/api/v1`)
pub fn routes(service: Arc<dyn PurchaseRepository>) -> Router {
    Router::new()
        .route(
            "/purchases",
            get(handlers::list_purchases).post(handlers::create_purchase),
        )
        .route(
            "/purchases/{id}",
            get(handlers::get_purchase)
                .put(handlers::update_purchase)
                .delete(handlers::delete_purchase),
        )
        .with_state(service)
}
