use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, http::StatusCode, middleware::from_fn, routing::get, Router};
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::core::config::Config;
use crate::core::error::AppError;
use crate::core::middleware;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::features::categories::{routes as categories_routes, CategoryRepository};
use crate::features::products::{routes as products_routes, ProductRepository};
use crate::features::purchases::{routes as purchases_routes, PurchaseRepository};

/// Repositories backing the resource routes
#[derive(Clone)]
pub struct AppServices {
    pub categories: Arc<dyn CategoryRepository>,
    pub products: Arc<dyn ProductRepository>,
    pub purchases: Arc<dyn PurchaseRepository>,
}

async fn health_check() -> StatusCode {
    StatusCode::OK
}

async fn api_not_found() -> AppError {
    AppError::NotFound("resource not found".to_string())
}

fn swagger_routes(config: &Config) -> Router {
    let swagger_modifier = SwaggerInfoModifier {
        title: config.swagger.title.clone(),
        version: config.swagger.version.clone(),
        description: config.swagger.description.clone(),
    };

    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

    let swagger =
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi));

    match config.swagger.credentials() {
        Some(credentials) => {
            tracing::info!("Swagger UI basic auth enabled");
            swagger.layer(from_fn(middleware::basic_auth_middleware(Arc::new(
                credentials,
            ))))
        }
        None => {
            tracing::info!("Swagger UI basic auth disabled (no credentials configured)");
            swagger
        }
    }
}

/// Build the full application router with its middleware stack
pub fn build_router(services: AppServices, config: &Config) -> Router {
    // Everything under /api/v1 requires an Authorization header, unknown paths included
    let api_routes = Router::new()
        .merge(categories_routes::routes(services.categories))
        .merge(products_routes::routes(services.products))
        .merge(purchases_routes::routes(services.purchases))
        .fallback(api_not_found)
        .layer(from_fn(middleware::auth_middleware));

    Router::new()
        .nest("/api/v1", api_routes)
        .route("/health", get(health_check))
        .merge(swagger_routes(config))
        .layer(DefaultBodyLimit::max(config.app.max_request_body_size))
        .layer(middleware::cors_layer(&config.app))
        .layer(from_fn(middleware::preflight_middleware))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header, HeaderValue, Method};
    use axum_test::TestServer;
    use serde_json::{json, Value};

    use crate::core::config::{AppConfig, DatabaseConfig, SwaggerConfig};
    use crate::shared::test_helpers::{InMemoryCategories, InMemoryProducts, InMemoryPurchases};

    fn test_config() -> Config {
        Config {
            app: AppConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
                cors_allowed_origins: vec!["*".to_string()],
                cors_allowed_methods: vec!["*".to_string()],
                cors_allowed_headers: vec!["*".to_string()],
                max_request_body_size: 1024 * 1024,
            },
            database: DatabaseConfig {
                url: "postgres://localhost/vapeshop".to_string(),
                max_connections: 1,
                min_connections: 0,
                acquire_timeout_secs: 1,
                idle_timeout_secs: 1,
                max_lifetime_secs: 1,
                connect_timeout_secs: 1,
            },
            swagger: SwaggerConfig {
                username: None,
                password: None,
                title: "VapeShop Client API".to_string(),
                version: "0.1.0".to_string(),
                description: "test".to_string(),
            },
        }
    }

    fn server() -> TestServer {
        let categories = InMemoryCategories::shared();
        let services = AppServices {
            categories: categories.clone(),
            products: Arc::new(InMemoryProducts::new(categories)),
            purchases: InMemoryPurchases::shared(),
        };
        TestServer::new(build_router(services, &test_config())).unwrap()
    }

    fn token() -> HeaderValue {
        HeaderValue::from_static("Bearer test-token")
    }

    #[tokio::test]
    async fn test_missing_authorization_is_401() {
        let response = server().get("/api/v1/categories").await;

        response.assert_status(StatusCode::UNAUTHORIZED);
        let body: Value = response.json();
        assert_eq!(body, json!({ "error": "Invalid authentication token" }));
    }

    #[tokio::test]
    async fn test_blank_authorization_is_401() {
        server()
            .get("/api/v1/products")
            .add_header(header::AUTHORIZATION, HeaderValue::from_static("   "))
            .await
            .assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_non_ascii_authorization_is_accepted() {
        let value = HeaderValue::from_bytes("Bearer токен".as_bytes()).unwrap();

        server()
            .get("/api/v1/categories")
            .add_header(header::AUTHORIZATION, value)
            .await
            .assert_status(StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_api_path_without_authorization_is_401() {
        let response = server().get("/api/v1/unknown").await;

        response.assert_status(StatusCode::UNAUTHORIZED);
        let body: Value = response.json();
        assert_eq!(body["error"], "Invalid authentication token");
    }

    #[tokio::test]
    async fn test_unknown_api_path_with_authorization_is_404() {
        let response = server()
            .get("/api/v1/unknown")
            .add_header(header::AUTHORIZATION, token())
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
        let body: Value = response.json();
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_any_authorization_value_is_accepted() {
        let server = server();

        let response = server
            .post("/api/v1/categories")
            .add_header(header::AUTHORIZATION, token())
            .json(&json!({ "name": "E-liquids" }))
            .await;

        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["name"], "E-liquids");
    }

    #[tokio::test]
    async fn test_unknown_category_is_404_through_full_stack() {
        let response = server()
            .get("/api/v1/categories/999")
            .add_header(header::AUTHORIZATION, token())
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
        let body: Value = response.json();
        assert_eq!(body["error"], "категория не найдена");
    }

    #[tokio::test]
    async fn test_options_is_204_without_authorization() {
        let response = server()
            .method(Method::OPTIONS, "/api/v1/products")
            .add_header(
                header::ORIGIN,
                HeaderValue::from_static("http://localhost:3000"),
            )
            .add_header(
                header::ACCESS_CONTROL_REQUEST_METHOD,
                HeaderValue::from_static("POST"),
            )
            .await;

        response.assert_status(StatusCode::NO_CONTENT);
        assert!(response.text().is_empty());
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .and_then(|v| v.to_str().ok()),
            Some("*")
        );
    }

    #[tokio::test]
    async fn test_plain_options_on_any_path_is_204() {
        server()
            .method(Method::OPTIONS, "/api/v1/purchases/12")
            .await
            .assert_status(StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_health_needs_no_authorization() {
        server().get("/health").await.assert_status(StatusCode::OK);
    }

    #[tokio::test]
    async fn test_responses_carry_request_id() {
        let response = server().get("/health").await;

        assert!(response.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let response = server().get("/api-docs/openapi.json").await;

        response.assert_status(StatusCode::OK);
        let doc: Value = response.json();
        assert_eq!(doc["info"]["title"], "VapeShop Client API");
    }

    #[tokio::test]
    async fn test_product_with_unknown_category_is_400_through_full_stack() {
        let response = server()
            .post("/api/v1/products")
            .add_header(header::AUTHORIZATION, token())
            .json(&json!({ "name": "Orphan", "price": 10.0, "category_id": 7 }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["error"], "категория не существует");
    }
}
