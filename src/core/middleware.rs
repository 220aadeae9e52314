use crate::core::config::AppConfig;
use crate::core::error::AppError;
use axum::{
    body::Body,
    extract::Request,
    http::{header, HeaderName, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use base64::prelude::*;
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer};
use tower_http::request_id::{MakeRequestId, RequestId};
use tracing::Span;
use uuid::Uuid;

/// Request ID generator using UUID v7 (time-ordered)
#[derive(Clone, Copy)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Custom MakeSpan that includes request_id in the tracing span
#[derive(Clone, Debug)]
pub struct MakeSpanWithRequestId;

impl<B> tower_http::trace::MakeSpan<B> for MakeSpanWithRequestId {
    fn make_span(&mut self, request: &axum::http::Request<B>) -> Span {
        let request_id = request
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("-");

        tracing::info_span!(
            "request",
            method = %request.method(),
            uri = %request.uri(),
            request_id = %request_id,
        )
    }
}

pub fn cors_layer(app: &AppConfig) -> CorsLayer {
    let wildcard = |items: &[String]| items.iter().any(|i| i == "*");

    let origins = if wildcard(&app.cors_allowed_origins) {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = app
            .cors_allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        AllowOrigin::list(origins)
    };

    let methods = if wildcard(&app.cors_allowed_methods) {
        AllowMethods::any()
    } else {
        let methods: Vec<Method> = app
            .cors_allowed_methods
            .iter()
            .filter_map(|m| m.to_uppercase().parse().ok())
            .collect();
        AllowMethods::list(methods)
    };

    let headers = if wildcard(&app.cors_allowed_headers) {
        AllowHeaders::any()
    } else {
        let headers: Vec<HeaderName> = app
            .cors_allowed_headers
            .iter()
            .filter_map(|h| h.to_lowercase().parse().ok())
            .collect();
        AllowHeaders::list(headers)
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(methods)
        .allow_headers(headers)
        .expose_headers(Any)
}

/// Answer every OPTIONS request with an empty 204.
///
/// Runs outside the CORS layer so preflight responses keep their
/// Access-Control-* headers.
pub async fn preflight_middleware(req: Request, next: Next) -> Response {
    let is_options = req.method() == Method::OPTIONS;
    let mut response = next.run(req).await;

    if is_options {
        *response.status_mut() = StatusCode::NO_CONTENT;
        *response.body_mut() = Body::empty();
        response.headers_mut().remove(header::CONTENT_TYPE);
        response.headers_mut().remove(header::CONTENT_LENGTH);
    }

    response
}

pub fn basic_auth_middleware(
    valid_credentials: Arc<String>,
) -> impl Fn(
    Request,
    Next,
)
    -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<Response, Response>> + Send>>
       + Clone {
    move |req: Request, next: Next| {
        let credentials = valid_credentials.clone();
        Box::pin(async move {
            let auth_header = req
                .headers()
                .get(header::AUTHORIZATION)
                .and_then(|header| header.to_str().ok());

            if let Some(auth_header) = auth_header {
                if let Some(encoded) = auth_header.strip_prefix("Basic ") {
                    if let Ok(decoded) = BASE64_STANDARD.decode(encoded) {
                        if let Ok(creds) = String::from_utf8(decoded) {
                            if creds == *credentials {
                                return Ok(next.run(req).await);
                            }
                        }
                    }
                }
            }

            Err((
                StatusCode::UNAUTHORIZED,
                [(header::WWW_AUTHENTICATE, "Basic realm=\"Swagger UI\"")],
                "Unauthorized",
            )
                .into_response())
        })
    }
}

/// Reject requests that carry no Authorization value.
///
/// The credential itself is not parsed or verified.
pub async fn auth_middleware(req: Request, next: Next) -> Result<Response, AppError> {
    if req.method() == Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    let has_credential = req
        .headers()
        .get(header::AUTHORIZATION)
        .is_some_and(|value| !value.as_bytes().trim_ascii().is_empty());

    if !has_credential {
        tracing::debug!("Rejected request without authorization header");
        return Err(AppError::Unauthorized(
            "Invalid authentication token".to_string(),
        ));
    }

    Ok(next.run(req).await)
}
