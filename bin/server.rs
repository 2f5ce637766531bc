// Egyptian Rent Calculator - Web Server
// JSON API over the residential and commercial calculators

use anyhow::{Context, Result};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use egypt_rent::config::{init_tracing, Config};
use egypt_rent::tables::{commercial_table, residential_table, ConstructionPeriod, RentCategory};
use egypt_rent::{
    compute_commercial_rent, compute_residential_rent, CommercialRequest, RentError,
    ResidentialRequest,
};

/// Shared application state
#[derive(Clone)]
struct AppState {
    config: Arc<Config>,
}

/// API Response wrapper
#[derive(Serialize)]
struct ApiResponse<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

fn rejected(err: RentError) -> Response {
    warn!(field = err.field(), "rejected calculation: {}", err);
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ApiResponse::<()> {
            success: false,
            data: None,
            error: Some(err.to_string()),
        }),
    )
        .into_response()
}

#[derive(Serialize)]
struct TablesResponse {
    residential: &'static [RentCategory],
    commercial: &'static [ConstructionPeriod],
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::ok("OK"))
}

/// GET /api/periods - Both lookup tables
async fn get_periods() -> impl IntoResponse {
    Json(ApiResponse::ok(TablesResponse {
        residential: residential_table(),
        commercial: commercial_table(),
    }))
}

/// POST /api/residential - Calculate residential rent
async fn post_residential(
    State(state): State<AppState>,
    payload: Result<Json<ResidentialRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return rejected(RentError::invalid("body", rejection.body_text())),
    };

    let result = request
        .into_input(state.config.today())
        .and_then(|input| compute_residential_rent(&input));

    match result {
        Ok(result) => {
            info!(
                category = %result.category,
                as_of = %result.as_of,
                final_rent = result.final_rent,
                "residential calculation"
            );
            (StatusCode::OK, Json(ApiResponse::ok(result))).into_response()
        }
        Err(e) => rejected(e),
    }
}

/// POST /api/commercial - Calculate commercial rent with increase schedule
async fn post_commercial(
    State(state): State<AppState>,
    payload: Result<Json<CommercialRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return rejected(RentError::invalid("body", rejection.body_text())),
    };

    let result = request
        .into_input(state.config.today())
        .and_then(|input| compute_commercial_rent(&input));

    match result {
        Ok(result) => {
            info!(
                period = %result.construction_period,
                as_of = %result.as_of,
                steps = result.steps.len(),
                final_rent = result.final_rent,
                "commercial calculation"
            );
            (StatusCode::OK, Json(ApiResponse::ok(result))).into_response()
        }
        Err(e) => rejected(e),
    }
}

// ============================================================================
// Main Server
// ============================================================================

fn build_app(config: Config) -> Router {
    let state = AppState {
        config: Arc::new(config),
    };

    // Build API routes
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/periods", get(get_periods))
        .route("/residential", post(post_residential))
        .route("/commercial", post(post_commercial))
        .with_state(state);

    Router::new()
        .nest("/api", api_routes)
        .layer(CorsLayer::permissive())
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = Config::from_env()?;
    let addr = config.bind_addr.clone();

    let app = build_app(config);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!("🚀 Server running on http://{}", addr);
    info!("   API: http://{}/api/commercial", addr);

    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request};
    use chrono::NaiveDate;
    use tower::ServiceExt;

    fn test_app() -> Router {
        build_app(Config {
            as_of: NaiveDate::from_ymd_opt(2026, 9, 1),
            ..Config::default()
        })
    }

    async fn post_json(uri: &str, body: &str) -> (StatusCode, Option<String>, serde_json::Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = test_app().oneshot(request).await.unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, content_type, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_commercial_golden_case() {
        let (status, _, json) = post_json(
            "/api/commercial",
            r#"{"original_rent":100,"construction_period":"before-1944","contract_date":"1990-01-01"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["final_rent"], 10045.0);
        assert_eq!(json["data"]["steps"].as_array().unwrap().len(), 31);
    }

    #[tokio::test]
    async fn test_malformed_date_returns_json_error() {
        let (status, content_type, json) =
            post_json("/api/commercial", r#"{"contract_date":"1990-13-01"}"#).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(content_type.as_deref(), Some("application/json"));
        assert_eq!(json["success"], false);
        assert!(json["error"].as_str().unwrap().contains("`body`"));
    }

    #[tokio::test]
    async fn test_broken_json_returns_json_error() {
        let (status, _, json) = post_json("/api/residential", r#"{"original_rent": "#).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json["success"], false);
    }

    #[tokio::test]
    async fn test_non_numeric_rent_returns_json_error() {
        let (status, _, json) = post_json(
            "/api/residential",
            r#"{"original_rent":"a lot","category":"economic"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json["success"], false);
    }

    #[tokio::test]
    async fn test_invalid_input_names_field() {
        let (status, _, json) = post_json(
            "/api/residential",
            r#"{"original_rent":100,"category":"economic","as_of":"9999-12-31"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(json["error"].as_str().unwrap().contains("`as_of`"));
    }
}
