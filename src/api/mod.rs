//! GoFood REST API
//!
//! HTTP API layer for GoFood, built with Axum. The dashboard talks to the
//! `foods` collection below; paths are relative to the server root.
//!
//! # Endpoints
//!
//! ## Foods
//! - `GET /foods` - List all foods
//! - `POST /foods` - Create a food
//! - `GET /foods/:id` - Get a food
//! - `PUT /foods/:id` - Replace a food
//! - `DELETE /foods/:id` - Delete a food
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use gofood::api::{serve, AppState};
//! use gofood::config::ApiConfig;
//! use gofood::store::{FoodCatalog, StoreConfig};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let catalog = Arc::new(FoodCatalog::open(StoreConfig::default()).await?);
//!     serve(AppState::new(catalog, ApiConfig::default())).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{
    http::HeaderValue,
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::ApiConfig;

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let food_routes = Router::new()
        .route(
            "/",
            get(routes::foods::list_foods).post(routes::foods::create_food),
        )
        .route(
            "/:id",
            get(routes::foods::get_food)
                .put(routes::foods::update_food)
                .delete(routes::foods::delete_food),
        );

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let cors = cors_layer(&state.config);
    let shared_state = Arc::new(state);

    Router::new()
        .nest("/foods", food_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state)
}

/// CORS for the browser dashboard, which is served from another origin
fn cors_layer(config: &ApiConfig) -> CorsLayer {
    if config.cors_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Start the API server
pub async fn serve(state: AppState) -> Result<(), ApiError> {
    let addr = state.config.addr();
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("GoFood API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("GoFood API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{Food, FoodCatalog, NewFoodRecord, StoreConfig};
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        response::Response,
    };
    use tempfile::tempdir;
    use tower::util::ServiceExt;

    async fn create_test_app() -> (Router, Arc<FoodCatalog>, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let catalog = Arc::new(FoodCatalog::open(StoreConfig::new(dir.path())).await.unwrap());
        let state = AppState::new(Arc::clone(&catalog), ApiConfig::default());
        (build_router(state), catalog, dir)
    }

    fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn empty_request(method: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn read_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_live() {
        let (app, _catalog, _dir) = create_test_app().await;

        let response = app.oneshot(empty_request("GET", "/health/live")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full_reports_food_count() {
        let (app, catalog, _dir) = create_test_app().await;
        catalog.create(NewFoodRecord::new("A", 1.0)).await.unwrap();

        let response = app.oneshot(empty_request("GET", "/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body: serde_json::Value = read_json(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["foods"], 1);
    }

    #[tokio::test]
    async fn test_list_foods_empty() {
        let (app, _catalog, _dir) = create_test_app().await;

        let response = app.oneshot(empty_request("GET", "/foods")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let foods: Vec<Food> = read_json(response).await;
        assert!(foods.is_empty());
    }

    #[tokio::test]
    async fn test_create_food_assigns_id() {
        let (app, _catalog, _dir) = create_test_app().await;

        let response = app
            .oneshot(json_request(
                "POST",
                "/foods",
                r#"{"name": "A", "image": "i", "price": 1, "description": "d", "available": true}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);

        let food: Food = read_json(response).await;
        assert_eq!(food.id, 1);
        assert_eq!(food.name, "A");
        assert_eq!(food.image, "i");
        assert_eq!(food.price, 1.0);
        assert_eq!(food.description, "d");
        assert!(food.available);
    }

    #[tokio::test]
    async fn test_create_food_invalid_json() {
        let (app, catalog, _dir) = create_test_app().await;

        let response = app
            .oneshot(json_request("POST", "/foods", "not json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(catalog.is_empty().await);
    }

    #[tokio::test]
    async fn test_create_food_validation() {
        let (app, _catalog, _dir) = create_test_app().await;

        let response = app
            .oneshot(json_request("POST", "/foods", r#"{"name": "", "price": 1}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = read_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_update_food_keeps_availability() {
        let (app, catalog, _dir) = create_test_app().await;
        catalog
            .create(NewFoodRecord::new("A", 1.0).available(false))
            .await
            .unwrap();

        let response = app
            .oneshot(json_request(
                "PUT",
                "/foods/1",
                r#"{"id": 1, "name": "A2", "image": "i2", "price": 2.5, "description": "d2"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let food: Food = read_json(response).await;
        assert_eq!(food.id, 1);
        assert_eq!(food.name, "A2");
        assert!(!food.available);
    }

    #[tokio::test]
    async fn test_update_missing_food() {
        let (app, _catalog, _dir) = create_test_app().await;

        let response = app
            .oneshot(json_request("PUT", "/foods/9", r#"{"name": "X", "price": 1}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_food() {
        let (app, catalog, _dir) = create_test_app().await;
        catalog.create(NewFoodRecord::new("A", 1.0)).await.unwrap();
        catalog.create(NewFoodRecord::new("B", 2.0)).await.unwrap();

        let response = app
            .clone()
            .oneshot(empty_request("DELETE", "/foods/1"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let remaining = catalog.list().await;
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, 2);

        let response = app.oneshot(empty_request("DELETE", "/foods/1")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_get_food() {
        let (app, catalog, _dir) = create_test_app().await;
        catalog.create(NewFoodRecord::new("A", 1.0)).await.unwrap();

        let response = app
            .clone()
            .oneshot(empty_request("GET", "/foods/1"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app.oneshot(empty_request("GET", "/foods/2")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
