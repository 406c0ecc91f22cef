pub mod config;
pub mod error;
pub mod store;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub use config::Config;
pub use error::AppError;
pub use store::Store;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
}

/// Create payload. Unknown fields, including a client-supplied `id`, are
/// ignored so the store always assigns the identifier.
#[derive(Clone, Debug, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
}

pub fn app(store: Store) -> Router {
    Router::new()
        .route("/api/products", get(list_products).post(create_product))
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

pub async fn run(listener: TcpListener, store: Store) -> Result<(), std::io::Error> {
    axum::serve(listener, app(store)).await
}

async fn list_products(State(store): State<Store>) -> Result<Json<Vec<Product>>, AppError> {
    let products = store.list_products().await?;
    tracing::debug!(count = products.len(), "listed products");
    Ok(Json(products))
}

async fn create_product(
    State(store): State<Store>,
    Json(input): Json<NewProduct>,
) -> Result<Json<Product>, AppError> {
    let product = store.create_product(&input).await?;
    tracing::info!(id = product.id, name = %product.name, "created product");
    Ok(Json(product))
}

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadyBody {
    status: &'static str,
    database: &'static str,
}

async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

async fn ready(State(store): State<Store>) -> (StatusCode, Json<ReadyBody>) {
    match store.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(ReadyBody {
                status: "ok",
                database: "ok",
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ReadyBody {
                    status: "degraded",
                    database: "unavailable",
                }),
            )
        }
    }
}

async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}
