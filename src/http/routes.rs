//! Product HTTP routes
//!
//! The route table mirrors the service's published surface. The fixed
//! paths (`maior`, `menor`, `media`, `acima-da-media`,
//! `abaixo-da-media`) coexist with the `{id}` capture; the router
//! prefers the static segment.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::query::round_to_cents;
use crate::store::{Product, ProductDraft, ProductStore};

use super::errors::ApiResult;
use super::response::{HealthResponse, MeanPriceResponse, MessageResponse, ProductResponse};

/// Health check route, mounted at root level
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_handler))
}

/// Create the product routes
pub fn produtos_routes(store: Arc<ProductStore>) -> Router {
    Router::new()
        .route(
            "/produtos",
            get(list_products_handler).post(create_product_handler),
        )
        .route("/produtos/maior", get(most_expensive_handler))
        .route("/produtos/menor", get(cheapest_handler))
        .route("/produtos/media", get(mean_price_handler))
        .route("/produtos/acima-da-media", get(above_mean_handler))
        .route("/produtos/abaixo-da-media", get(below_mean_handler))
        .route(
            "/produtos/{id}",
            get(get_product_handler)
                .put(update_product_handler)
                .delete(delete_product_handler),
        )
        .with_state(store)
}

// ==================
// Collection Handlers
// ==================

async fn create_product_handler(
    State(store): State<Arc<ProductStore>>,
    Json(draft): Json<ProductDraft>,
) -> ApiResult<Json<ProductResponse>> {
    let produto = store.create(draft).await?;

    Ok(Json(ProductResponse {
        mensagem: "Produto cadastrado com sucesso".to_string(),
        produto,
    }))
}

async fn list_products_handler(State(store): State<Arc<ProductStore>>) -> Json<Vec<Product>> {
    Json(store.list().await)
}

async fn get_product_handler(
    State(store): State<Arc<ProductStore>>,
    Path(id): Path<u64>,
) -> ApiResult<Json<Product>> {
    Ok(Json(store.get(id).await?))
}

async fn update_product_handler(
    State(store): State<Arc<ProductStore>>,
    Path(id): Path<u64>,
    Json(draft): Json<ProductDraft>,
) -> ApiResult<Json<ProductResponse>> {
    let produto = store.update(id, draft).await?;

    Ok(Json(ProductResponse {
        mensagem: format!("Produto {} atualizado com sucesso!", id),
        produto,
    }))
}

async fn delete_product_handler(
    State(store): State<Arc<ProductStore>>,
    Path(id): Path<u64>,
) -> ApiResult<Json<MessageResponse>> {
    store.delete(id).await?;

    Ok(Json(MessageResponse {
        mensagem: format!("Produto com {} apagado com sucesso!", id),
    }))
}

// ==================
// Query Handlers
// ==================

async fn most_expensive_handler(
    State(store): State<Arc<ProductStore>>,
) -> ApiResult<Json<Product>> {
    Ok(Json(store.most_expensive().await?))
}

async fn cheapest_handler(State(store): State<Arc<ProductStore>>) -> ApiResult<Json<Product>> {
    Ok(Json(store.cheapest().await?))
}

async fn mean_price_handler(
    State(store): State<Arc<ProductStore>>,
) -> ApiResult<Json<MeanPriceResponse>> {
    let mean = store.mean_price().await?;

    Ok(Json(MeanPriceResponse {
        preco_medio: round_to_cents(mean),
    }))
}

async fn above_mean_handler(State(store): State<Arc<ProductStore>>) -> Json<Vec<Product>> {
    Json(store.above_mean().await)
}

async fn below_mean_handler(State(store): State<Arc<ProductStore>>) -> Json<Vec<Product>> {
    Json(store.below_mean().await)
}

// ==================
// Health Handler
// ==================

async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}
