//! Success response bodies for the `/produtos` surface

use serde::Serialize;

use crate::store::Product;

/// Confirmation-only response (delete)
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub mensagem: String,
}

/// Confirmation plus the affected record (create, update)
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub mensagem: String,
    pub produto: Product,
}

/// Mean price, rounded to 2 decimals
#[derive(Debug, Serialize)]
pub struct MeanPriceResponse {
    pub preco_medio: f64,
}

/// Health check body
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
