//! # HTTP Façade
//!
//! Axum routes mapping the fixed `/produtos` surface onto the record
//! store, plus CORS and request tracing. This layer owns no state of
//! its own; it translates store outcomes into status codes and JSON
//! bodies.

pub mod config;
pub mod errors;
pub mod response;
pub mod routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use server::HttpServer;
