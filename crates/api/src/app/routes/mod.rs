use axum::Router;

pub mod estimates;
pub mod products;
pub mod system;

/// Router for all engine-backed endpoints.
pub fn router() -> Router {
    Router::new()
        .merge(products::router())
        .merge(estimates::router())
}
