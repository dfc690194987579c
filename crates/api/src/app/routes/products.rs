use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    response::IntoResponse,
    routing::get,
};

use paintcalc_catalog::Entity;
use paintcalc_estimation::{CoverageEngine, resolve_option_groups};

use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/products", get(list_products))
        .route("/products/:id/options", get(get_product_options))
}

pub async fn list_products(
    Extension(engine): Extension<Arc<CoverageEngine>>,
) -> impl IntoResponse {
    Json(dto::ProductsResponse {
        products: engine.list_products(),
    })
}

pub async fn get_product_options(
    Extension(engine): Extension<Arc<CoverageEngine>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let entry = match engine.catalog().lookup(&id) {
        Ok(entry) => entry,
        Err(e) => return errors::validation_error_to_response(e),
    };

    Json(dto::OptionsResponse {
        product_id: entry.id().clone(),
        yield_basis: entry.yield_basis(),
        groups: resolve_option_groups(entry),
    })
    .into_response()
}
