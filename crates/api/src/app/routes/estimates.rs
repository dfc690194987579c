use std::sync::Arc;

use axum::{
    Json, Router,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};

use paintcalc_estimation::{CoverageEngine, EstimateRequest};

use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new().route("/estimates", post(create_estimate))
}

pub async fn create_estimate(
    Extension(engine): Extension<Arc<CoverageEngine>>,
    Json(body): Json<EstimateRequest>,
) -> axum::response::Response {
    match engine.compute_coverage(&body) {
        Ok(estimate) => {
            tracing::debug!(
                product_id = %estimate.product_id,
                mode = ?body.mode,
                containers = estimate.result.container_count,
                "estimate computed"
            );
            (StatusCode::OK, Json(dto::EstimateResponse::from(estimate))).into_response()
        }
        Err(e) => {
            tracing::debug!(
                product_id = %body.product_id,
                mode = ?body.mode,
                error = e.code(),
                "estimate rejected"
            );
            errors::validation_error_to_response(e)
        }
    }
}
