use axum::{
    extract::Request,
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use tracing::Instrument;

use crate::context::RequestContext;

/// Response header echoing the request id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Tag every request with a request id, run it inside a tracing span carrying
/// that id, and echo the id back to the client.
pub async fn request_id_middleware(mut req: Request, next: Next) -> Response {
    let ctx = RequestContext::new();
    let request_id = ctx.request_id();
    req.extensions_mut().insert(ctx);

    let span = tracing::info_span!(
        "request",
        %request_id,
        method = %req.method(),
        path = %req.uri().path(),
    );

    let mut response = next.run(req).instrument(span.clone()).await;

    span.in_scope(|| {
        tracing::info!(status = response.status().as_u16(), "request completed");
    });

    if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}
