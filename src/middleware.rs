use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{info, Instrument};

pub async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let request_id = uuid::Uuid::new_v4();
    let started = Instant::now();

    let span = tracing::info_span!("request", id = %request_id);
    let response = next.run(req).instrument(span.clone()).await;

    let status = response.status().as_u16();
    let content_length = response
        .headers()
        .get(axum::http::header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(0);

    span.in_scope(|| {
        info!(
            method = %method,
            url = %uri,
            status = status,
            length = content_length,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "HTTP request"
        )
    });

    response
}
