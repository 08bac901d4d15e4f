use axum::{
    body::Body,
    extract::Request,
    http::{Response, StatusCode},
    middleware::Next,
};

use opentelemetry::KeyValue;
use tokio::time::Instant;
use tracing::{debug, instrument};

use crate::{middleware::normalize_uri, utils::metrics};

fn status_group(status: StatusCode) -> &'static str {
    match status.as_u16() {
        200..=299 => "2xx",
        300..=399 => "3xx",
        400..=499 => "4xx",
        500..=599 => "5xx",
        _ => "unknown",
    }
}

#[instrument(name = "middleware::record_metrics", skip_all)]
pub(crate) async fn record_metrics(
    request: Request,
    next: Next,
) -> Result<Response<Body>, StatusCode> {
    let method = request.method().to_string();
    let uri = normalize_uri(&request.uri().to_string());

    let start = Instant::now();
    let response = next.run(request).await;
    let elapsed = start.elapsed();

    let status = response.status();
    let group = status_group(status);

    debug!(?elapsed, %method, %uri, status = status.as_u16(), group, "request measured");

    let labels = [
        KeyValue::new("method", method),
        KeyValue::new("uri", uri),
        KeyValue::new("status_group", group),
        KeyValue::new("http_status_code", status.as_str().to_string()),
    ];

    metrics::REQUEST_COUNTER.add(1.0, &labels);
    metrics::HTTP_REQUEST_DURATION_HISTOGRAM.record(elapsed.as_millis() as f64, &labels);

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::status_group;
    use axum::http::StatusCode;

    #[test]
    fn groups_status_codes() {
        assert_eq!(status_group(StatusCode::OK), "2xx");
        assert_eq!(status_group(StatusCode::NOT_FOUND), "4xx");
        assert_eq!(status_group(StatusCode::UNPROCESSABLE_ENTITY), "4xx");
        assert_eq!(status_group(StatusCode::INTERNAL_SERVER_ERROR), "5xx");
    }
}
