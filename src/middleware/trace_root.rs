use axum::{
    body::Body,
    extract::Request,
    http::{Response, StatusCode},
    middleware::Next,
};
use tracing::{info, Instrument};

use crate::{
    middleware::normalize_uri,
    utils::{root_span::SamplingPriority, RootSpan},
};

/// Opens the `http_request` span that handlers enrich through [`RootSpan`].
pub(crate) async fn trace_root(mut req: Request, next: Next) -> Result<Response<Body>, StatusCode> {
    let root_span = RootSpan::new(
        req.method().as_str(),
        &normalize_uri(&req.uri().to_string()),
    );

    req.extensions_mut().insert(root_span.clone());

    let resp = next.run(req).instrument(root_span.span().clone()).await;
    let status = resp.status();

    root_span.record().http_status_code(&status);

    if status.is_client_error() || status.is_server_error() {
        root_span
            .record()
            .status("error")
            .sampling_priority(SamplingPriority::One);
    } else {
        root_span.record().status("ok");
    }

    root_span
        .span()
        .in_scope(|| info!(status = status.as_u16(), "request finished"));

    Ok(resp)
}
