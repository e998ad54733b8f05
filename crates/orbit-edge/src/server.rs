use crate::config::EdgeConfig;
use crate::responder::{respond, EdgeResponse, ALLOW_HEADERS, ALLOW_METHODS};
use crate::EdgeError;
use axum::{
    body::{Body, Bytes},
    extract::{DefaultBodyLimit, State},
    http::{header, HeaderMap, HeaderValue, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use std::sync::Arc;

/// Every path and method goes through the responder, with no body size limit.
pub fn router(config: EdgeConfig) -> Router {
    Router::new()
        .fallback(handle)
        .layer(DefaultBodyLimit::disable())
        .with_state(Arc::new(config))
}

async fn handle(
    State(config): State<Arc<EdgeConfig>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let origin = headers
        .get(header::ORIGIN)
        .and_then(|v| v.to_str().ok());
    let out = respond(
        method.as_str(),
        uri.path(),
        origin,
        &body,
        &config,
        chrono::Utc::now(),
    );
    log::info!("[edge] {} {} -> {}", method, uri.path(), out.status);
    into_response(out)
}

fn into_response(out: EdgeResponse) -> Response {
    let mut headers = HeaderMap::new();
    let allow_origin = HeaderValue::from_str(&out.cors.allow_origin)
        .unwrap_or_else(|_| HeaderValue::from_static("*"));
    headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, allow_origin);
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOW_METHODS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOW_HEADERS),
    );
    let status = StatusCode::from_u16(out.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let body = match out.body {
        Some(json) => {
            headers.insert(
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/json"),
            );
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    (status, headers, body).into_response()
}

/// Bind and serve until the process is stopped.
pub async fn serve(config: EdgeConfig) -> Result<(), EdgeError> {
    let addr = config.addr;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("[edge] listening on http://{addr}");
    axum::serve(listener, router(config)).await?;
    Ok(())
}
