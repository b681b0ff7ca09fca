//! Game HTTP service implementing the hyper `Service` trait.

use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use bytes::Bytes;
use http_body_util::BodyExt;
use hyper::body::Incoming;

use ladderstack_model::error::LadderError;

use crate::body::LadderResponseBody;
use crate::dispatch::{LadderHandler, dispatch_operation};
use crate::response::{CONTENT_TYPE, error_to_response};
use crate::router::resolve_route;

/// Configuration for the game HTTP service.
#[derive(Debug, Clone)]
pub struct LadderHttpConfig {
    /// Value for the `access-control-allow-origin` header. The frontend is
    /// served from a different origin, so the default is `*`.
    pub cors_allow_origin: String,
    /// Version string reported by the health endpoint.
    pub version: String,
}

impl Default for LadderHttpConfig {
    fn default() -> Self {
        Self {
            cors_allow_origin: "*".to_owned(),
            version: env!("CARGO_PKG_VERSION").to_owned(),
        }
    }
}

/// Hyper `Service` implementation for the game endpoints.
///
/// Wraps a [`LadderHandler`] implementation and routes incoming HTTP
/// requests to the appropriate game operation. Health checks and CORS
/// preflight requests are intercepted before routing.
#[derive(Debug)]
pub struct LadderHttpService<H: LadderHandler> {
    handler: Arc<H>,
    config: Arc<LadderHttpConfig>,
}

impl<H: LadderHandler> LadderHttpService<H> {
    /// Create a new `LadderHttpService`.
    pub fn new(handler: Arc<H>, config: LadderHttpConfig) -> Self {
        Self {
            handler,
            config: Arc::new(config),
        }
    }
}

impl<H: LadderHandler> Clone for LadderHttpService<H> {
    fn clone(&self) -> Self {
        Self {
            handler: Arc::clone(&self.handler),
            config: Arc::clone(&self.config),
        }
    }
}

impl<H: LadderHandler> hyper::service::Service<http::Request<Incoming>> for LadderHttpService<H> {
    type Response = http::Response<LadderResponseBody>;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn call(&self, req: http::Request<Incoming>) -> Self::Future {
        let handler = Arc::clone(&self.handler);
        let config = Arc::clone(&self.config);
        let request_id = uuid::Uuid::new_v4().to_string();

        Box::pin(async move {
            let response = process_request(req, handler.as_ref(), &config, &request_id).await;
            let response = add_common_headers(response, &config, &request_id);
            Ok(response)
        })
    }
}

/// Process a single request through the full pipeline.
async fn process_request<H: LadderHandler>(
    req: http::Request<Incoming>,
    handler: &H,
    config: &LadderHttpConfig,
    request_id: &str,
) -> http::Response<LadderResponseBody> {
    let (parts, incoming) = req.into_parts();

    // 1. Intercept CORS preflight and health probes before routing.
    if parts.method == http::Method::OPTIONS {
        return preflight_response();
    }
    if is_health_check(&parts.method, parts.uri.path()) {
        return health_response(config);
    }

    // 2. Route: resolve the operation from method + path + query.
    let route = match resolve_route(&parts.method, &parts.uri) {
        Ok(route) => route,
        Err(err) => return error_to_response(&err, request_id),
    };

    // 3. Collect body.
    let body = match collect_body(incoming).await {
        Ok(body) => body,
        Err(err) => return error_to_response(&err, request_id),
    };

    // 4. Dispatch to handler.
    match dispatch_operation(handler, route.op, route.game_id, body).await {
        Ok(response) => response,
        Err(err) => error_to_response(&err, request_id),
    }
}

/// Collect the incoming body into a single `Bytes` buffer.
async fn collect_body(incoming: Incoming) -> Result<Bytes, LadderError> {
    incoming
        .collect()
        .await
        .map(http_body_util::Collected::to_bytes)
        .map_err(|e| LadderError::internal(format!("failed to read request body: {e}")))
}

/// Check if the request is a health check probe.
fn is_health_check(method: &http::Method, path: &str) -> bool {
    *method == http::Method::GET && (path == "/health" || path == "/_health")
}

/// Produce the health check response.
fn health_response(config: &LadderHttpConfig) -> http::Response<LadderResponseBody> {
    let body = serde_json::to_vec(&serde_json::json!({
        "status": "running",
        "version": config.version,
    }))
    .expect("static health response should be valid");

    http::Response::builder()
        .status(http::StatusCode::OK)
        .header("content-type", CONTENT_TYPE)
        .body(LadderResponseBody::from_json(body))
        .expect("valid health response")
}

/// Produce an empty CORS preflight response.
fn preflight_response() -> http::Response<LadderResponseBody> {
    http::Response::builder()
        .status(http::StatusCode::NO_CONTENT)
        .header("access-control-allow-methods", "GET, POST, OPTIONS")
        .header("access-control-allow-headers", "content-type")
        .body(LadderResponseBody::empty())
        .expect("valid preflight response")
}

/// Add common response headers to every response.
fn add_common_headers(
    mut response: http::Response<LadderResponseBody>,
    config: &LadderHttpConfig,
    request_id: &str,
) -> http::Response<LadderResponseBody> {
    let headers = response.headers_mut();

    if let Ok(hv) = http::HeaderValue::from_str(request_id) {
        headers.entry("x-request-id").or_insert(hv);
    }

    headers.insert("server", http::HeaderValue::from_static("LadderStack"));

    if let Ok(hv) = http::HeaderValue::from_str(&config.cors_allow_origin) {
        headers.insert("access-control-allow-origin", hv);
    }

    response
}
