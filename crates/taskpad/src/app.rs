//! Application router and transport adapter.
//!
//! The transport's only job is to hand the dispatcher a request envelope and
//! return the response envelope to the caller unmodified; all routing
//! decisions happen inside the dispatcher, by method.

use axum::{
    body::{to_bytes, Body},
    extract::{Request, State},
    response::Response,
    routing::any,
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{
    envelope::{ApiRequest, ApiResponse},
    state::AppState,
};

/// Upper bound on accepted request bodies; task payloads are tiny.
const BODY_LIMIT: usize = 64 * 1024;

/// Create the application router.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", any(handle))
        .route("/tasks", any(handle))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Adapt an HTTP request to the dispatcher's envelope and back.
async fn handle(State(state): State<AppState>, request: Request) -> Response {
    let method = request.method().as_str().to_string();

    let bytes = match to_bytes(request.into_body(), BODY_LIMIT).await {
        Ok(bytes) => bytes,
        Err(err) => return into_http(ApiResponse::error(500, &err.to_string())),
    };
    let body = if bytes.is_empty() {
        None
    } else {
        match String::from_utf8(bytes.to_vec()) {
            Ok(text) => Some(text),
            Err(err) => return into_http(ApiResponse::error(500, &err.to_string())),
        }
    };

    let response = state.dispatcher.dispatch(ApiRequest { method, body }).await;
    into_http(response)
}

/// Render a response envelope as an HTTP response.
fn into_http(response: ApiResponse) -> Response {
    let mut builder = Response::builder().status(response.status_code);
    for (name, value) in response.headers {
        builder = builder.header(*name, *value);
    }
    builder
        .body(Body::from(response.body))
        .expect("static response parts are valid")
}
