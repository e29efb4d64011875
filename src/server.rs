//! HTTP transport for the analyzer.
//!
//! Two endpoints: `GET /health` for liveness and `POST /parse` accepting
//! `{language, code}` and returning `{ast, summary}`. The analysis core is a
//! pure function over the request body; each request owns a fresh parser and
//! walker state, so handlers need no shared mutable state.

use axum::body::Bytes;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::{AnalyzeError, Result};

#[derive(Debug, Deserialize)]
struct ParseRequest {
    #[serde(default = "default_language")]
    language: String,
    #[serde(default)]
    code: String,
}

fn default_language() -> String {
    "c".to_string()
}

/// Build the router with all routes.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/parse", post(parse))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
}

/// Bind on the given port and serve until the process is stopped.
pub async fn serve(port: u16) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|err| AnalyzeError::server(format!("failed to bind on port {port}: {err}")))?;

    info!("listening on {addr}");
    axum::serve(listener, router())
        .await
        .map_err(|err| AnalyzeError::server(err.to_string()))
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({"status": "ok"}))
}

/// Body is read raw so that malformed JSON maps to the documented error
/// shape instead of the framework's default rejection.
async fn parse(body: Bytes) -> Response {
    let request: ParseRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": "invalid JSON"})),
            )
                .into_response();
        }
    };

    let result = crate::analyze(Some(&request.language), &request.code);
    Json(result).into_response()
}

async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({"error": "not found"})),
    )
        .into_response()
}
