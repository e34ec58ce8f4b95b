//! Development server for the content document.
//!
//! Serves `GET /content.json` straight from disk (re-read per request, so
//! edits show up without a restart) and `GET /health`. Every response gets
//! permissive CORS headers.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use axum::{
    extract::{Request, State},
    http::{HeaderValue, StatusCode, header},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};

#[derive(Debug, Clone)]
pub struct ServerState {
    pub document: PathBuf,
}

pub fn router(document: PathBuf) -> Router {
    Router::new()
        .route("/content.json", get(content))
        .route("/health", get(health))
        .layer(middleware::from_fn(cors_and_log))
        .with_state(ServerState { document })
}

pub async fn serve(document: PathBuf, bind: SocketAddr) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("failed to bind {bind}"))?;

    tracing::info!(
        addr = %listener.local_addr().context("listener has no local address")?,
        document = %document.display(),
        "serving content"
    );

    axum::serve(listener, router(document))
        .await
        .context("content server stopped")
}

async fn content(State(state): State<ServerState>) -> Response {
    match tokio::fs::read(&state.document).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, "application/json")], bytes).into_response(),
        Err(err) => {
            tracing::warn!(document = %state.document.display(), error = %err, "content document unreadable");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn cors_and_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let mut response = next.run(req).await;
    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );

    tracing::info!(%method, %path, status = response.status().as_u16(), "request");
    response
}
