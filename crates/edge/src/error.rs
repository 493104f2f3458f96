// crates/edge/src/error.rs

use axum::response::{Html, IntoResponse, Response};
use http::StatusCode;
use thiserror::Error;
use tracing::error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum EdgeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("render error: {0}")]
    Render(#[from] serve::RenderError),

    #[error("not found")]
    NotFound,
}

/// Only a missing top-level document escalates to a whole-request failure;
/// everything below that level was already degraded in place.
impl IntoResponse for EdgeError {
    fn into_response(self) -> Response {
        match self {
            EdgeError::NotFound => {
                let meta = serve::meta::not_found_metadata();
                let body = format!(
                    "<!doctype html><html><head><title>{}</title></head>\
                     <body><h1>404</h1><p>{}</p></body></html>",
                    meta.title,
                    meta.description.unwrap_or_default()
                );
                (StatusCode::NOT_FOUND, Html(body)).into_response()
            }
            other => {
                error!("request failed: {other}");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response()
            }
        }
    }
}
