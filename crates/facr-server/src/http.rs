//! HTTP endpoints.

use std::io::Write;

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/procesar_factura", post(process_invoice))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Upload endpoint.
///
/// The uploaded bytes are written to a temporary file, extraction runs
/// against it, and the file is removed when the handle drops. Extraction
/// failures come back as a single-key `{"error": ...}` object rather than
/// an HTTP error; only a malformed upload is rejected outright.
async fn process_invoice(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Value>, StatusCode> {
    let mut data: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| StatusCode::BAD_REQUEST)?
    {
        if field.name() == Some("file") {
            let bytes = field.bytes().await.map_err(|_| StatusCode::BAD_REQUEST)?;
            data = Some(bytes.to_vec());
            break;
        }
    }

    let data = match data {
        Some(d) if !d.is_empty() => d,
        _ => return Err(StatusCode::BAD_REQUEST),
    };

    let config = state.config.clone();
    let mapper = state.mapper();

    let outcome = tokio::task::spawn_blocking(move || {
        let mut tmp = tempfile::Builder::new()
            .suffix(".pdf")
            .tempfile()
            .map_err(|e| e.to_string())?;
        tmp.write_all(&data).map_err(|e| e.to_string())?;

        facr_core::process_path(tmp.path(), &config).map_err(|e| e.to_string())
    })
    .await
    .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Json(match outcome {
        Ok(result) => {
            tracing::debug!("extracted fields with {} warnings", result.warnings.len());
            Value::Object(mapper.to_map(&result.fields))
        }
        Err(message) => {
            tracing::warn!("extraction failed: {}", message);
            json!({ "error": message })
        }
    }))
}

/// Health check.
async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use facr_core::models::config::FacrConfig;

    #[test]
    fn test_router_creation() {
        let state = AppState::new(FacrConfig::default());
        let _ = create_router(state);
    }
}
