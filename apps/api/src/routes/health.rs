use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service status, version and which enhancement model (if any) is wired in.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let model = state
        .config
        .gemini_api_key
        .as_ref()
        .map(|_| state.config.gemini_model.clone());
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "resume-studio",
        "enhancementModel": model
    }))
}
