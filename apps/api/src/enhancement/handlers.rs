//! Axum route handlers for the Enhancement API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::enhancement::content_type::ContentType;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhanceRequest {
    pub text: String,
    pub content_type: ContentType,
}

#[derive(Debug, Serialize)]
pub struct EnhanceResponse {
    /// `null` only when the submitted text was blank.
    pub enhanced: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhanceStatusResponse {
    pub busy: bool,
    pub remote_configured: bool,
}

/// POST /api/v1/enhance
///
/// Never fails: remote errors are absorbed by the local fallback.
pub async fn handle_enhance(
    State(state): State<AppState>,
    Json(request): Json<EnhanceRequest>,
) -> Json<EnhanceResponse> {
    let enhanced = state
        .enhancer
        .enhance(&request.text, &request.content_type)
        .await;
    Json(EnhanceResponse { enhanced })
}

/// GET /api/v1/enhance/status
pub async fn handle_enhance_status(State(state): State<AppState>) -> Json<EnhanceStatusResponse> {
    Json(EnhanceStatusResponse {
        busy: state.enhancer.is_busy(),
        remote_configured: state.enhancer.has_remote(),
    })
}
