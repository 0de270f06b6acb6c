use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::render::{render, TemplateVariant, VisualDocument};
use crate::state::AppState;

/// `?template=` selector shared by the preview and export routes.
#[derive(Debug, Default, Deserialize)]
pub struct TemplateQuery {
    #[serde(default)]
    pub template: TemplateVariant,
}

/// GET /api/v1/resume/preview?template=standard
pub async fn handle_preview(
    State(state): State<AppState>,
    Query(params): Query<TemplateQuery>,
) -> Json<VisualDocument> {
    let doc = state.snapshot().await;
    Json(render(&doc, params.template))
}
