//! Axum route handlers for the PDF download and the PNG preview.

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
};
use tracing::info;

use crate::errors::AppError;
use crate::export::{attachment_disposition, export_to_portable_document, preview_png};
use crate::render::handlers::TemplateQuery;
use crate::render::render;
use crate::state::AppState;

/// GET /api/v1/resume/export?template=standard
///
/// Renders, rasterizes and assembles the PDF off the async runtime, then answers with
/// an attachment. A blank document is refused before any work starts.
pub async fn handle_export(
    State(state): State<AppState>,
    Query(params): Query<TemplateQuery>,
) -> Result<Response, AppError> {
    let doc = state.snapshot().await;
    if doc.is_blank() {
        return Err(AppError::Validation(
            "Add a name, an experience or an education entry before downloading".into(),
        ));
    }

    let variant = params.template;
    let pdf = tokio::task::spawn_blocking(move || {
        let surface = render(&doc, variant);
        export_to_portable_document(&surface, &doc.personal_info.full_name)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in export: {e}")))??;

    info!(
        "Exported '{}' ({}x{} px, {} bytes)",
        pdf.file_name,
        pdf.raster_width,
        pdf.raster_height,
        pdf.bytes.len()
    );

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                attachment_disposition(&pdf.file_name),
            ),
        ],
        pdf.bytes,
    )
        .into_response())
}

/// GET /api/v1/resume/preview.png?template=standard
pub async fn handle_preview_png(
    State(state): State<AppState>,
    Query(params): Query<TemplateQuery>,
) -> Result<Response, AppError> {
    let doc = state.snapshot().await;
    let variant = params.template;
    let png = tokio::task::spawn_blocking(move || preview_png(&render(&doc, variant)))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in preview: {e}")))??;

    Ok(([(header::CONTENT_TYPE, "image/png")], png).into_response())
}
