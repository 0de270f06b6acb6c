pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::state::AppState;
use crate::{document, enhancement, export, render};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Document Model
        .route("/api/v1/resume", get(document::handlers::handle_get_resume))
        .route(
            "/api/v1/resume/sections",
            put(document::handlers::handle_replace_section),
        )
        .route(
            "/api/v1/resume/skills",
            post(document::handlers::handle_add_skill)
                .delete(document::handlers::handle_remove_skill),
        )
        .route(
            "/api/v1/resume/progress",
            get(document::handlers::handle_step_progress),
        )
        // Template Renderer + Export Pipeline
        .route(
            "/api/v1/resume/preview",
            get(render::handlers::handle_preview),
        )
        .route(
            "/api/v1/resume/preview.png",
            get(export::handlers::handle_preview_png),
        )
        .route(
            "/api/v1/resume/export",
            get(export::handlers::handle_export),
        )
        // Content Enhancement
        .route("/api/v1/enhance", post(enhancement::handlers::handle_enhance))
        .route(
            "/api/v1/enhance/status",
            get(enhancement::handlers::handle_enhance_status),
        )
        .with_state(state)
}
