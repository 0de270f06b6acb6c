use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::document::models::{ResumeDocument, SectionUpdate, SkillCategory, SkillSet};
use crate::document::progress::{step_progress, StepProgress, WizardStep};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct StepQuery {
    pub step: WizardStep,
}

/// GET /api/v1/resume
pub async fn handle_get_resume(State(state): State<AppState>) -> Json<ResumeDocument> {
    Json(state.snapshot().await)
}

/// PUT /api/v1/resume/sections
///
/// Replaces one section wholesale and returns the new snapshot. Last write wins.
pub async fn handle_replace_section(
    State(state): State<AppState>,
    Json(update): Json<SectionUpdate>,
) -> Json<ResumeDocument> {
    let section = update.section_name();
    let mut doc = state.document.write().await;
    doc.replace_section(update);
    info!("Replaced section '{section}'");
    Json(doc.clone())
}

#[derive(Deserialize)]
pub struct SkillEdit {
    pub category: SkillCategory,
    pub skill: String,
}

#[derive(Serialize)]
pub struct SkillEditResponse {
    pub changed: bool,
    pub skills: SkillSet,
}

/// POST /api/v1/resume/skills
///
/// Adds one skill. Blank input and exact duplicates leave the set unchanged.
pub async fn handle_add_skill(
    State(state): State<AppState>,
    Json(edit): Json<SkillEdit>,
) -> Json<SkillEditResponse> {
    let mut doc = state.document.write().await;
    let changed = doc.skills.add(edit.category, &edit.skill);
    if changed {
        info!("Added skill to {:?}", edit.category);
    }
    Json(SkillEditResponse {
        changed,
        skills: doc.skills.clone(),
    })
}

/// DELETE /api/v1/resume/skills
pub async fn handle_remove_skill(
    State(state): State<AppState>,
    Json(edit): Json<SkillEdit>,
) -> Json<SkillEditResponse> {
    let mut doc = state.document.write().await;
    let changed = doc.skills.remove(edit.category, &edit.skill);
    if changed {
        info!("Removed skill from {:?}", edit.category);
    }
    Json(SkillEditResponse {
        changed,
        skills: doc.skills.clone(),
    })
}

/// GET /api/v1/resume/progress?step=profile
pub async fn handle_step_progress(
    State(state): State<AppState>,
    Query(params): Query<StepQuery>,
) -> Json<StepProgress> {
    let doc = state.snapshot().await;
    Json(step_progress(params.step, &doc))
}
