//! Wizard gating. The shell owns step ordering; this module owns the one rule it
//! must respect: the profile step needs a full name and an email before moving on.

use serde::{Deserialize, Serialize};

use crate::document::models::ResumeDocument;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Profile,
    Experience,
    Education,
    Skills,
    Preview,
}

impl WizardStep {
    pub const ALL: [WizardStep; 5] = [
        WizardStep::Profile,
        WizardStep::Experience,
        WizardStep::Education,
        WizardStep::Skills,
        WizardStep::Preview,
    ];

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::Profile => "Executive Profile",
            WizardStep::Experience => "Professional Experience",
            WizardStep::Education => "Education & Credentials",
            WizardStep::Skills => "Core Competencies",
            WizardStep::Preview => "Resume Preview",
        }
    }

    /// 1-based position, as shown in "Step N of 5".
    pub fn number(self) -> usize {
        WizardStep::ALL
            .iter()
            .position(|s| *s == self)
            .map(|i| i + 1)
            .unwrap_or(1)
    }

    pub fn next(self) -> Option<WizardStep> {
        WizardStep::ALL.get(self.number()).copied()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepProgress {
    pub step: WizardStep,
    pub title: String,
    pub number: usize,
    pub total: usize,
    pub can_advance: bool,
    pub missing_fields: Vec<String>,
    /// Step the wizard moves to once `can_advance` holds; `None` on the last step.
    pub next: Option<WizardStep>,
}

/// Required fields that are still empty, in wire (camelCase) naming.
pub fn missing_required_fields(doc: &ResumeDocument) -> Vec<String> {
    let info = &doc.personal_info;
    let mut missing = Vec::new();
    if info.full_name.is_empty() {
        missing.push("fullName".to_string());
    }
    if info.email.is_empty() {
        missing.push("email".to_string());
    }
    missing
}

pub fn can_advance(step: WizardStep, doc: &ResumeDocument) -> bool {
    match step {
        WizardStep::Profile => missing_required_fields(doc).is_empty(),
        _ => true,
    }
}

pub fn step_progress(step: WizardStep, doc: &ResumeDocument) -> StepProgress {
    let missing_fields = match step {
        WizardStep::Profile => missing_required_fields(doc),
        _ => Vec::new(),
    };
    StepProgress {
        step,
        title: step.title().to_string(),
        number: step.number(),
        total: WizardStep::ALL.len(),
        can_advance: can_advance(step, doc),
        missing_fields,
        next: step.next(),
    }
}
