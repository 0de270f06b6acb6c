//! Template Renderer — pure projection of a [`ResumeDocument`] onto one of the
//! template variants.
//!
//! The driver in this module owns the rules every variant shares (empty sections are
//! omitted, dates are formatted once, ongoing roles end in "Present", the name
//! placeholder). Variants only decide how the prepared content looks.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::document::models::{ResumeDocument, SkillCategory};

pub mod format;
pub mod handlers;
pub mod templates;
pub mod visual;

pub use visual::{SectionKind, VisualDocument};

use format::{dedup_preserving_order, display_name, experience_period, format_month_year};
use templates::{template_for, EducationView, ExperienceView, SkillGroup};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateVariant {
    #[default]
    #[serde(alias = "modern", alias = "Standard")]
    Standard,
    #[serde(alias = "classic", alias = "Formal")]
    Formal,
    #[serde(alias = "creative", alias = "Accent")]
    Accent,
    #[serde(alias = "minimal", alias = "Compact")]
    Compact,
}

impl TemplateVariant {
    pub const ALL: [TemplateVariant; 4] = [
        TemplateVariant::Standard,
        TemplateVariant::Formal,
        TemplateVariant::Accent,
        TemplateVariant::Compact,
    ];

    /// Identifier used in exported file names.
    pub fn identifier(self) -> &'static str {
        match self {
            TemplateVariant::Standard => "Standard",
            TemplateVariant::Formal => "Formal",
            TemplateVariant::Accent => "Accent",
            TemplateVariant::Compact => "Compact",
        }
    }
}

impl fmt::Display for TemplateVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

/// Renders `doc` with `variant`. Same input, same output; `doc` is never modified.
pub fn render(doc: &ResumeDocument, variant: TemplateVariant) -> VisualDocument {
    let template = template_for(variant);
    let info = &doc.personal_info;

    let mut sections = Vec::new();

    if !info.summary.trim().is_empty() {
        let body = template.summary(info.summary.trim());
        sections.push(template.section(SectionKind::Summary, body));
    }

    if !doc.experience.is_empty() {
        let body = doc
            .experience
            .iter()
            .flat_map(|entry| {
                let (start, end) = experience_period(entry);
                template.experience(&ExperienceView {
                    position: &entry.position,
                    company: &entry.company,
                    start,
                    end,
                    description: entry.description.trim(),
                })
            })
            .collect();
        sections.push(template.section(SectionKind::Experience, body));
    }

    if !doc.education.is_empty() {
        let body = doc
            .education
            .iter()
            .flat_map(|entry| {
                template.education(&EducationView {
                    degree: &entry.degree,
                    institution: &entry.institution,
                    field_of_study: &entry.field_of_study,
                    graduated: format_month_year(&entry.graduation_date),
                    gpa: entry.gpa(),
                })
            })
            .collect();
        sections.push(template.section(SectionKind::Education, body));
    }

    let groups: Vec<SkillGroup> = SkillCategory::ALL
        .iter()
        .map(|category| SkillGroup {
            category: *category,
            items: dedup_preserving_order(doc.skills.get(*category)),
        })
        .filter(|g| !g.items.is_empty())
        .collect();
    if !groups.is_empty() {
        let body = template.skills(&groups);
        sections.push(template.section(SectionKind::Skills, body));
    }

    VisualDocument {
        variant,
        theme: template.theme(),
        header: template.header(display_name(info), info),
        sections,
    }
}
