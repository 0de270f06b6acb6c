// One implementation per template variant, all behind `ResumeTemplate`.
// Variants receive content that the driver has already prepared (formatted dates,
// de-duplicated skills, placeholder name) and only decide presentation.

use crate::document::models::{PersonalInfo, SkillCategory};
use crate::render::visual::{Element, Section, SectionKind, TextRun, TextStyle, Theme};
use crate::render::TemplateVariant;

pub mod accent;
pub mod compact;
pub mod formal;
pub mod standard;

pub struct ExperienceView<'a> {
    pub position: &'a str,
    pub company: &'a str,
    pub start: String,
    /// Already "Present" for ongoing roles.
    pub end: String,
    pub description: &'a str,
}

pub struct EducationView<'a> {
    pub degree: &'a str,
    pub institution: &'a str,
    pub field_of_study: &'a str,
    pub graduated: String,
    pub gpa: Option<&'a str>,
}

/// A non-empty, de-duplicated skill category.
pub struct SkillGroup {
    pub category: SkillCategory,
    pub items: Vec<String>,
}

pub trait ResumeTemplate: Send + Sync {
    fn variant(&self) -> TemplateVariant;
    fn theme(&self) -> Theme;
    fn header(&self, name: &str, info: &PersonalInfo) -> Vec<Element>;
    fn section(&self, kind: SectionKind, body: Vec<Element>) -> Section;
    fn summary(&self, summary: &str) -> Vec<Element>;
    fn experience(&self, entry: &ExperienceView<'_>) -> Vec<Element>;
    fn education(&self, entry: &EducationView<'_>) -> Vec<Element>;
    fn skills(&self, groups: &[SkillGroup]) -> Vec<Element>;
}

pub fn template_for(variant: TemplateVariant) -> &'static dyn ResumeTemplate {
    match variant {
        TemplateVariant::Standard => &standard::StandardTemplate,
        TemplateVariant::Formal => &formal::FormalTemplate,
        TemplateVariant::Accent => &accent::AccentTemplate,
        TemplateVariant::Compact => &compact::CompactTemplate,
    }
}

/// Pushes a text element only when `text` is not blank.
pub(crate) fn push_text(out: &mut Vec<Element>, text: &str, style: TextStyle) {
    if !text.trim().is_empty() {
        out.push(Element::Text(TextRun::new(text, style)));
    }
}
