// Document Model: the section-partitioned resume shared by every wizard step.
// Sections are replaced wholesale; nothing here is persisted.

pub mod handlers;
pub mod models;
pub mod progress;

pub use models::{
    EducationEntry, ExperienceEntry, PersonalInfo, ResumeDocument, SectionUpdate, SkillCategory,
    SkillSet,
};
