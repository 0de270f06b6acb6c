use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ────────────────────────────────────────────────────────────────────────────
// Sections
// ────────────────────────────────────────────────────────────────────────────

/// Identity and contact details. `full_name` and `email` gate the first wizard step;
/// the model itself accepts any values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    #[serde(rename = "linkedInUrl")]
    pub linkedin_url: String,
    pub portfolio_url: String,
    pub summary: String,
}

/// Missing fields deserialize from [`ExperienceEntry::new`], so an entry sent without
/// an id gets a fresh one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceEntry {
    pub id: String,
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub is_current: bool,
    pub description: String,
    pub achievements: Vec<String>,
}

impl ExperienceEntry {
    /// Blank entry with a freshly generated id.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            company: String::new(),
            position: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            is_current: false,
            description: String::new(),
            achievements: Vec::new(),
        }
    }

    /// Toggles the "currently working here" flag. Checking it wipes the stored end date.
    pub fn set_current(&mut self, current: bool) {
        self.is_current = current;
        if current {
            self.end_date.clear();
        }
    }

    /// The end date as it should be shown. Ongoing roles never have one,
    /// whatever is stored in `end_date`.
    pub fn effective_end_date(&self) -> Option<&str> {
        if self.is_current || self.end_date.is_empty() {
            None
        } else {
            Some(&self.end_date)
        }
    }
}

impl Default for ExperienceEntry {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub field_of_study: String,
    pub graduation_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
}

impl EducationEntry {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            institution: String::new(),
            degree: String::new(),
            field_of_study: String::new(),
            graduation_date: String::new(),
            gpa: None,
        }
    }

    /// GPA with blank strings treated as absent.
    pub fn gpa(&self) -> Option<&str> {
        self.gpa.as_deref().filter(|g| !g.trim().is_empty())
    }
}

impl Default for EducationEntry {
    fn default() -> Self {
        Self::new()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Skills
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Technical,
    Interpersonal,
    Languages,
    Certifications,
}

impl SkillCategory {
    /// Display order used by every template.
    pub const ALL: [SkillCategory; 4] = [
        SkillCategory::Technical,
        SkillCategory::Interpersonal,
        SkillCategory::Languages,
        SkillCategory::Certifications,
    ];
}

/// Four independent skill lists. Each list holds unique, trimmed, case-sensitive values
/// in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillSet {
    pub technical: Vec<String>,
    #[serde(alias = "soft")]
    pub interpersonal: Vec<String>,
    pub languages: Vec<String>,
    pub certifications: Vec<String>,
}

impl SkillSet {
    pub fn get(&self, category: SkillCategory) -> &[String] {
        match category {
            SkillCategory::Technical => &self.technical,
            SkillCategory::Interpersonal => &self.interpersonal,
            SkillCategory::Languages => &self.languages,
            SkillCategory::Certifications => &self.certifications,
        }
    }

    fn get_mut(&mut self, category: SkillCategory) -> &mut Vec<String> {
        match category {
            SkillCategory::Technical => &mut self.technical,
            SkillCategory::Interpersonal => &mut self.interpersonal,
            SkillCategory::Languages => &mut self.languages,
            SkillCategory::Certifications => &mut self.certifications,
        }
    }

    /// Adds a skill after trimming it. Returns `false` when the input was blank or the
    /// category already holds the exact same string.
    pub fn add(&mut self, category: SkillCategory, raw: &str) -> bool {
        let skill = raw.trim();
        if skill.is_empty() {
            return false;
        }
        let list = self.get_mut(category);
        if list.iter().any(|s| s == skill) {
            return false;
        }
        list.push(skill.to_string());
        true
    }

    /// Removes every occurrence of `skill`. Returns whether anything was removed.
    pub fn remove(&mut self, category: SkillCategory, skill: &str) -> bool {
        let list = self.get_mut(category);
        let before = list.len();
        list.retain(|s| s != skill);
        list.len() != before
    }

    pub fn is_empty(&self) -> bool {
        SkillCategory::ALL.iter().all(|c| self.get(*c).is_empty())
    }

    /// Rebuilds every category through [`SkillSet::add`]: values trimmed, blanks
    /// dropped, exact duplicates removed, first occurrence kept.
    pub fn normalized(&self) -> SkillSet {
        let mut out = SkillSet::default();
        for category in SkillCategory::ALL {
            for skill in self.get(category) {
                out.add(category, skill);
            }
        }
        out
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Document
// ────────────────────────────────────────────────────────────────────────────

/// The complete in-memory resume. Whoever holds a snapshot owns it until a new
/// section value is handed back through [`ResumeDocument::replace_section`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeDocument {
    pub personal_info: PersonalInfo,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: SkillSet,
}

/// A wholesale replacement of one section. The four variants are the only sections
/// that exist, so there is no "unknown section" case to handle at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "section", content = "data", rename_all = "camelCase")]
pub enum SectionUpdate {
    PersonalInfo(PersonalInfo),
    Experience(Vec<ExperienceEntry>),
    Education(Vec<EducationEntry>),
    Skills(SkillSet),
}

impl SectionUpdate {
    pub fn section_name(&self) -> &'static str {
        match self {
            SectionUpdate::PersonalInfo(_) => "personalInfo",
            SectionUpdate::Experience(_) => "experience",
            SectionUpdate::Education(_) => "education",
            SectionUpdate::Skills(_) => "skills",
        }
    }
}

impl ResumeDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces one section wholesale. No cross-section validation happens here, but
    /// each section's own invariants are restored: skill lists are normalized and
    /// ongoing roles drop their end date.
    pub fn replace_section(&mut self, update: SectionUpdate) {
        match update {
            SectionUpdate::PersonalInfo(info) => self.personal_info = info,
            SectionUpdate::Experience(mut entries) => {
                for entry in &mut entries {
                    entry.set_current(entry.is_current);
                }
                self.experience = entries;
            }
            SectionUpdate::Education(entries) => self.education = entries,
            SectionUpdate::Skills(skills) => self.skills = skills.normalized(),
        }
    }

    /// True when there is nothing worth exporting yet.
    pub fn is_blank(&self) -> bool {
        self.personal_info.full_name.is_empty()
            && self.experience.is_empty()
            && self.education.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document_is_empty() {
        let doc = ResumeDocument::new();
        assert_eq!(doc.personal_info.full_name, "");
        assert!(doc.experience.is_empty());
        assert!(doc.education.is_empty());
        assert!(doc.skills.is_empty());
        assert!(doc.is_blank());
    }

    #[test]
    fn test_replace_section_only_touches_target() {
        let mut doc = ResumeDocument::new();
        let mut skills = SkillSet::default();
        skills.add(SkillCategory::Technical, "Rust");
        doc.replace_section(SectionUpdate::Skills(skills.clone()));

        doc.replace_section(SectionUpdate::PersonalInfo(PersonalInfo {
            full_name: "Ada Lovelace".to_string(),
            ..Default::default()
        }));

        assert_eq!(doc.skills, skills);
        assert_eq!(doc.personal_info.full_name, "Ada Lovelace");
        assert!(!doc.is_blank());
    }

    #[test]
    fn test_replaced_skills_are_normalized() {
        let mut doc = ResumeDocument::new();
        let raw = SkillSet {
            technical: vec!["Rust".into(), " Rust ".into(), "Rust".into(), "".into()],
            languages: vec!["  Italian".into(), "italian".into()],
            ..Default::default()
        };
        doc.replace_section(SectionUpdate::Skills(raw));
        assert_eq!(doc.skills.technical, vec!["Rust"]);
        assert_eq!(doc.skills.languages, vec!["Italian", "italian"]);
        assert!(doc.skills.interpersonal.is_empty());
    }

    #[test]
    fn test_replaced_current_role_drops_end_date() {
        let mut doc = ResumeDocument::new();
        let mut job = ExperienceEntry::new();
        job.end_date = "2024-01".into();
        job.is_current = true;
        doc.replace_section(SectionUpdate::Experience(vec![job]));
        assert!(doc.experience[0].end_date.is_empty());
    }

    #[test]
    fn test_entry_without_id_gets_one() {
        let json = serde_json::json!([{ "company": "Initech" }, { "company": "Globex" }]);
        let entries: Vec<ExperienceEntry> = serde_json::from_value(json).unwrap();
        assert!(!entries[0].id.is_empty());
        assert_ne!(entries[0].id, entries[1].id);
        assert_eq!(entries[1].company, "Globex");

        let json = serde_json::json!([{ "id": "edu-1", "institution": "MIT" }]);
        let entries: Vec<EducationEntry> = serde_json::from_value(json).unwrap();
        assert_eq!(entries[0].id, "edu-1");
        assert_eq!(entries[0].gpa, None);
    }

    #[test]
    fn test_skill_add_deduplicates_trimmed_value() {
        let mut skills = SkillSet::default();
        assert!(skills.add(SkillCategory::Technical, "Rust"));
        assert!(!skills.add(SkillCategory::Technical, "  Rust "));
        assert_eq!(skills.technical.len(), 1);
    }

    #[test]
    fn test_skill_dedup_is_case_sensitive() {
        let mut skills = SkillSet::default();
        skills.add(SkillCategory::Languages, "english");
        skills.add(SkillCategory::Languages, "English");
        assert_eq!(skills.languages, vec!["english", "English"]);
    }

    #[test]
    fn test_skill_add_ignores_blank_input() {
        let mut skills = SkillSet::default();
        assert!(!skills.add(SkillCategory::Certifications, "   "));
        assert!(skills.is_empty());
    }

    #[test]
    fn test_skill_categories_are_independent() {
        let mut skills = SkillSet::default();
        skills.add(SkillCategory::Technical, "SQL");
        skills.add(SkillCategory::Certifications, "SQL");
        assert_eq!(skills.technical.len(), 1);
        assert_eq!(skills.certifications.len(), 1);
        assert!(skills.remove(SkillCategory::Technical, "SQL"));
        assert!(skills.technical.is_empty());
        assert_eq!(skills.certifications, vec!["SQL"]);
    }

    #[test]
    fn test_current_role_ignores_stored_end_date() {
        let mut exp = ExperienceEntry::new();
        exp.end_date = "2021-04".to_string();
        assert_eq!(exp.effective_end_date(), Some("2021-04"));

        exp.is_current = true;
        assert_eq!(exp.effective_end_date(), None);
    }

    #[test]
    fn test_set_current_clears_end_date() {
        let mut exp = ExperienceEntry::new();
        exp.end_date = "2021-04".to_string();
        exp.set_current(true);
        assert!(exp.end_date.is_empty());
        assert!(exp.achievements.is_empty());
    }

    #[test]
    fn test_new_entries_get_distinct_ids() {
        assert_ne!(ExperienceEntry::new().id, ExperienceEntry::new().id);
        assert_ne!(EducationEntry::new().id, EducationEntry::new().id);
    }

    #[test]
    fn test_section_update_wire_format() {
        let json = serde_json::json!({
            "section": "personalInfo",
            "data": { "fullName": "Jane", "email": "jane@example.com", "linkedInUrl": "in/jane" }
        });
        let update: SectionUpdate = serde_json::from_value(json).unwrap();
        match update {
            SectionUpdate::PersonalInfo(info) => {
                assert_eq!(info.full_name, "Jane");
                assert_eq!(info.linkedin_url, "in/jane");
                assert_eq!(info.phone, "");
            }
            other => panic!("unexpected section {}", other.section_name()),
        }
    }

    #[test]
    fn test_unknown_section_is_rejected() {
        let json = serde_json::json!({ "section": "hobbies", "data": [] });
        assert!(serde_json::from_value::<SectionUpdate>(json).is_err());
    }

    #[test]
    fn test_soft_skills_alias_accepted() {
        let json = serde_json::json!({ "soft": ["Mentoring"] });
        let skills: SkillSet = serde_json::from_value(json).unwrap();
        assert_eq!(skills.interpersonal, vec!["Mentoring"]);
    }

    #[test]
    fn test_blank_gpa_is_absent() {
        let mut edu = EducationEntry::new();
        edu.gpa = Some("  ".to_string());
        assert_eq!(edu.gpa(), None);
        edu.gpa = Some("3.8/4.0".to_string());
        assert_eq!(edu.gpa(), Some("3.8/4.0"));
    }
}
