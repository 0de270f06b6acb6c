use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Selects the prompt template and the local fallback. Unknown labels are kept verbatim
/// in `Other` and get the generic treatment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentType {
    ExecutiveSummary,
    AchievementBullets,
    SkillsRefinement,
    Other(String),
}

impl ContentType {
    pub fn as_str(&self) -> &str {
        match self {
            ContentType::ExecutiveSummary => "executive-summary",
            ContentType::AchievementBullets => "achievement-bullets",
            ContentType::SkillsRefinement => "skills-refinement",
            ContentType::Other(label) => label,
        }
    }
}

impl From<&str> for ContentType {
    fn from(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "executive-summary" | "executive summary" | "summary" => ContentType::ExecutiveSummary,
            "achievement-bullets"
            | "achievements"
            | "job description with quantifiable achievements" => ContentType::AchievementBullets,
            "skills-refinement" | "skills" => ContentType::SkillsRefinement,
            _ => ContentType::Other(label.to_string()),
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ContentType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ContentType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(ContentType::from(label.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels() {
        assert_eq!(ContentType::from("executive-summary"), ContentType::ExecutiveSummary);
        assert_eq!(ContentType::from("Executive Summary"), ContentType::ExecutiveSummary);
        assert_eq!(
            ContentType::from("job description with quantifiable achievements"),
            ContentType::AchievementBullets
        );
        assert_eq!(ContentType::from("skills-refinement"), ContentType::SkillsRefinement);
    }

    #[test]
    fn test_unknown_label_is_preserved() {
        assert_eq!(
            ContentType::from("cover letter"),
            ContentType::Other("cover letter".to_string())
        );
    }

    #[test]
    fn test_serde_uses_labels() {
        let ct: ContentType = serde_json::from_str("\"skills-refinement\"").unwrap();
        assert_eq!(ct, ContentType::SkillsRefinement);
        assert_eq!(
            serde_json::to_string(&ContentType::AchievementBullets).unwrap(),
            "\"achievement-bullets\""
        );
    }
}
