//! Deterministic local rewrites used whenever the remote generator is unavailable.

use crate::enhancement::content_type::ContentType;

pub const SKILL_SEPARATOR: &str = " • ";

const GENERIC_ACHIEVEMENTS: [&str; 2] = [
    "Delivered measurable improvements in team efficiency and operational performance",
    "Collaborated with cross-functional stakeholders to achieve key business objectives",
];

/// Rewrites `text` without any network access. Always returns a value.
pub fn fallback_enhance(content_type: &ContentType, text: &str) -> String {
    match content_type {
        ContentType::ExecutiveSummary => executive_summary(text),
        ContentType::AchievementBullets => achievement_bullets(text),
        ContentType::SkillsRefinement => refine_skills(text),
        ContentType::Other(_) => format!("Enhanced: {text}"),
    }
}

fn executive_summary(text: &str) -> String {
    format!(
        "Accomplished professional with a proven track record of delivering results. {}",
        text.trim()
    )
}

/// First bullet is the original text verbatim, followed by two fixed statements.
fn achievement_bullets(text: &str) -> String {
    std::iter::once(text)
        .chain(GENERIC_ACHIEVEMENTS)
        .map(|line| format!("• {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Splits on commas, trims, drops empty tokens (including a trailing comma's) and
/// rejoins with the bullet separator.
pub fn refine_skills(text: &str) -> String {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(SKILL_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_wraps_text_in_track_record_sentence() {
        let out = fallback_enhance(&ContentType::ExecutiveSummary, " Built teams. ");
        assert!(out.contains("proven track record"));
        assert!(out.ends_with("Built teams."));
    }

    #[test]
    fn test_achievement_bullets_keep_original_first() {
        let out = fallback_enhance(&ContentType::AchievementBullets, "Shipped v2 of the API");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "• Shipped v2 of the API");
        assert_eq!(lines[1], format!("• {}", GENERIC_ACHIEVEMENTS[0]));
        assert_eq!(lines[2], format!("• {}", GENERIC_ACHIEVEMENTS[1]));
    }

    #[test]
    fn test_refine_skills_drops_empty_tokens() {
        assert_eq!(refine_skills(" Rust , SQL,,Kubernetes, "), "Rust • SQL • Kubernetes");
    }

    #[test]
    fn test_refine_skills_single_token() {
        assert_eq!(refine_skills(" Led a team of 5 "), "Led a team of 5");
    }

    #[test]
    fn test_unknown_type_prefixes_text() {
        let out = fallback_enhance(&ContentType::Other("bio".into()), "Hello");
        assert_eq!(out, "Enhanced: Hello");
    }
}
