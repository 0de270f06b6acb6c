// Prompt templates for the enhancement service.
// Replace `{text}`, `{plain_output}` and `{no_fabrication}` before sending.

use crate::enhancement::content_type::ContentType;
use crate::llm_client::prompts::{NO_FABRICATION_INSTRUCTION, PLAIN_OUTPUT_INSTRUCTION};

pub const EXECUTIVE_SUMMARY_TEMPLATE: &str = "\
You are an executive resume writer. Rewrite the following professional summary as a \
compelling 2-3 sentence executive summary that highlights leadership, scope, and value \
proposition.

{no_fabrication}
{plain_output}

Summary:
{text}";

pub const ACHIEVEMENT_BULLETS_TEMPLATE: &str = "\
You are an executive resume writer. Rewrite the following job description as three concise \
achievement bullets, each starting with a strong action verb and stating a quantifiable \
outcome where the original supports one. Put each bullet on its own line, prefixed with \"• \".

{no_fabrication}
{plain_output}

Job description:
{text}";

pub const SKILLS_REFINEMENT_TEMPLATE: &str = "\
You are an executive resume writer. Normalize the following comma-separated skills into \
industry-standard terminology. Remove duplicates and return them on one line separated by \" • \".

{plain_output}

Skills:
{text}";

pub const GENERIC_TEMPLATE: &str = "\
You are an executive resume writer. Improve the following resume text so it reads clearly and \
professionally.

{no_fabrication}
{plain_output}

Text:
{text}";

pub fn template_for(content_type: &ContentType) -> &'static str {
    match content_type {
        ContentType::ExecutiveSummary => EXECUTIVE_SUMMARY_TEMPLATE,
        ContentType::AchievementBullets => ACHIEVEMENT_BULLETS_TEMPLATE,
        ContentType::SkillsRefinement => SKILLS_REFINEMENT_TEMPLATE,
        ContentType::Other(_) => GENERIC_TEMPLATE,
    }
}

/// Fills the template for `content_type` with the literal, untrimmed `text`.
pub fn build_prompt(content_type: &ContentType, text: &str) -> String {
    template_for(content_type)
        .replace("{no_fabrication}", NO_FABRICATION_INSTRUCTION)
        .replace("{plain_output}", PLAIN_OUTPUT_INSTRUCTION)
        .replace("{text}", text)
}
