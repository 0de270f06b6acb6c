use std::sync::LazyLock;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;

use crate::render::TemplateVariant;

const DEFAULT_STEM: &str = "resume";

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("static regex is valid"));

/// RFC 5987 `attr-char`: everything else is percent-encoded in `filename*`.
const ATTR_CHAR: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'!')
    .remove(b'#')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b'-')
    .remove(b'.')
    .remove(b'^')
    .remove(b'_')
    .remove(b'`')
    .remove(b'|')
    .remove(b'~');

/// `<seed with whitespace runs as "_", or "resume">_<Variant>_resume.pdf`
pub fn export_file_name(seed: &str, variant: TemplateVariant) -> String {
    let stem = WHITESPACE_RUN.replace_all(seed, "_");
    let stem = if stem.is_empty() { DEFAULT_STEM } else { stem.as_ref() };
    format!("{stem}_{}_resume.pdf", variant.identifier())
}

/// `Content-Disposition` value for downloading `file_name`.
///
/// The quoted `filename` is an ASCII fallback with quotes, backslashes and anything
/// non-printable replaced by `_`; `filename*` carries the exact UTF-8 name.
pub fn attachment_disposition(file_name: &str) -> String {
    let fallback: String = file_name
        .chars()
        .map(|c| match c {
            '"' | '\\' => '_',
            c if c.is_ascii_graphic() || c == ' ' => c,
            _ => '_',
        })
        .collect();
    let encoded = utf8_percent_encode(file_name, ATTR_CHAR);
    format!("attachment; filename=\"{fallback}\"; filename*=UTF-8''{encoded}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_is_sanitized() {
        assert_eq!(
            export_file_name("Jane Q. Public", TemplateVariant::Standard),
            "Jane_Q._Public_Standard_resume.pdf"
        );
    }

    #[test]
    fn test_empty_name_uses_default_stem() {
        assert_eq!(
            export_file_name("", TemplateVariant::Standard),
            "resume_Standard_resume.pdf"
        );
    }

    #[test]
    fn test_whitespace_runs_collapse_to_one_underscore() {
        assert_eq!(
            export_file_name("Ada \t\n Lovelace", TemplateVariant::Compact),
            "Ada_Lovelace_Compact_resume.pdf"
        );
        // Leading and trailing runs are kept, just collapsed.
        assert_eq!(
            export_file_name(" Ada ", TemplateVariant::Formal),
            "_Ada__Formal_resume.pdf"
        );
    }

    #[test]
    fn test_plain_name_disposition() {
        assert_eq!(
            attachment_disposition("Jane_Q._Public_Standard_resume.pdf"),
            "attachment; filename=\"Jane_Q._Public_Standard_resume.pdf\"; \
             filename*=UTF-8''Jane_Q._Public_Standard_resume.pdf"
        );
    }

    #[test]
    fn test_quotes_and_backslashes_cannot_break_the_header() {
        let name = export_file_name("Jane \"JQ\" \\Public", TemplateVariant::Standard);
        let value = attachment_disposition(&name);
        assert!(value.starts_with(
            "attachment; filename=\"Jane__JQ___Public_Standard_resume.pdf\"; "
        ));
        assert!(value.ends_with("filename*=UTF-8''Jane_%22JQ%22_%5CPublic_Standard_resume.pdf"));
        assert!(axum::http::HeaderValue::from_str(&value).is_ok());
    }

    #[test]
    fn test_non_ascii_name_keeps_exact_utf8_form() {
        let name = export_file_name("Zoë Ångström", TemplateVariant::Formal);
        let value = attachment_disposition(&name);
        assert!(value.contains("filename=\"Zo__ngstr_m_Formal_resume.pdf\""));
        assert!(value.ends_with("filename*=UTF-8''Zo%C3%AB_%C3%85ngstr%C3%B6m_Formal_resume.pdf"));
    }
}
