//! Text formatting rules shared by every template.

use chrono::NaiveDate;

use crate::document::models::{ExperienceEntry, PersonalInfo};

pub const NAME_PLACEHOLDER: &str = "Your Name";
pub const PRESENT: &str = "Present";

/// Formats `YYYY-MM` or `YYYY-MM-DD` as "March 2021". Empty input gives empty output;
/// anything unparseable is shown as typed.
pub fn format_month_year(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return String::new();
    }
    parse_date(raw)
        .map(|d| d.format("%B %Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d"))
        .ok()
}

/// Start and end text for an experience entry. Ongoing roles always end in "Present".
pub fn experience_period(entry: &ExperienceEntry) -> (String, String) {
    let start = format_month_year(&entry.start_date);
    let end = if entry.is_current {
        PRESENT.to_string()
    } else {
        entry
            .effective_end_date()
            .map(format_month_year)
            .unwrap_or_default()
    };
    (start, end)
}

/// The name shown in the header; falls back to a placeholder so the layout keeps its shape.
pub fn display_name(info: &PersonalInfo) -> &str {
    if info.full_name.trim().is_empty() {
        NAME_PLACEHOLDER
    } else {
        &info.full_name
    }
}

/// Drops repeated values, keeping the first occurrence's position.
pub fn dedup_preserving_order(items: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(items.len());
    for item in items {
        if !out.contains(item) {
            out.push(item.clone());
        }
    }
    out
}

/// Non-empty contact fields in display order: email, phone, location, LinkedIn, portfolio.
pub fn contact_fields(info: &PersonalInfo) -> Vec<String> {
    [
        &info.email,
        &info.phone,
        &info.location,
        &info.linkedin_url,
        &info.portfolio_url,
    ]
    .into_iter()
    .filter(|s| !s.trim().is_empty())
    .cloned()
    .collect()
}
