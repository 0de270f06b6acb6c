//! Formal: left-aligned letterhead, underlined section titles, comma-separated skills.

use crate::document::models::{PersonalInfo, SkillCategory};
use crate::render::format::contact_fields;
use crate::render::templates::{
    push_text, EducationView, ExperienceView, ResumeTemplate, SkillGroup,
};
use crate::render::visual::{
    palette, Align, Element, Rule, Section, SectionKind, TextRun, TextStyle, Theme,
    TitleDecoration,
};
use crate::render::TemplateVariant;

const NAME: TextStyle = TextStyle::new(28, palette::SLATE_900).bold();
const CONTACT: TextStyle = TextStyle::new(13, palette::SLATE_600);
const TITLE: TextStyle = TextStyle::new(16, palette::SLATE_900).bold();
const ROLE: TextStyle = TextStyle::new(15, palette::SLATE_900).bold();
const ORG: TextStyle = TextStyle::new(14, palette::SLATE_700);
const BODY: TextStyle = TextStyle::new(14, palette::SLATE_700);
const META: TextStyle = TextStyle::new(12, palette::SLATE_600).aligned(Align::Right);

pub struct FormalTemplate;

fn skill_label(category: SkillCategory) -> &'static str {
    match category {
        SkillCategory::Technical => "Technical Skills",
        SkillCategory::Interpersonal => "Core Competencies",
        SkillCategory::Languages => "Languages",
        SkillCategory::Certifications => "Certifications",
    }
}

impl ResumeTemplate for FormalTemplate {
    fn variant(&self) -> TemplateVariant {
        TemplateVariant::Formal
    }

    fn theme(&self) -> Theme {
        Theme {
            background: palette::WHITE,
            padding: 48,
            section_gap: 22,
            top_band: None,
        }
    }

    fn header(&self, name: &str, info: &PersonalInfo) -> Vec<Element> {
        let mut out = vec![Element::Text(TextRun::new(name, NAME))];
        out.push(Element::Spacer { height: 6 });
        for contact in contact_fields(info) {
            out.push(Element::Text(TextRun::new(contact, CONTACT)));
        }
        out.push(Element::Spacer { height: 12 });
        out.push(Element::Rule(Rule {
            color: palette::SLATE_300,
            thickness: 1,
            length: None,
        }));
        out
    }

    fn section(&self, kind: SectionKind, body: Vec<Element>) -> Section {
        let title = match kind {
            SectionKind::Summary => "PROFESSIONAL SUMMARY",
            SectionKind::Experience => "PROFESSIONAL EXPERIENCE",
            SectionKind::Education => "EDUCATION",
            SectionKind::Skills => "SKILLS & QUALIFICATIONS",
        };
        Section {
            kind,
            title: TextRun::new(title, TITLE),
            decoration: TitleDecoration::Underline(Rule {
                color: palette::SLATE_200,
                thickness: 1,
                length: None,
            }),
            panel: None,
            body,
        }
    }

    fn summary(&self, summary: &str) -> Vec<Element> {
        vec![Element::Text(TextRun::new(summary, BODY))]
    }

    fn experience(&self, entry: &ExperienceView<'_>) -> Vec<Element> {
        let mut left = Vec::new();
        push_text(&mut left, entry.position, ROLE);
        push_text(&mut left, entry.company, ORG);

        let mut out = vec![Element::Row {
            left,
            right: vec![Element::Period {
                start: entry.start.clone(),
                end: entry.end.clone(),
                style: META,
            }],
        }];
        if !entry.description.is_empty() {
            out.push(Element::Group {
                indent: 16,
                bar: None,
                children: vec![Element::Text(TextRun::new(entry.description, BODY))],
            });
        }
        out.push(Element::Spacer { height: 12 });
        out
    }

    fn education(&self, entry: &EducationView<'_>) -> Vec<Element> {
        let mut left = Vec::new();
        push_text(&mut left, entry.degree, ROLE);
        push_text(&mut left, entry.institution, ORG);
        push_text(&mut left, entry.field_of_study, CONTACT);

        let mut right = Vec::new();
        push_text(&mut right, &entry.graduated, META);
        if let Some(gpa) = entry.gpa {
            right.push(Element::Text(TextRun::new(format!("GPA: {gpa}"), META)));
        }

        vec![Element::Row { left, right }, Element::Spacer { height: 10 }]
    }

    fn skills(&self, groups: &[SkillGroup]) -> Vec<Element> {
        groups
            .iter()
            .map(|group| {
                Element::Text(TextRun::new(
                    format!("{}: {}", skill_label(group.category), group.items.join(", ")),
                    BODY,
                ))
            })
            .collect()
    }
}
