//! Accent: tinted page with a coloured band, carded sections and skill chips.

use crate::document::models::{PersonalInfo, SkillCategory};
use crate::render::format::contact_fields;
use crate::render::templates::{
    push_text, EducationView, ExperienceView, ResumeTemplate, SkillGroup,
};
use crate::render::visual::{
    palette, Align, ChipStyle, Color, Element, Section, SectionKind, TextRun, TextStyle, Theme,
    TitleDecoration,
};
use crate::render::TemplateVariant;

const NAME: TextStyle = TextStyle::new(32, palette::BLUE_600).bold().aligned(Align::Center);
const TITLE: TextStyle = TextStyle::new(18, palette::SLATE_800).bold();
const ROLE: TextStyle = TextStyle::new(16, palette::SLATE_900).bold();
const ORG: TextStyle = TextStyle::new(14, palette::BLUE_700).bold();
const BODY: TextStyle = TextStyle::new(14, palette::SLATE_700);
const LABEL: TextStyle = TextStyle::new(14, palette::BLUE_800).bold();
const META: TextStyle = TextStyle::new(12, palette::SLATE_600).aligned(Align::Right);
const CONTACT: ChipStyle = ChipStyle {
    text: TextStyle::new(12, palette::SLATE_700).aligned(Align::Center),
    fill: palette::WHITE,
    border: Some(palette::BLUE_200),
};

pub struct AccentTemplate;

fn skill_label(category: SkillCategory) -> &'static str {
    match category {
        SkillCategory::Technical => "Technical Skills",
        SkillCategory::Interpersonal => "Leadership Skills",
        SkillCategory::Languages => "Languages",
        SkillCategory::Certifications => "Certifications",
    }
}

/// Chip fill and ink per category, alternating blue and indigo.
fn chip_colors(category: SkillCategory) -> (Color, Color) {
    match category {
        SkillCategory::Technical => (palette::BLUE_200, palette::BLUE_800),
        SkillCategory::Interpersonal => (palette::INDIGO_200, palette::INDIGO_800),
        SkillCategory::Languages => (palette::BLUE_100, palette::BLUE_800),
        SkillCategory::Certifications => (palette::INDIGO_200, palette::INDIGO_800),
    }
}

impl ResumeTemplate for AccentTemplate {
    fn variant(&self) -> TemplateVariant {
        TemplateVariant::Accent
    }

    fn theme(&self) -> Theme {
        Theme {
            background: palette::BLUE_50,
            padding: 40,
            section_gap: 24,
            top_band: Some(palette::INDIGO_600),
        }
    }

    fn header(&self, name: &str, info: &PersonalInfo) -> Vec<Element> {
        let mut out = vec![
            Element::Spacer { height: 16 },
            Element::Text(TextRun::new(name, NAME)),
        ];
        let contacts = contact_fields(info);
        if !contacts.is_empty() {
            out.push(Element::Spacer { height: 12 });
            out.push(Element::Chips {
                items: contacts,
                style: CONTACT,
            });
        }
        out
    }

    fn section(&self, kind: SectionKind, body: Vec<Element>) -> Section {
        let title = match kind {
            SectionKind::Summary => "Professional Summary",
            SectionKind::Experience => "Experience",
            SectionKind::Education => "Education",
            SectionKind::Skills => "Skills & Expertise",
        };
        Section {
            kind,
            title: TextRun::new(title, TITLE),
            decoration: TitleDecoration::LeftBar {
                color: palette::BLUE_600,
                width: 6,
            },
            panel: Some(palette::WHITE),
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

        let mut children = vec![Element::Row {
            left,
            right: vec![Element::Period {
                start: entry.start.clone(),
                end: entry.end.clone(),
                style: META,
            }],
        }];
        push_text(&mut children, entry.description, BODY);

        vec![
            Element::Group {
                indent: 20,
                bar: Some(palette::BLUE_300),
                children,
            },
            Element::Spacer { height: 16 },
        ]
    }

    fn education(&self, entry: &EducationView<'_>) -> Vec<Element> {
        let mut left = Vec::new();
        push_text(&mut left, entry.degree, ROLE);
        push_text(&mut left, entry.institution, ORG);
        push_text(&mut left, entry.field_of_study, BODY);

        let mut right = Vec::new();
        push_text(&mut right, &entry.graduated, META);
        if let Some(gpa) = entry.gpa {
            right.push(Element::Text(TextRun::new(format!("GPA: {gpa}"), META)));
        }

        vec![
            Element::Group {
                indent: 20,
                bar: Some(palette::BLUE_300),
                children: vec![Element::Row { left, right }],
            },
            Element::Spacer { height: 12 },
        ]
    }

    fn skills(&self, groups: &[SkillGroup]) -> Vec<Element> {
        let mut out = Vec::new();
        for group in groups {
            let (fill, ink) = chip_colors(group.category);
            out.push(Element::Text(TextRun::new(skill_label(group.category), LABEL)));
            out.push(Element::Spacer { height: 4 });
            out.push(Element::Chips {
                items: group.items.clone(),
                style: ChipStyle {
                    text: TextStyle::new(12, ink),
                    fill,
                    border: None,
                },
            });
            out.push(Element::Spacer { height: 12 });
        }
        out
    }
}
