//! Standard: centered executive header, barred section titles, inline skill lists.

use crate::document::models::{PersonalInfo, SkillCategory};
use crate::render::format::contact_fields;
use crate::render::templates::{
    push_text, EducationView, ExperienceView, ResumeTemplate, SkillGroup,
};
use crate::render::visual::{
    palette, Align, ChipStyle, Element, Rule, Section, SectionKind, TextRun, TextStyle, Theme,
    TitleDecoration,
};
use crate::render::TemplateVariant;

const NAME: TextStyle = TextStyle::new(32, palette::SLATE_900).bold().aligned(Align::Center);
const TITLE: TextStyle = TextStyle::new(18, palette::SLATE_900).bold();
const ROLE: TextStyle = TextStyle::new(16, palette::SLATE_900).bold();
const ORG: TextStyle = TextStyle::new(14, palette::SLATE_700).bold();
const BODY: TextStyle = TextStyle::new(14, palette::SLATE_700);
const LABEL: TextStyle = TextStyle::new(14, palette::SLATE_800).bold();
const META: TextStyle = TextStyle::new(12, palette::SLATE_600).aligned(Align::Right);
const CONTACT: ChipStyle = ChipStyle {
    text: TextStyle::new(12, palette::SLATE_600).aligned(Align::Center),
    fill: palette::SLATE_100,
    border: None,
};

pub struct StandardTemplate;

fn skill_label(category: SkillCategory) -> &'static str {
    match category {
        SkillCategory::Technical => "Technical Expertise",
        SkillCategory::Interpersonal => "Leadership Skills",
        SkillCategory::Languages => "Languages",
        SkillCategory::Certifications => "Certifications",
    }
}

impl ResumeTemplate for StandardTemplate {
    fn variant(&self) -> TemplateVariant {
        TemplateVariant::Standard
    }

    fn theme(&self) -> Theme {
        Theme {
            background: palette::WHITE,
            padding: 40,
            section_gap: 28,
            top_band: None,
        }
    }

    fn header(&self, name: &str, info: &PersonalInfo) -> Vec<Element> {
        let mut out = vec![Element::Text(TextRun::new(name, NAME))];
        let contacts = contact_fields(info);
        if !contacts.is_empty() {
            out.push(Element::Spacer { height: 8 });
            out.push(Element::Chips {
                items: contacts,
                style: CONTACT,
            });
        }
        out.push(Element::Spacer { height: 16 });
        out.push(Element::Rule(Rule {
            color: palette::SLATE_700,
            thickness: 2,
            length: None,
        }));
        out
    }

    fn section(&self, kind: SectionKind, body: Vec<Element>) -> Section {
        let title = match kind {
            SectionKind::Summary => "EXECUTIVE SUMMARY",
            SectionKind::Experience => "PROFESSIONAL EXPERIENCE",
            SectionKind::Education => "EDUCATION",
            SectionKind::Skills => "CORE COMPETENCIES",
        };
        Section {
            kind,
            title: TextRun::new(title, TITLE),
            decoration: TitleDecoration::LeftBar {
                color: palette::SLATE_700,
                width: 4,
            },
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
                indent: 16,
                bar: Some(palette::SLATE_200),
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
            right.push(Element::Text(TextRun::new(format!("GPA: {gpa}"), META.bold())));
        }

        vec![
            Element::Group {
                indent: 16,
                bar: Some(palette::SLATE_200),
                children: vec![Element::Row { left, right }],
            },
            Element::Spacer { height: 12 },
        ]
    }

    fn skills(&self, groups: &[SkillGroup]) -> Vec<Element> {
        let mut out = Vec::new();
        for group in groups {
            out.push(Element::Text(TextRun::new(skill_label(group.category), LABEL)));
            out.push(Element::Text(TextRun::new(group.items.join(" • "), BODY)));
            out.push(Element::Spacer { height: 12 });
        }
        out
    }
}
