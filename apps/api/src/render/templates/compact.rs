//! Compact: light header with a short rule, small-caps titles, unlabelled skill lines.

use crate::document::models::PersonalInfo;
use crate::render::format::contact_fields;
use crate::render::templates::{
    push_text, EducationView, ExperienceView, ResumeTemplate, SkillGroup,
};
use crate::render::visual::{
    palette, Align, Element, Rule, Section, SectionKind, TextRun, TextStyle, Theme,
    TitleDecoration,
};
use crate::render::TemplateVariant;

const NAME: TextStyle = TextStyle::new(28, palette::GRAY_900);
const CONTACT: TextStyle = TextStyle::new(12, palette::GRAY_600);
const TITLE: TextStyle = TextStyle::new(12, palette::GRAY_900).bold();
const ROLE: TextStyle = TextStyle::new(14, palette::GRAY_900).bold();
const ORG: TextStyle = TextStyle::new(12, palette::GRAY_700);
const BODY: TextStyle = TextStyle::new(12, palette::GRAY_600);
const META: TextStyle = TextStyle::new(11, palette::GRAY_500).aligned(Align::Right);

const SEPARATOR: &str = " • ";

pub struct CompactTemplate;

impl ResumeTemplate for CompactTemplate {
    fn variant(&self) -> TemplateVariant {
        TemplateVariant::Compact
    }

    fn theme(&self) -> Theme {
        Theme {
            background: palette::WHITE,
            padding: 48,
            section_gap: 32,
            top_band: None,
        }
    }

    fn header(&self, name: &str, info: &PersonalInfo) -> Vec<Element> {
        let mut out = vec![
            Element::Text(TextRun::new(name, NAME)),
            Element::Spacer { height: 6 },
            Element::Rule(Rule {
                color: palette::GRAY_900,
                thickness: 2,
                length: Some(80),
            }),
        ];
        let contacts = contact_fields(info);
        if !contacts.is_empty() {
            out.push(Element::Spacer { height: 12 });
            out.push(Element::Text(TextRun::new(contacts.join(SEPARATOR), CONTACT)));
        }
        out
    }

    fn section(&self, kind: SectionKind, body: Vec<Element>) -> Section {
        let title = match kind {
            SectionKind::Summary => "SUMMARY",
            SectionKind::Experience => "EXPERIENCE",
            SectionKind::Education => "EDUCATION",
            SectionKind::Skills => "SKILLS",
        };
        Section {
            kind,
            title: TextRun::new(title, TITLE),
            decoration: TitleDecoration::None,
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

        let mut out = vec![Element::Row {
            left,
            right: vec![Element::Period {
                start: entry.start.clone(),
                end: entry.end.clone(),
                style: META,
            }],
        }];
        push_text(&mut out, entry.company, ORG);
        push_text(&mut out, entry.description, BODY);
        out.push(Element::Spacer { height: 16 });
        out
    }

    fn education(&self, entry: &EducationView<'_>) -> Vec<Element> {
        let mut left = Vec::new();
        push_text(&mut left, entry.degree, ROLE);

        let mut right = Vec::new();
        push_text(&mut right, &entry.graduated, META);

        let mut out = vec![Element::Row { left, right }];
        push_text(&mut out, entry.institution, ORG);
        push_text(&mut out, entry.field_of_study, BODY);
        if let Some(gpa) = entry.gpa {
            out.push(Element::Text(TextRun::new(format!("GPA: {gpa}"), BODY)));
        }
        out.push(Element::Spacer { height: 12 });
        out
    }

    fn skills(&self, groups: &[SkillGroup]) -> Vec<Element> {
        groups
            .iter()
            .map(|group| Element::Text(TextRun::new(group.items.join(SEPARATOR), BODY)))
            .collect()
    }
}
