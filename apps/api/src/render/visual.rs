//! The Visual Surface: a variant-specific, self-contained description of a rendered
//! resume. Sizes are CSS-like pixels on an A4-wide canvas; the layout engine places
//! these elements and the rasterizer draws them.

use serde::{Deserialize, Serialize};

use crate::render::TemplateVariant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn hex(value: u32) -> Self {
        Self::rgb((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }
}

/// Named colours shared by the templates.
pub mod palette {
    use super::Color;

    pub const WHITE: Color = Color::hex(0xffffff);
    pub const SLATE_50: Color = Color::hex(0xf8fafc);
    pub const SLATE_100: Color = Color::hex(0xf1f5f9);
    pub const SLATE_200: Color = Color::hex(0xe2e8f0);
    pub const SLATE_300: Color = Color::hex(0xcbd5e1);
    pub const SLATE_600: Color = Color::hex(0x475569);
    pub const SLATE_700: Color = Color::hex(0x334155);
    pub const SLATE_800: Color = Color::hex(0x1e293b);
    pub const SLATE_900: Color = Color::hex(0x0f172a);
    pub const GRAY_500: Color = Color::hex(0x6b7280);
    pub const GRAY_600: Color = Color::hex(0x4b5563);
    pub const GRAY_700: Color = Color::hex(0x374151);
    pub const GRAY_900: Color = Color::hex(0x111827);
    pub const BLUE_50: Color = Color::hex(0xeff6ff);
    pub const BLUE_100: Color = Color::hex(0xdbeafe);
    pub const BLUE_200: Color = Color::hex(0xbfdbfe);
    pub const BLUE_300: Color = Color::hex(0x93c5fd);
    pub const BLUE_500: Color = Color::hex(0x3b82f6);
    pub const BLUE_600: Color = Color::hex(0x2563eb);
    pub const BLUE_700: Color = Color::hex(0x1d4ed8);
    pub const BLUE_800: Color = Color::hex(0x1e40af);
    pub const INDIGO_200: Color = Color::hex(0xc7d2fe);
    pub const INDIGO_600: Color = Color::hex(0x4f46e5);
    pub const INDIGO_800: Color = Color::hex(0x3730a3);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Em size in layout pixels; line height scales from it.
    pub size: u16,
    pub bold: bool,
    pub color: Color,
    pub align: Align,
}

impl TextStyle {
    pub const fn new(size: u16, color: Color) -> Self {
        Self {
            size,
            bold: false,
            color,
            align: Align::Left,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn aligned(mut self, align: Align) -> Self {
        self.align = align;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRun {
    pub text: String,
    pub style: TextStyle,
}

impl TextRun {
    pub fn new(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChipStyle {
    pub text: TextStyle,
    pub fill: Color,
    pub border: Option<Color>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub color: Color,
    pub thickness: u16,
    /// `None` spans the full content width.
    pub length: Option<u16>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Element {
    Text(TextRun),
    /// Two columns sharing a top edge; the right column hugs the right margin.
    Row {
        left: Vec<Element>,
        right: Vec<Element>,
    },
    /// A date range, drawn as "start - end".
    Period {
        start: String,
        end: String,
        style: TextStyle,
    },
    /// Discrete pills that wrap onto new lines, aligned per `style.text.align`.
    Chips {
        items: Vec<String>,
        style: ChipStyle,
    },
    Rule(Rule),
    Spacer {
        height: u16,
    },
    /// Indented children with an optional vertical bar at the left edge.
    Group {
        indent: u16,
        bar: Option<Color>,
        children: Vec<Element>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Summary,
    Experience,
    Education,
    Skills,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TitleDecoration {
    None,
    LeftBar { color: Color, width: u16 },
    Underline(Rule),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub kind: SectionKind,
    pub title: TextRun,
    pub decoration: TitleDecoration,
    /// Background card behind the whole section.
    pub panel: Option<Color>,
    pub body: Vec<Element>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub background: Color,
    pub padding: u16,
    pub section_gap: u16,
    /// Coloured band across the top edge of the page.
    pub top_band: Option<Color>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualDocument {
    pub variant: TemplateVariant,
    pub theme: Theme,
    pub header: Vec<Element>,
    pub sections: Vec<Section>,
}

impl VisualDocument {
    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    /// Every piece of text in reading order, periods drawn as "start - end".
    pub fn text_content(&self) -> Vec<String> {
        let mut out = Vec::new();
        collect_text(&self.header, &mut out);
        for section in &self.sections {
            out.push(section.title.text.clone());
            collect_text(&section.body, &mut out);
        }
        out
    }
}

fn collect_text(elements: &[Element], out: &mut Vec<String>) {
    for element in elements {
        match element {
            Element::Text(run) => out.push(run.text.clone()),
            Element::Row { left, right } => {
                collect_text(left, out);
                collect_text(right, out);
            }
            Element::Period { start, end, .. } => out.push(period_text(start, end)),
            Element::Chips { items, .. } => out.extend(items.iter().cloned()),
            Element::Group { children, .. } => collect_text(children, out),
            Element::Rule(_) | Element::Spacer { .. } => {}
        }
    }
}

pub fn period_text(start: &str, end: &str) -> String {
    format!("{start} - {end}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color() {
        assert_eq!(Color::hex(0x1e40af), Color::rgb(0x1e, 0x40, 0xaf));
    }

    #[test]
    fn test_text_content_walks_nested_elements() {
        let style = TextStyle::new(14, palette::SLATE_900);
        let doc = VisualDocument {
            variant: TemplateVariant::Standard,
            theme: Theme {
                background: palette::WHITE,
                padding: 32,
                section_gap: 24,
                top_band: None,
            },
            header: vec![Element::Text(TextRun::new("Name", style))],
            sections: vec![Section {
                kind: SectionKind::Experience,
                title: TextRun::new("Experience", style),
                decoration: TitleDecoration::None,
                panel: None,
                body: vec![Element::Group {
                    indent: 8,
                    bar: None,
                    children: vec![Element::Row {
                        left: vec![Element::Text(TextRun::new("Engineer", style))],
                        right: vec![Element::Period {
                            start: "May 2020".into(),
                            end: "Present".into(),
                            style,
                        }],
                    }],
                }],
            }],
        };
        assert_eq!(
            doc.text_content(),
            vec!["Name", "Experience", "Engineer", "May 2020 - Present"]
        );
    }
}
