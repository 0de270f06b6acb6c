//! Top-to-bottom flow layout of a [`VisualDocument`] on an A4-wide page.
//!
//! Every element is placed in page pixels (794px = A4 width at 96dpi). The page is
//! as tall as its content; nothing is paginated.

use crate::layout::font_metrics::{line_height, measure_str};
use crate::layout::wrap::wrap_lines;
use crate::render::visual::{
    period_text, Align, ChipStyle, Color, Element, Section, TextStyle, TitleDecoration,
    VisualDocument,
};

pub const PAGE_WIDTH_PX: f32 = 794.0;

const TOP_BAND_HEIGHT: f32 = 10.0;
const PANEL_PADDING: f32 = 20.0;
const TITLE_GAP: f32 = 12.0;
const TITLE_BAR_GAP: f32 = 12.0;
const UNDERLINE_GAP: f32 = 6.0;
const ROW_GAP: f32 = 16.0;
const MAX_RIGHT_SHARE: f32 = 0.4;
const GROUP_BAR_WIDTH: f32 = 3.0;
const CHIP_PAD_X: f32 = 10.0;
const CHIP_PAD_Y: f32 = 4.0;
const CHIP_GAP: f32 = 8.0;

#[derive(Debug, Clone, PartialEq)]
pub enum PlacedItem {
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    },
    /// One already-wrapped line; `y` is the top of its line box.
    Text {
        x: f32,
        y: f32,
        text: String,
        style: TextStyle,
    },
}

/// A fully placed page, in paint order.
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    pub width: f32,
    pub height: f32,
    pub background: Color,
    pub items: Vec<PlacedItem>,
}

pub fn layout_page(doc: &VisualDocument) -> PageLayout {
    let theme = &doc.theme;
    let padding = f32::from(theme.padding);
    let mut flow = Flow::default();

    let mut y = 0.0;
    if let Some(color) = theme.top_band {
        flow.rect(0.0, 0.0, PAGE_WIDTH_PX, TOP_BAND_HEIGHT, color);
        y = TOP_BAND_HEIGHT;
    }
    y += padding;

    let x = padding;
    let width = PAGE_WIDTH_PX - 2.0 * padding;
    y = flow.elements(&doc.header, x, width, y);
    for section in &doc.sections {
        y += f32::from(theme.section_gap);
        y = flow.section(section, x, width, y);
    }

    PageLayout {
        width: PAGE_WIDTH_PX,
        height: (y + padding).ceil(),
        background: theme.background,
        items: flow.items,
    }
}

fn aligned_offset(align: Align, available: f32, used: f32) -> f32 {
    match align {
        Align::Left => 0.0,
        Align::Center => ((available - used) / 2.0).max(0.0),
        Align::Right => (available - used).max(0.0),
    }
}

/// Single-line width an element wants when it sits in a row's right column.
fn natural_width(element: &Element) -> f32 {
    match element {
        Element::Text(run) => measure_str(run.text.trim(), &run.style),
        Element::Period { start, end, style } => measure_str(&period_text(start, end), style),
        _ => 0.0,
    }
}

#[derive(Default)]
struct Flow {
    items: Vec<PlacedItem>,
}

impl Flow {
    fn rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        if width > 0.0 && height > 0.0 {
            self.items.push(PlacedItem::Rect {
                x,
                y,
                width,
                height,
                color,
            });
        }
    }

    /// Wraps and places `text`; returns the y below the last line.
    fn text_block(&mut self, text: &str, style: &TextStyle, x: f32, width: f32, y: f32) -> f32 {
        let line_h = line_height(style.size);
        let mut y = y;
        for line in wrap_lines(text, style, width) {
            let offset = aligned_offset(style.align, width, measure_str(&line, style));
            self.items.push(PlacedItem::Text {
                x: x + offset,
                y,
                text: line,
                style: *style,
            });
            y += line_h;
        }
        y
    }

    fn elements(&mut self, elements: &[Element], x: f32, width: f32, y: f32) -> f32 {
        elements
            .iter()
            .fold(y, |y, element| self.element(element, x, width, y))
    }

    fn element(&mut self, element: &Element, x: f32, width: f32, y: f32) -> f32 {
        match element {
            Element::Text(run) => self.text_block(&run.text, &run.style, x, width, y),
            Element::Period { start, end, style } => {
                self.text_block(&period_text(start, end), style, x, width, y)
            }
            Element::Row { left, right } => {
                let right_width = right
                    .iter()
                    .map(natural_width)
                    .fold(0.0, f32::max)
                    .min(width * MAX_RIGHT_SHARE);
                let left_width = if right_width > 0.0 {
                    (width - right_width - ROW_GAP).max(0.0)
                } else {
                    width
                };
                let left_end = self.elements(left, x, left_width, y);
                let right_end = self.elements(right, x + width - right_width, right_width, y);
                left_end.max(right_end)
            }
            Element::Chips { items, style } => self.chips(items, style, x, width, y),
            Element::Rule(rule) => {
                let length = rule.length.map(f32::from).unwrap_or(width).min(width);
                let thickness = f32::from(rule.thickness);
                self.rect(x, y, length, thickness, rule.color);
                y + thickness
            }
            Element::Spacer { height } => y + f32::from(*height),
            Element::Group {
                indent,
                bar,
                children,
            } => {
                let indent = f32::from(*indent).min(width);
                let end = self.elements(children, x + indent, width - indent, y);
                if let Some(color) = bar {
                    self.rect(x, y, GROUP_BAR_WIDTH, end - y, *color);
                }
                end
            }
        }
    }

    fn chips(&mut self, items: &[String], style: &ChipStyle, x: f32, width: f32, y: f32) -> f32 {
        let text_style = style.text;
        let line_h = line_height(text_style.size);
        let chip_h = line_h + 2.0 * CHIP_PAD_Y;

        let mut rows: Vec<Vec<(&str, f32)>> = Vec::new();
        let mut row_width = 0.0;
        for item in items.iter().map(|i| i.trim()).filter(|i| !i.is_empty()) {
            let chip_w = (measure_str(item, &text_style) + 2.0 * CHIP_PAD_X).min(width);
            match rows.last_mut() {
                Some(row) if row_width + CHIP_GAP + chip_w <= width => {
                    row.push((item, chip_w));
                    row_width += CHIP_GAP + chip_w;
                }
                _ => {
                    rows.push(vec![(item, chip_w)]);
                    row_width = chip_w;
                }
            }
        }

        let mut y = y;
        for (i, row) in rows.iter().enumerate() {
            if i > 0 {
                y += CHIP_GAP;
            }
            let used: f32 =
                row.iter().map(|(_, w)| w).sum::<f32>() + CHIP_GAP * (row.len() - 1) as f32;
            let mut cx = x + aligned_offset(text_style.align, width, used);
            for (label, chip_w) in row {
                match style.border {
                    Some(border) => {
                        self.rect(cx, y, *chip_w, chip_h, border);
                        self.rect(cx + 1.0, y + 1.0, chip_w - 2.0, chip_h - 2.0, style.fill);
                    }
                    None => self.rect(cx, y, *chip_w, chip_h, style.fill),
                }
                self.items.push(PlacedItem::Text {
                    x: cx + CHIP_PAD_X,
                    y: y + CHIP_PAD_Y,
                    text: (*label).to_string(),
                    style: text_style,
                });
                cx += chip_w + CHIP_GAP;
            }
            y += chip_h;
        }
        y
    }

    fn section(&mut self, section: &Section, x: f32, width: f32, y: f32) -> f32 {
        let panel_slot = self.items.len();
        let (inner_x, inner_width, mut cursor) = match section.panel {
            Some(_) => (x + PANEL_PADDING, width - 2.0 * PANEL_PADDING, y + PANEL_PADDING),
            None => (x, width, y),
        };

        cursor = self.title(section, inner_x, inner_width, cursor);
        cursor += TITLE_GAP;
        cursor = self.elements(&section.body, inner_x, inner_width, cursor);

        if let Some(color) = section.panel {
            cursor += PANEL_PADDING;
            // Behind everything the section just placed.
            self.items.insert(
                panel_slot,
                PlacedItem::Rect {
                    x,
                    y,
                    width,
                    height: cursor - y,
                    color,
                },
            );
        }
        cursor
    }

    fn title(&mut self, section: &Section, x: f32, width: f32, y: f32) -> f32 {
        let title = &section.title;
        match section.decoration {
            TitleDecoration::None => self.text_block(&title.text, &title.style, x, width, y),
            TitleDecoration::LeftBar { color, width: bar } => {
                let bar = f32::from(bar);
                let offset = bar + TITLE_BAR_GAP;
                let end = self.text_block(&title.text, &title.style, x + offset, width - offset, y);
                self.rect(x, y, bar, end - y, color);
                end
            }
            TitleDecoration::Underline(rule) => {
                let end = self.text_block(&title.text, &title.style, x, width, y);
                self.element(&Element::Rule(rule), x, width, end + UNDERLINE_GAP)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::models::{ExperienceEntry, PersonalInfo, ResumeDocument, SkillCategory};
    use crate::render::{render, TemplateVariant};

    fn sample_document() -> ResumeDocument {
        let mut doc = ResumeDocument::new();
        doc.personal_info = PersonalInfo {
            full_name: "Jane Q. Public".into(),
            email: "jane@example.com".into(),
            phone: "+1 555 0100".into(),
            location: "Lisbon".into(),
            summary: "Engineer who ships reliable distributed systems.".into(),
            ..Default::default()
        };
        let mut job = ExperienceEntry::new();
        job.company = "Initech".into();
        job.position = "Staff Engineer".into();
        job.start_date = "2021-06".into();
        job.set_current(true);
        job.description = "Led the billing platform rewrite. ".repeat(12);
        doc.experience.push(job);
        for skill in ["Rust", "PostgreSQL", "Kubernetes", "gRPC", "Terraform"] {
            doc.skills.add(SkillCategory::Technical, skill);
        }
        doc
    }

    fn text_lines(page: &PageLayout) -> Vec<&str> {
        page.items
            .iter()
            .filter_map(|item| match item {
                PlacedItem::Text { text, .. } => Some(text.as_str()),
                PlacedItem::Rect { .. } => None,
            })
            .collect()
    }

    fn horizontal_extent(item: &PlacedItem) -> (f32, f32) {
        match item {
            PlacedItem::Rect { x, width, .. } => (*x, x + width),
            PlacedItem::Text { x, text, style, .. } => (*x, x + measure_str(text, style)),
        }
    }

    #[test]
    fn test_every_item_stays_on_the_page() {
        let doc = sample_document();
        for variant in TemplateVariant::ALL {
            let page = layout_page(&render(&doc, variant));
            assert!(page.height > 0.0);
            for item in &page.items {
                let (left, right) = horizontal_extent(item);
                assert!(left >= 0.0, "{variant}: {item:?}");
                assert!(right <= PAGE_WIDTH_PX + 0.01, "{variant}: {item:?}");
            }
        }
    }

    #[test]
    fn test_layout_is_deterministic() {
        let visual = render(&sample_document(), TemplateVariant::Accent);
        assert_eq!(layout_page(&visual), layout_page(&visual));
    }

    #[test]
    fn test_long_description_wraps_and_grows_the_page() {
        let mut doc = sample_document();
        let visual = render(&doc, TemplateVariant::Standard);
        let long = layout_page(&visual);

        doc.experience[0].description = "Short.".into();
        let short = layout_page(&render(&doc, TemplateVariant::Standard));

        assert!(long.height > short.height);
        assert!(text_lines(&long).len() > text_lines(&short).len() + 1);
    }

    #[test]
    fn test_row_period_hugs_right_margin() {
        let visual = render(&sample_document(), TemplateVariant::Compact);
        let page = layout_page(&visual);
        let padding = f32::from(visual.theme.padding);
        let (_, right) = page
            .items
            .iter()
            .find(|i| matches!(i, PlacedItem::Text { text, .. } if text == "June 2021 - Present"))
            .map(horizontal_extent)
            .unwrap();
        assert!((right - (PAGE_WIDTH_PX - padding)).abs() < 0.01);
    }

    #[test]
    fn test_panel_is_painted_before_section_text() {
        let visual = render(&sample_document(), TemplateVariant::Accent);
        let page = layout_page(&visual);
        let title_index = page
            .items
            .iter()
            .position(|i| matches!(i, PlacedItem::Text { text, .. } if text == "Experience"))
            .unwrap();
        let panel_index = page
            .items
            .iter()
            .position(|i| {
                matches!(i, PlacedItem::Rect { color, width, .. }
                    if *color == crate::render::visual::palette::WHITE && *width > 600.0)
            })
            .unwrap();
        assert!(panel_index < title_index);
    }

    #[test]
    fn test_empty_document_still_has_a_header() {
        let page = layout_page(&render(&ResumeDocument::new(), TemplateVariant::Formal));
        assert_eq!(text_lines(&page), vec!["Your Name"]);
        assert!(page.height > 0.0);
    }
}
