//! Text measurement over the embedded DejaVu Sans faces.
//!
//! Layout widths come from rustybuzz shaping and the rasterizer paints the very glyph
//! ids and positions produced here, so measured and drawn text never disagree.
//! `TextStyle::size` is the em size in layout pixels.

use rustybuzz::{Face, UnicodeBuffer};
use ttf_parser::GlyphId;

use crate::render::visual::TextStyle;

static REGULAR_TTF: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");
static BOLD_TTF: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans-Bold.ttf");

const LINE_HEIGHT_FACTOR: f32 = 1.4;

/// Glyph id every font reserves for "no glyph for this character".
pub const NOTDEF: GlyphId = GlyphId(0);

/// Parsed face for the weight `bold` selects.
///
/// Parsing only reads table headers, so callers create a face per run.
pub fn face(bold: bool) -> Face<'static> {
    let data = if bold { BOLD_TTF } else { REGULAR_TTF };
    Face::from_slice(data, 0).expect("embedded DejaVu Sans is a valid TrueType face")
}

/// Layout pixels per font unit.
pub fn scale(face: &Face<'_>, style: &TextStyle) -> f32 {
    f32::from(style.size) / face.units_per_em() as f32
}

/// Height of one line box, including leading.
pub fn line_height(size: u16) -> f32 {
    f32::from(size) * LINE_HEIGHT_FACTOR
}

/// Distance from the top of a line box to the baseline. The ascender-to-descender
/// extent is centred in the box.
pub fn baseline_offset(style: &TextStyle) -> f32 {
    let face = face(style.bold);
    let scale = scale(&face, style);
    let ascender = f32::from(face.ascender()) * scale;
    let descender = f32::from(face.descender()) * scale;
    (line_height(style.size) - (ascender - descender)) / 2.0 + ascender
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionedGlyph {
    pub id: GlyphId,
    /// Pen position plus shaping offset, from the start of the run.
    pub x: f32,
    /// Shaping offset above the baseline.
    pub y: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShapedRun {
    pub glyphs: Vec<PositionedGlyph>,
    pub width: f32,
}

impl ShapedRun {
    /// True when some character had no glyph in the face and would draw as `.notdef`.
    pub fn has_missing_glyphs(&self) -> bool {
        self.glyphs.iter().any(|g| g.id == NOTDEF)
    }
}

pub fn shape(text: &str, style: &TextStyle) -> ShapedRun {
    let face = face(style.bold);
    shape_with(&face, text, style)
}

pub fn shape_with(face: &Face<'_>, text: &str, style: &TextStyle) -> ShapedRun {
    if text.is_empty() {
        return ShapedRun {
            glyphs: Vec::new(),
            width: 0.0,
        };
    }
    let scale = scale(face, style);

    let mut buffer = UnicodeBuffer::new();
    buffer.push_str(text);
    buffer.guess_segment_properties();
    let output = rustybuzz::shape(face, &[], buffer);

    let mut pen = 0.0;
    let mut glyphs = Vec::new();
    for (info, pos) in output.glyph_infos().iter().zip(output.glyph_positions()) {
        glyphs.push(PositionedGlyph {
            id: GlyphId(info.glyph_id as u16),
            x: pen + pos.x_offset as f32 * scale,
            y: pos.y_offset as f32 * scale,
        });
        pen += pos.x_advance as f32 * scale;
    }
    ShapedRun { glyphs, width: pen }
}

/// Advance width of `s` in layout pixels.
pub fn measure_str(s: &str, style: &TextStyle) -> f32 {
    shape(s, style).width
}
