use ab_glyph_rasterizer::{point, Point, Rasterizer};
use image::{Rgb, RgbImage};
use tracing::warn;
use ttf_parser::OutlineBuilder;

use crate::export::ExportError;
use crate::layout::font_metrics;
use crate::layout::{PageLayout, PlacedItem};
use crate::render::visual::{Color, TextStyle};

/// Oversampling factor applied to every export raster.
pub const EXPORT_SCALE: f32 = 2.0;

/// Largest edge accepted for a single raster, in pixels.
pub const MAX_EDGE_PX: u32 = 16_384;

/// Largest scale, at most `preferred`, at which `page` stays within [`MAX_EDGE_PX`].
pub fn fit_scale(page: &PageLayout, preferred: f32) -> f32 {
    let longest = page.width.max(page.height);
    if longest <= 0.0 {
        return preferred;
    }
    preferred.min(MAX_EDGE_PX as f32 / longest)
}

/// Draws `page` into an RGB buffer at `scale` pixels per layout pixel.
pub fn rasterize(page: &PageLayout, scale: f32) -> Result<RgbImage, ExportError> {
    let width = (page.width * scale).round() as u32;
    let height = (page.height * scale).round() as u32;
    if width == 0 || height == 0 {
        return Err(ExportError::EmptyCanvas { width, height });
    }
    if width > MAX_EDGE_PX || height > MAX_EDGE_PX {
        return Err(ExportError::CanvasTooLarge { width, height });
    }

    let mut canvas = Canvas {
        image: RgbImage::from_pixel(width, height, to_rgb(page.background)),
        scale,
    };
    for item in &page.items {
        match item {
            PlacedItem::Rect {
                x,
                y,
                width,
                height,
                color,
            } => canvas.fill(*x, *y, *width, *height, *color),
            PlacedItem::Text { x, y, text, style } => canvas.text(*x, *y, text, style),
        }
    }
    Ok(canvas.image)
}

fn to_rgb(color: Color) -> Rgb<u8> {
    Rgb([color.r, color.g, color.b])
}

struct Canvas {
    image: RgbImage,
    scale: f32,
}

impl Canvas {
    /// Fills a rectangle given in layout pixels. Anything outside the canvas is clipped;
    /// a non-empty rectangle always covers at least one device pixel.
    fn fill(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        let (max_x, max_y) = self.image.dimensions();
        let span = |start: f32, len: f32, max: u32| -> (u32, u32) {
            let lo = (start * self.scale).round().max(0.0) as u32;
            let hi = ((start + len) * self.scale).round().max(0.0) as u32;
            let hi = if hi <= lo { lo + 1 } else { hi };
            (lo.min(max), hi.min(max))
        };
        let (x0, x1) = span(x, width, max_x);
        let (y0, y1) = span(y, height, max_y);

        let pixel = to_rgb(color);
        for py in y0..y1 {
            for px in x0..x1 {
                self.image.put_pixel(px, py, pixel);
            }
        }
    }

    fn text(&mut self, x: f32, y: f32, text: &str, style: &TextStyle) {
        let face = font_metrics::face(style.bold);
        let run = font_metrics::shape_with(&face, text, style);
        if run.has_missing_glyphs() {
            warn!(text, "font has no glyph for some characters; drawing .notdef");
        }
        let units = font_metrics::scale(&face, style) * self.scale;
        let baseline = (y + font_metrics::baseline_offset(style)) * self.scale;

        for glyph in &run.glyphs {
            let Some(bounds) = face.glyph_bounding_box(glyph.id) else {
                // Blank glyphs such as spaces.
                continue;
            };
            let origin_x = (x + glyph.x) * self.scale;
            let origin_y = baseline - glyph.y * self.scale;

            let left = (origin_x + f32::from(bounds.x_min) * units).floor();
            let top = (origin_y - f32::from(bounds.y_max) * units).floor();
            let right = (origin_x + f32::from(bounds.x_max) * units).ceil();
            let bottom = (origin_y - f32::from(bounds.y_min) * units).ceil();
            if right <= left || bottom <= top {
                continue;
            }

            let mut outline = OutlineRasterizer {
                rasterizer: Rasterizer::new((right - left) as usize, (bottom - top) as usize),
                origin: point(origin_x - left, origin_y - top),
                units,
                start: point(0.0, 0.0),
                last: point(0.0, 0.0),
            };
            if face.outline_glyph(glyph.id, &mut outline).is_none() {
                continue;
            }
            self.blend_coverage(&outline.rasterizer, left as i64, top as i64, style.color);
        }
    }

    /// Mixes `color` into the image by the rasterizer's per-pixel coverage.
    fn blend_coverage(&mut self, coverage: &Rasterizer, left: i64, top: i64, color: Color) {
        let (max_x, max_y) = self.image.dimensions();
        let ink = [color.r, color.g, color.b];
        coverage.for_each_pixel_2d(|px, py, alpha| {
            let ix = u32::try_from(left + i64::from(px));
            let iy = u32::try_from(top + i64::from(py));
            let (Ok(ix), Ok(iy)) = (ix, iy) else {
                return;
            };
            if ix >= max_x || iy >= max_y {
                return;
            }
            let alpha = alpha.clamp(0.0, 1.0);
            if alpha == 0.0 {
                return;
            }
            let pixel = self.image.get_pixel_mut(ix, iy);
            for (channel, ink) in pixel.0.iter_mut().zip(ink) {
                let mixed = f32::from(*channel) * (1.0 - alpha) + f32::from(ink) * alpha;
                *channel = mixed.round() as u8;
            }
        });
    }
}

/// Feeds a glyph outline, in font units with y up, into a coverage rasterizer whose
/// origin sits at the glyph's pen position on the baseline.
struct OutlineRasterizer {
    rasterizer: Rasterizer,
    origin: Point,
    units: f32,
    start: Point,
    last: Point,
}

impl OutlineRasterizer {
    fn map(&self, x: f32, y: f32) -> Point {
        point(self.origin.x + x * self.units, self.origin.y - y * self.units)
    }
}

impl OutlineBuilder for OutlineRasterizer {
    fn move_to(&mut self, x: f32, y: f32) {
        self.start = self.map(x, y);
        self.last = self.start;
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let to = self.map(x, y);
        self.rasterizer.draw_line(self.last, to);
        self.last = to;
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let control = self.map(x1, y1);
        let to = self.map(x, y);
        self.rasterizer.draw_quad(self.last, control, to);
        self.last = to;
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let c1 = self.map(x1, y1);
        let c2 = self.map(x2, y2);
        let to = self.map(x, y);
        self.rasterizer.draw_cubic(self.last, c1, c2, to);
        self.last = to;
    }

    fn close(&mut self) {
        if self.last.x != self.start.x || self.last.y != self.start.y {
            self.rasterizer.draw_line(self.last, self.start);
        }
        self.last = self.start;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::visual::palette;

    fn blank_page(height: f32) -> PageLayout {
        PageLayout {
            width: 100.0,
            height,
            background: palette::WHITE,
            items: vec![],
        }
    }

    #[test]
    fn test_raster_dimensions_follow_scale() {
        let image = rasterize(&blank_page(50.0), EXPORT_SCALE).unwrap();
        assert_eq!(image.dimensions(), (200, 100));
        assert_eq!(image.get_pixel(0, 0), &Rgb([255, 255, 255]));
    }

    #[test]
    fn test_rect_is_scaled_and_clipped() {
        let mut page = blank_page(50.0);
        page.items.push(PlacedItem::Rect {
            x: 90.0,
            y: 10.0,
            width: 40.0,
            height: 5.0,
            color: palette::BLUE_600,
        });
        let image = rasterize(&page, 2.0).unwrap();
        let blue = Rgb([0x25, 0x63, 0xeb]);
        assert_eq!(image.get_pixel(180, 20), &blue);
        assert_eq!(image.get_pixel(199, 29), &blue);
        assert_eq!(image.get_pixel(179, 20), &Rgb([255, 255, 255]));
        assert_eq!(image.get_pixel(180, 30), &Rgb([255, 255, 255]));
    }

    fn ink_pixels(image: &RgbImage) -> usize {
        image.pixels().filter(|p| p.0 != [255, 255, 255]).count()
    }

    fn text_page(text: &str) -> PageLayout {
        let mut page = blank_page(60.0);
        page.items.push(PlacedItem::Text {
            x: 10.0,
            y: 0.0,
            text: text.into(),
            style: TextStyle::new(32, palette::SLATE_900),
        });
        page
    }

    #[test]
    fn test_text_puts_ink_within_its_measured_box() {
        let page = text_page("I");
        let image = rasterize(&page, 1.0).unwrap();
        assert!(ink_pixels(&image) > 20);

        let style = TextStyle::new(32, palette::SLATE_900);
        let right = 10.0 + font_metrics::measure_str("I", &style);
        for (x, _, pixel) in image.enumerate_pixels() {
            if pixel.0 != [255, 255, 255] {
                assert!(x >= 10 && (x as f32) <= right.ceil(), "ink at x={x}");
            }
        }
    }

    #[test]
    fn test_diacritics_are_drawn() {
        let plain = rasterize(&text_page("e"), 1.0).unwrap();
        let accented = rasterize(&text_page("ë"), 1.0).unwrap();
        assert!(ink_pixels(&accented) > ink_pixels(&plain));
    }

    #[test]
    fn test_blank_text_leaves_page_untouched() {
        let image = rasterize(&text_page("   "), 1.0).unwrap();
        assert_eq!(ink_pixels(&image), 0);
    }

    #[test]
    fn test_fit_scale_shrinks_only_tall_pages() {
        assert_eq!(fit_scale(&blank_page(50.0), EXPORT_SCALE), EXPORT_SCALE);

        let tall = blank_page(10_000.0);
        let scale = fit_scale(&tall, EXPORT_SCALE);
        assert!(scale < EXPORT_SCALE);
        let image = rasterize(&tall, scale).unwrap();
        assert!(image.height() <= MAX_EDGE_PX);
        assert!(image.height() >= MAX_EDGE_PX - 1);
    }

    #[test]
    fn test_empty_canvas_is_rejected() {
        let err = rasterize(&blank_page(0.0), EXPORT_SCALE).unwrap_err();
        assert!(matches!(err, ExportError::EmptyCanvas { .. }));
    }

    #[test]
    fn test_oversized_canvas_is_rejected() {
        let err = rasterize(&blank_page(20_000.0), EXPORT_SCALE).unwrap_err();
        assert!(matches!(err, ExportError::CanvasTooLarge { .. }));
    }
}
