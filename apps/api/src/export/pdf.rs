use std::io::Write;

use flate2::write::ZlibEncoder;
use flate2::Compression;
use image::RgbImage;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use crate::export::ExportError;

/// A4 portrait width in PDF points.
pub const A4_WIDTH_PT: f32 = 595.28;

const IMAGE_NAME: &str = "Im0";

/// Page height that keeps the raster's aspect ratio at A4 width.
pub fn page_height_for(raster_width: u32, raster_height: u32) -> f32 {
    A4_WIDTH_PT * raster_height as f32 / raster_width as f32
}

/// Builds a one-page PDF whose only content is `raster`, drawn edge to edge.
pub fn single_page_pdf(raster: &RgbImage) -> Result<Vec<u8>, ExportError> {
    let (raster_width, raster_height) = raster.dimensions();
    let page_width = A4_WIDTH_PT;
    let page_height = page_height_for(raster_width, raster_height);

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(raster.as_raw())?;
    let pixels = encoder.finish()?;
    let image_id = doc.add_object(Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => raster_width as i64,
            "Height" => raster_height as i64,
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8,
            "Filter" => "FlateDecode",
        },
        pixels,
    ));

    // Scale the unit image square to the full page.
    let content = Content {
        operations: vec![
            Operation::new("q", vec![]),
            Operation::new(
                "cm",
                vec![
                    page_width.into(),
                    0.into(),
                    0.into(),
                    page_height.into(),
                    0.into(),
                    0.into(),
                ],
            ),
            Operation::new("Do", vec![Object::Name(IMAGE_NAME.as_bytes().to_vec())]),
            Operation::new("Q", vec![]),
        ],
    };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));

    let resources_id = doc.add_object(dictionary! {
        "XObject" => dictionary! {
            IMAGE_NAME => image_id,
        },
    });
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => vec![0.into(), 0.into(), page_width.into(), page_height.into()],
        "Contents" => content_id,
        "Resources" => resources_id,
    });
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn media_box(doc: &Document) -> Vec<f32> {
        let (_, page_id) = doc.get_pages().into_iter().next().unwrap();
        let page = doc.get_dictionary(page_id).unwrap();
        page.get(b"MediaBox")
            .unwrap()
            .as_array()
            .unwrap()
            .iter()
            .map(|o| o.as_float().unwrap())
            .collect()
    }

    #[test]
    fn test_single_page_matches_raster_aspect_ratio() {
        let raster = RgbImage::from_pixel(400, 1000, Rgb([255, 255, 255]));
        let bytes = single_page_pdf(&raster).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.5"));

        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 1);

        let mb = media_box(&doc);
        assert!((mb[2] - A4_WIDTH_PT).abs() < 0.01);
        assert!((mb[3] / mb[2] - 2.5).abs() < 0.001);
    }

    #[test]
    fn test_page_height_for_square_raster_is_page_width() {
        assert!((page_height_for(1588, 1588) - A4_WIDTH_PT).abs() < f32::EPSILON);
    }
}
