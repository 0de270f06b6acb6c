//! Export Pipeline: rendered surface -> 2x raster -> single-page A4-width PDF.
//!
//! Pages taller than [`raster::MAX_EDGE_PX`] at 2x are rasterized at the largest scale
//! that fits, so the export stays one page.
//!
//! Everything is assembled in memory; a failure at any stage returns one
//! [`ExportError`] and no bytes. All functions here are CPU-bound and must be called
//! from `tokio::task::spawn_blocking` when running on the async runtime.

use std::io::Cursor;

use bytes::Bytes;
use image::ImageFormat;
use thiserror::Error;
use tracing::{debug, warn};

use crate::layout::layout_page;
use crate::render::VisualDocument;

pub mod file_name;
pub mod handlers;
pub mod pdf;
pub mod raster;

pub use file_name::{attachment_disposition, export_file_name};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("page has no drawable area ({width}x{height} px)")]
    EmptyCanvas { width: u32, height: u32 },

    #[error("page of {width}x{height} px exceeds the raster limit")]
    CanvasTooLarge { width: u32, height: u32 },

    #[error("PDF assembly failed: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),

    #[error("I/O error while encoding: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone)]
pub struct ExportedPdf {
    pub file_name: String,
    pub bytes: Bytes,
    /// Raster size in device pixels, after oversampling.
    pub raster_width: u32,
    pub raster_height: u32,
}

/// Converts `surface` into a single-page PDF named after `file_name_seed`.
pub fn export_to_portable_document(
    surface: &VisualDocument,
    file_name_seed: &str,
) -> Result<ExportedPdf, ExportError> {
    let page = layout_page(surface);
    let scale = raster::fit_scale(&page, raster::EXPORT_SCALE);
    if scale < raster::EXPORT_SCALE {
        warn!(
            page_height = page.height,
            scale, "page too tall for full oversampling; exporting at reduced scale"
        );
    }
    let raster = raster::rasterize(&page, scale)?;
    let (raster_width, raster_height) = raster.dimensions();
    let bytes = pdf::single_page_pdf(&raster)?;

    debug!(
        raster_width,
        raster_height,
        pdf_bytes = bytes.len(),
        "export assembled"
    );

    Ok(ExportedPdf {
        file_name: export_file_name(file_name_seed, surface.variant),
        bytes: Bytes::from(bytes),
        raster_width,
        raster_height,
    })
}

/// Encodes the on-screen preview of `surface` as PNG at 1x.
pub fn preview_png(surface: &VisualDocument) -> Result<Bytes, ExportError> {
    let page = layout_page(surface);
    let raster = raster::rasterize(&page, 1.0)?;
    let mut out = Cursor::new(Vec::new());
    raster.write_to(&mut out, ImageFormat::Png)?;
    Ok(Bytes::from(out.into_inner()))
}
