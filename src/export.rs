//! Capturing a rendered card and turning it into a single-page PDF.
//!
//! ```no_run
//! use futures::executor::block_on;
//! use std::rc::Rc;
//! use ticket_pdf::{export_to_document, ExportOptions, Font, Scene, TicketCard, TicketRecord};
//!
//! let record = TicketRecord::default();
//! let font = Font::load(std::fs::read("assets/DejaVuSans-Bold.ttf")?)?;
//! let mut scene = Scene::new(600.0, 200.0).with_font(Rc::new(font));
//! TicketCard::default().draw(&record, &mut scene);
//!
//! let handle = block_on(export_to_document(&scene, &record, &ExportOptions::default()))?;
//! handle.write(std::fs::File::create(&handle.name)?)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::capture::{CaptureResult, Fidelity, RenderRegion};
use crate::document::Document;
use crate::error::{ExportError, TicketError};
use crate::image::{Image, ImageCompression};
use crate::info::Info;
use crate::page::{ImageLayout, Page};
use crate::pagesize::{Orientation, PageOrientation, PageSize};
use crate::ticket::TicketRecord;
use crate::units::{Pt, Unit};
use std::io::Write;

/// The largest page side PDF readers are required to accept, in points
pub const MAX_PAGE_SIDE: f32 = 14_400.0;

/// How the page is sized around the captured bitmap
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PageFit {
    /// A page exactly as wide as `width` (in the export unit), as tall as the bitmap's
    /// aspect ratio requires, with the bitmap covering all of it
    MatchBitmap { width: f32 },
    /// A standard paper size turned to the bitmap's orientation. The bitmap is scaled to
    /// the page width, or to the page height if that would overflow, and anchored in the
    /// top-left corner.
    Paper(PageSize),
}

impl Default for PageFit {
    fn default() -> Self {
        PageFit::MatchBitmap { width: 210.0 }
    }
}

/// Knobs for [export_to_document]
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOptions {
    /// Supersampling factor the region is captured at
    pub scale: f32,
    /// Unit that [PageFit::MatchBitmap] widths are given in and that [ExportPage]
    /// reports its dimensions in
    pub unit: Unit,
    pub fit: PageFit,
    pub compression: ImageCompression,
}

impl Default for ExportOptions {
    fn default() -> Self {
        ExportOptions {
            scale: Fidelity::default().scale(),
            unit: Unit::Mm,
            fit: PageFit::default(),
            compression: ImageCompression::default(),
        }
    }
}

impl ExportOptions {
    pub fn new() -> ExportOptions {
        ExportOptions::default()
    }

    /// Capture at one of the preset scales
    pub fn fidelity(&mut self, fidelity: Fidelity) -> &mut Self {
        self.scale = fidelity.scale();
        self
    }

    /// Capture at an arbitrary scale. Scales that are not positive and finite make the
    /// export fail with [CaptureError::InvalidScale](crate::CaptureError::InvalidScale).
    pub fn scale(&mut self, scale: f32) -> &mut Self {
        self.scale = scale;
        self
    }

    pub fn unit(&mut self, unit: Unit) -> &mut Self {
        self.unit = unit;
        self
    }

    pub fn fit(&mut self, fit: PageFit) -> &mut Self {
        self.fit = fit;
        self
    }

    pub fn compression(&mut self, compression: ImageCompression) -> &mut Self {
        self.compression = compression;
        self
    }
}

/// The geometry of the exported page, derived from the captured bitmap
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ExportPage {
    pub width: Pt,
    pub height: Pt,
    pub orientation: Orientation,
    pub unit: Unit,
    /// Extent of the bitmap on the page, anchored top-left
    pub image_width: Pt,
    pub image_height: Pt,
}

impl ExportPage {
    /// Size a page for `capture`, refusing pages PDF readers can't display
    pub fn from_capture(capture: &CaptureResult, unit: Unit, fit: PageFit) -> Result<ExportPage, ExportError> {
        let bitmap_width = capture.bitmap_width() as f32;
        let bitmap_height = capture.bitmap_height() as f32;
        let orientation = Orientation::of(bitmap_width, bitmap_height);

        let (width, height, image_width, image_height) = match fit {
            PageFit::MatchBitmap { width } => {
                let width = unit.to_pt(width);
                let height = width * (bitmap_height / bitmap_width);
                (width, height, width, height)
            }
            PageFit::Paper(size) => {
                let (width, height) = size.oriented(orientation);
                let mut image_width = width;
                let mut image_height = width * (bitmap_height / bitmap_width);
                if image_height > height {
                    image_height = height;
                    image_width = height * (bitmap_width / bitmap_height);
                }
                (width, height, image_width, image_height)
            }
        };

        if !(width.0.is_finite() && height.0.is_finite() && width.0 > 0.0 && height.0 > 0.0) {
            return Err(ExportError::InvalidPageSize {
                width: width.0,
                height: height.0,
            });
        }
        if width.0 > MAX_PAGE_SIDE || height.0 > MAX_PAGE_SIDE {
            return Err(ExportError::PageTooLarge {
                width: width.0,
                height: height.0,
                limit: MAX_PAGE_SIDE,
            });
        }

        Ok(ExportPage {
            width,
            height,
            orientation,
            unit,
            image_width,
            image_height,
        })
    }

    /// Page width and height in the page's unit
    pub fn size_in_unit(&self) -> (f32, f32) {
        (self.unit.from_pt(self.width), self.unit.from_pt(self.height))
    }

    /// Width over height
    pub fn aspect_ratio(&self) -> f32 {
        self.width / self.height
    }
}

/// A finished boarding pass document
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentHandle {
    /// The suggested file name
    pub name: String,
    pub page: ExportPage,
    /// The encoded PDF
    pub bytes: Vec<u8>,
}

impl DocumentHandle {
    pub fn write<W: Write>(&self, mut w: W) -> Result<(), ExportError> {
        w.write_all(&self.bytes).map_err(Into::into)
    }
}

/// Capture `region`, size a page around it and encode the result as a PDF named after
/// the flight and seat of `record`.
///
/// Capturing is the only step that waits. Nothing is produced unless every step
/// succeeds.
pub async fn export_to_document<R: RenderRegion>(
    region: &R,
    record: &TicketRecord,
    options: &ExportOptions,
) -> Result<DocumentHandle, TicketError> {
    let scale = options.scale;
    let capture = region.capture(scale).await?;
    log::debug!(
        "captured {}x{} bitmap at {scale}x",
        capture.bitmap_width(),
        capture.bitmap_height()
    );

    let page = ExportPage::from_capture(&capture, options.unit, options.fit)?;
    let (width, height) = page.size_in_unit();
    log::debug!(
        "{:?} page of {width}x{height}{}, image {}x{}",
        page.orientation,
        page.unit,
        page.image_width,
        page.image_height
    );

    let mut document = Document::new(Page::new(page.width, page.height));
    document.set_info(Info::for_ticket(record));
    let image = document.add_image(Image::from_capture(capture, options.compression));
    let media_box = document.page.media_box;
    document.page.add_image(ImageLayout::top_left(
        image,
        &media_box,
        page.image_width,
        page.image_height,
    ));

    let name = record.export_file_name();
    let bytes = document.to_bytes();
    log::info!("exported {name} ({} bytes)", bytes.len());

    Ok(DocumentHandle { name, page, bytes })
}
