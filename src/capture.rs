//! Turning a rendered region into a bitmap.
//!
//! Stripes two pixels wide and 7–8px rotated text break up badly when rasterized at
//! the region's own resolution, so a region is always captured at a supersampling
//! scale factor. The result records the dimensions that were actually produced, which
//! can be off by a pixel from `size * scale` once rounded; everything downstream sizes
//! itself from those, never from the region's nominal size.

use crate::error::CaptureError;
use image::imageops::{self, FilterType};
use image::RgbaImage;
use std::future::Future;

/// How finely a region is sampled when captured
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Fidelity {
    /// 2x, enough for body text
    Standard,
    /// 3x
    High,
    /// 4x, for hairline bars and tiny rotated text
    #[default]
    Fine,
}

impl Fidelity {
    pub fn scale(self) -> f32 {
        match self {
            Fidelity::Standard => 2.0,
            Fidelity::High => 3.0,
            Fidelity::Fine => 4.0,
        }
    }
}

/// A bitmap snapshot of a region. Owned by the export that captured it and dropped once
/// the document is written.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptureResult {
    pub pixels: RgbaImage,
    /// The scale factor the region was captured at
    pub scale: f32,
}

impl CaptureResult {
    /// Wrap a bitmap, refusing bitmaps without area
    pub fn new(pixels: RgbaImage, scale: f32) -> Result<CaptureResult, CaptureError> {
        let (width, height) = pixels.dimensions();
        if width == 0 || height == 0 {
            return Err(CaptureError::EmptyRegion {
                width: width as f32,
                height: height as f32,
            });
        }
        Ok(CaptureResult { pixels, scale })
    }

    pub fn bitmap_width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn bitmap_height(&self) -> u32 {
        self.pixels.height()
    }

    /// Width over height of the bitmap as captured
    pub fn aspect_ratio(&self) -> f32 {
        self.bitmap_width() as f32 / self.bitmap_height() as f32
    }

    /// Whether any pixel is less than fully opaque
    pub fn has_transparency(&self) -> bool {
        self.pixels.pixels().any(|p| p.0[3] < u8::MAX)
    }
}

/// Something that can be captured as a bitmap.
///
/// Capturing is the one place the export pipeline waits: the region may still be
/// compositing when asked. Implementations must fail with [`CaptureError`] rather than
/// return a partial bitmap.
pub trait RenderRegion {
    /// Nominal size of the region in pixels
    fn size(&self) -> (f32, f32);

    /// Rasterize the region at `scale` times its nominal size
    fn capture(&self, scale: f32) -> impl Future<Output = Result<CaptureResult, CaptureError>>;
}

/// Checks the region has area and the scale is usable, returning the bitmap size to
/// allocate
pub(crate) fn capture_dimensions(
    size: (f32, f32),
    scale: f32,
) -> Result<(u32, u32), CaptureError> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(CaptureError::InvalidScale(scale));
    }
    let (width, height) = size;
    let px_width = (width * scale).round();
    let px_height = (height * scale).round();
    if !(px_width >= 1.0 && px_height >= 1.0) {
        return Err(CaptureError::EmptyRegion { width, height });
    }
    if px_width > u32::MAX as f32 || px_height > u32::MAX as f32 {
        return Err(CaptureError::Unreadable(format!(
            "{px_width}x{px_height} bitmap is too large"
        )));
    }
    Ok((px_width as u32, px_height as u32))
}

/// A region that has already been rendered to a bitmap, such as a screenshot of the
/// card taken by the host. Captures resample it to the requested scale.
#[derive(Debug, Clone)]
pub struct BitmapRegion {
    pub bitmap: RgbaImage,
}

impl BitmapRegion {
    pub fn new(bitmap: RgbaImage) -> BitmapRegion {
        BitmapRegion { bitmap }
    }
}

impl RenderRegion for BitmapRegion {
    fn size(&self) -> (f32, f32) {
        (self.bitmap.width() as f32, self.bitmap.height() as f32)
    }

    async fn capture(&self, scale: f32) -> Result<CaptureResult, CaptureError> {
        let (width, height) = capture_dimensions(self.size(), scale)?;
        let pixels = if (width, height) == self.bitmap.dimensions() {
            self.bitmap.clone()
        } else {
            // nearest keeps stripe edges hard
            imageops::resize(&self.bitmap, width, height, FilterType::Nearest)
        };
        CaptureResult::new(pixels, scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use image::Rgba;

    #[test]
    fn fidelity_scales() {
        assert_eq!(Fidelity::default().scale(), 4.0);
        assert_eq!(Fidelity::Standard.scale(), 2.0);
    }

    #[test]
    fn dimensions_are_rounded() {
        assert_eq!(capture_dimensions((600.0, 200.0), 4.0).unwrap(), (2400, 800));
        assert_eq!(capture_dimensions((100.3, 50.2), 3.0).unwrap(), (301, 151));
    }

    #[test]
    fn zero_width_region_cannot_be_captured() {
        let err = capture_dimensions((0.0, 200.0), 4.0).unwrap_err();
        assert!(matches!(err, CaptureError::EmptyRegion { .. }));
    }

    #[test]
    fn bad_scale_is_refused() {
        for scale in [0.0, -2.0, f32::NAN, f32::INFINITY] {
            let err = capture_dimensions((600.0, 200.0), scale).unwrap_err();
            assert!(matches!(err, CaptureError::InvalidScale(_)));
        }
    }

    #[test]
    fn bitmap_region_resamples_to_scale() {
        let region = BitmapRegion::new(RgbaImage::from_pixel(30, 10, Rgba([0, 0, 0, 255])));
        let capture = block_on(region.capture(2.0)).unwrap();
        assert_eq!((capture.bitmap_width(), capture.bitmap_height()), (60, 20));
        assert_eq!(capture.aspect_ratio(), 3.0);
        assert!(!capture.has_transparency());
    }

    #[test]
    fn empty_bitmap_is_an_empty_region() {
        let region = BitmapRegion::new(RgbaImage::new(0, 10));
        let err = block_on(region.capture(1.0)).unwrap_err();
        assert!(matches!(err, CaptureError::EmptyRegion { .. }));
    }
}
