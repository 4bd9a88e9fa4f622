use crate::capture::CaptureResult;
use crate::refs::{ObjectReferences, RefType};
use image::RgbaImage;
use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};
use pdf_writer::{Filter, Finish, Pdf};

/// How the pixel data of an embedded image is stored in the document
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum ImageCompression {
    /// Raw samples: larger files, but no decoding step can soften stripe edges
    #[default]
    None,
    /// Lossless zlib compression
    Flate,
}

/// A captured bitmap waiting to be embedded in a document
pub struct Image {
    pub pixels: RgbaImage,
    pub compression: ImageCompression,
}

struct EncodeOutput {
    filter: Option<Filter>,
    bytes: Vec<u8>,
    mask: Option<Vec<u8>>,
}

impl Image {
    pub fn new(pixels: RgbaImage, compression: ImageCompression) -> Image {
        Image {
            pixels,
            compression,
        }
    }

    /// Takes ownership of a capture's pixels
    pub fn from_capture(capture: CaptureResult, compression: ImageCompression) -> Image {
        Image::new(capture.pixels, compression)
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    fn encode(&self) -> EncodeOutput {
        let rgb: Vec<u8> = self
            .pixels
            .pixels()
            .flat_map(|p| [p.0[0], p.0[1], p.0[2]])
            .collect();

        // opaque captures don't need a soft mask at all
        let mask = self
            .pixels
            .pixels()
            .any(|p| p.0[3] < u8::MAX)
            .then(|| self.pixels.pixels().map(|p| p.0[3]).collect::<Vec<u8>>());

        match self.compression {
            ImageCompression::None => EncodeOutput {
                filter: None,
                bytes: rgb,
                mask,
            },
            ImageCompression::Flate => {
                let level = CompressionLevel::DefaultLevel as u8;
                EncodeOutput {
                    filter: Some(Filter::FlateDecode),
                    bytes: compress_to_vec_zlib(&rgb, level),
                    mask: mask.map(|alphas| compress_to_vec_zlib(&alphas, level)),
                }
            }
        }
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, image_index: usize, writer: &mut Pdf) {
        let id = refs.get_or_gen(RefType::Image(image_index));
        let encoded = self.encode();
        let width = self.width() as i32;
        let height = self.height() as i32;

        let mask_id = encoded
            .mask
            .as_ref()
            .map(|_| refs.gen(RefType::ImageMask(image_index)));

        let mut image = writer.image_xobject(id, encoded.bytes.as_slice());
        if let Some(filter) = encoded.filter {
            image.filter(filter);
        }
        image.width(width);
        image.height(height);
        image.color_space().device_rgb();
        image.bits_per_component(8);
        if let Some(mask_id) = mask_id {
            image.s_mask(mask_id);
        }
        image.finish();

        if let (Some(mask_id), Some(mask)) = (mask_id, encoded.mask.as_ref()) {
            let mut s_mask = writer.image_xobject(mask_id, mask.as_slice());
            if let Some(filter) = encoded.filter {
                s_mask.filter(filter);
            }
            s_mask.width(width);
            s_mask.height(height);
            s_mask.color_space().device_gray();
            s_mask.bits_per_component(8);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn raw_samples_are_rgb() {
        let image = Image::new(
            RgbaImage::from_pixel(2, 2, Rgba([10, 20, 30, 255])),
            ImageCompression::None,
        );
        let encoded = image.encode();
        assert!(encoded.filter.is_none());
        assert_eq!(encoded.bytes.len(), 2 * 2 * 3);
        assert_eq!(&encoded.bytes[..3], &[10, 20, 30]);
        assert!(encoded.mask.is_none());
    }

    #[test]
    fn transparency_adds_a_mask() {
        let mut pixels = RgbaImage::from_pixel(2, 1, Rgba([0, 0, 0, 255]));
        pixels.put_pixel(1, 0, Rgba([0, 0, 0, 0]));
        let encoded = Image::new(pixels, ImageCompression::None).encode();
        assert_eq!(encoded.mask, Some(vec![255, 0]));
    }

    #[test]
    fn flate_is_decodable() {
        let pixels = RgbaImage::from_pixel(8, 8, Rgba([1, 2, 3, 255]));
        let encoded = Image::new(pixels, ImageCompression::Flate).encode();
        assert_eq!(encoded.filter, Some(Filter::FlateDecode));
        let raw = miniz_oxide::inflate::decompress_to_vec_zlib(&encoded.bytes).unwrap();
        assert_eq!(raw.len(), 8 * 8 * 3);
    }
}
