//! Picture normalization: decode, honor EXIF orientation, bound the longer
//! side, re-encode as JPEG.

use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, ImageDecoder as _, ImageFormat, ImageReader, ImageResult, Rgb, RgbImage};
use std::io::Cursor;

/// Quality of every stored JPEG
pub const JPEG_QUALITY: u8 = 75;

/// Side length of the grey placeholder written for new items
pub const PLACEHOLDER_SIDE: u32 = 256;

/// The two pictures every item carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PictureSlot {
    /// The item itself.
    Item,
    /// Where the item is kept.
    Location,
}

impl PictureSlot {
    pub const ALL: [PictureSlot; 2] = [PictureSlot::Item, PictureSlot::Location];

    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            PictureSlot::Item => "picture.jpg",
            PictureSlot::Location => "location.jpg",
        }
    }

    /// Bound on the longer side of the stored picture, in pixels.
    #[must_use]
    pub const fn max_side(self) -> u32 {
        match self {
            PictureSlot::Item => 1000,
            PictureSlot::Location => 1500,
        }
    }
}

/// Decode an upload of any supported format, rotated or flipped upright
/// according to its EXIF orientation tag.
pub fn decode_oriented(data: &[u8]) -> ImageResult<DynamicImage> {
    let mut decoder = ImageReader::new(Cursor::new(data))
        .with_guessed_format()?
        .into_decoder()?;
    let orientation = decoder.orientation()?;
    let mut image = DynamicImage::from_decoder(decoder)?;
    image.apply_orientation(orientation);
    Ok(image)
}

/// Scale down so neither side exceeds `max_side`, keeping the aspect ratio.
/// Smaller images are returned untouched.
#[must_use]
pub fn fit_within(image: DynamicImage, max_side: u32) -> DynamicImage {
    if image.width() <= max_side && image.height() <= max_side {
        image
    } else {
        image.resize(max_side, max_side, FilterType::Lanczos3)
    }
}

pub fn encode_jpeg(image: &DynamicImage) -> ImageResult<Vec<u8>> {
    let rgb = image.to_rgb8();
    let mut buffer = Vec::new();
    JpegEncoder::new_with_quality(&mut buffer, JPEG_QUALITY).encode_image(&rgb)?;
    Ok(buffer)
}

/// Full upload pipeline for one picture slot.
pub fn normalize_picture(data: &[u8], max_side: u32) -> ImageResult<Vec<u8>> {
    let image = decode_oriented(data)?;
    encode_jpeg(&fit_within(image, max_side))
}

/// Decode a stored picture.
pub fn decode_jpeg(data: &[u8]) -> ImageResult<DynamicImage> {
    image::load_from_memory_with_format(data, ImageFormat::Jpeg)
}

pub fn placeholder_jpeg() -> ImageResult<Vec<u8>> {
    let canvas = RgbImage::from_pixel(PLACEHOLDER_SIDE, PLACEHOLDER_SIDE, Rgb([0xdd, 0xdd, 0xdd]));
    encode_jpeg(&DynamicImage::ImageRgb8(canvas))
}

#[cfg(test)]
#[path = "images_tests.rs"]
mod images_tests;
