//! Helpers shared between all encoders

use std::borrow::Cow;

use image::{DynamicImage, ImageEncoder};

use crate::image::Image;

pub fn write_icc_and_exif(encoder: &mut impl ImageEncoder, image: &Image) {
    if let Some(icc) = image.icc.clone() {
        let _ = encoder.set_icc_profile(icc); // ignore UnsupportedError
    };
    if let Some(exif) = image.exif.clone() {
        let _ = encoder.set_exif_metadata(exif); // ignore UnsupportedError
    };
}

/// Converts the input image to Rgba8 or Rgb8, depending on whether the pixel format has an alpha channel.
pub fn to_8bit_rgb_maybe_a(pixels: &DynamicImage) -> Cow<'_, DynamicImage> {
    use image::DynamicImage::*;
    match pixels {
        ImageRgb8(_) | ImageRgba8(_) => Cow::Borrowed(pixels),
        _ if pixels.color().has_alpha() => Cow::Owned(ImageRgba8(pixels.to_rgba8())),
        _ => Cow::Owned(ImageRgb8(pixels.to_rgb8())),
    }
}

/// Converts the input image to L8 or Rgb8, dropping alpha, for formats that only store opaque 8-bit data.
pub fn to_8bit_opaque(pixels: &DynamicImage) -> Cow<'_, DynamicImage> {
    use image::DynamicImage::*;
    match pixels {
        ImageLuma8(_) | ImageRgb8(_) => Cow::Borrowed(pixels),
        _ if pixels.color().has_color() => Cow::Owned(ImageRgb8(pixels.to_rgb8())),
        _ => Cow::Owned(ImageLuma8(pixels.to_luma8())),
    }
}

/// Floating-point pixels are converted to 16 bits; everything else is returned as is.
pub fn to_integer_precision(pixels: &DynamicImage) -> Cow<'_, DynamicImage> {
    use image::DynamicImage::*;
    match pixels {
        ImageRgb32F(_) => Cow::Owned(ImageRgb16(pixels.to_rgb16())),
        ImageRgba32F(_) => Cow::Owned(ImageRgba16(pixels.to_rgba16())),
        _ => Cow::Borrowed(pixels),
    }
}
