use std::io::Write;

use image::codecs::jpeg::JpegEncoder;
use image::ImageEncoder;

use crate::encoders::common::to_8bit_opaque;
use crate::{
    error::{ErrorKind, ResizeError},
    image::Image,
    rz_try,
};

/// Matches the default of most JPEG writers when no quality is requested.
pub const DEFAULT_QUALITY: u8 = 95;

pub fn encode<W: Write>(image: &Image, writer: &mut W) -> Result<(), ResizeError> {
    let mut encoder = JpegEncoder::new_with_quality(writer, DEFAULT_QUALITY);
    if let Some(icc) = image.icc.clone() {
        let _ = encoder.set_icc_profile(icc); // ignore UnsupportedError
    };
    // JPEG has no alpha channel and no 16-bit mode
    let pixels = to_8bit_opaque(&image.pixels);
    Ok(rz_try!(ErrorKind::Encode, pixels.write_with_encoder(encoder)))
}
