use std::io::Write;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};

use crate::encoders::common::{to_integer_precision, write_icc_and_exif};
use crate::{
    error::{ErrorKind, ResizeError},
    image::Image,
    rz_try,
};

pub fn encode<W: Write>(image: &Image, writer: &mut W) -> Result<(), ResizeError> {
    let mut encoder =
        PngEncoder::new_with_quality(writer, CompressionType::Default, FilterType::Adaptive);
    write_icc_and_exif(&mut encoder, image);
    // PNG has no floating-point samples
    let pixels = to_integer_precision(&image.pixels);
    Ok(rz_try!(ErrorKind::Encode, pixels.write_with_encoder(encoder)))
}
