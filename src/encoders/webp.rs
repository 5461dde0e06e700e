use std::io::Write;

use webp::{Encoder, WebPMemory};

use crate::encoders::common::to_8bit_rgb_maybe_a;
use crate::{
    error::{ErrorKind, ResizeError},
    image::Image,
    rz_err, rz_try,
};

/// Only affects how hard the lossless encoder tries, never the pixels.
const LOSSLESS_EFFORT: f32 = 75.0;

pub fn encode<W: Write>(image: &Image, writer: &mut W) -> Result<(), ResizeError> {
    // libwebp only accepts 8-bit RGB and RGBA
    let pixels = to_8bit_rgb_maybe_a(&image.pixels);
    let encoder: Encoder = Encoder::from_image(&pixels)
        .map_err(|e| rz_err!(ErrorKind::Encode, "WebP encoding failed: {e}"))?;

    // Rewriting a file should not degrade it further, so always write lossless
    let webp: WebPMemory = encoder
        .encode_simple(true, LOSSLESS_EFFORT)
        .map_err(|e| rz_err!(ErrorKind::Encode, "WebP encoding failed: {e:?}"))?;
    // TODO: `webp` crate doesn't support setting the ICC profile:
    // https://github.com/jaredforth/webp/issues/41
    Ok(rz_try!(ErrorKind::Encode, writer.write_all(&webp)))
}
