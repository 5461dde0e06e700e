use std::path::Path;

use image::{DynamicImage, ImageDecoder, ImageReader};
use log::debug;

use crate::{
    error::{ErrorKind, ResizeError},
    image::Image,
    rz_err, rz_try,
};

/// Reads the whole file and decodes it, keeping the ICC profile and Exif block if present.
///
/// The format is guessed from the file contents first and from the extension second.
pub fn decode(path: &Path) -> Result<Image, ResizeError> {
    let reader = ImageReader::open(path).map_err(|error| {
        rz_err!(
            ErrorKind::Decode,
            "unable to open image `{}': {error}",
            path.display()
        )
    })?;
    let reader = rz_try!(ErrorKind::Decode, reader.with_guessed_format());
    let format = reader.format();

    let mut decoder = reader.into_decoder().map_err(|error| {
        rz_err!(
            ErrorKind::Decode,
            "no decode delegate for `{}': {error}",
            path.display()
        )
    })?;
    // a broken metadata chunk is not worth refusing the whole image over
    let icc = decoder.icc_profile().unwrap_or(None);
    let exif = decoder.exif_metadata().unwrap_or(None);
    let pixels = rz_try!(ErrorKind::Decode, DynamicImage::from_decoder(decoder));

    debug!(
        "decoded `{}': {:?} {}x{} {:?}",
        path.display(),
        format,
        pixels.width(),
        pixels.height(),
        pixels.color()
    );

    Ok(Image {
        format,
        exif,
        icc,
        pixels,
    })
}
