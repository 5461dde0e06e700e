use std::{
    ffi::OsStr,
    fs::{self, File},
    io::{BufWriter, Cursor, Seek, Write},
    path::Path,
};

use image::ImageFormat;
use log::debug;
use tempfile::NamedTempFile;

use crate::{
    encoders,
    error::{ErrorKind, ResizeError},
    image::Image,
    rz_err, rz_try,
};

/// Encodes the image in the format it was decoded from and replaces the file at `path` with it.
///
/// Symlinks are followed, so the file they point to is the one that gets replaced.
/// The new contents are written to a temporary file next to the target and renamed over it,
/// so a failure at any point leaves the original file untouched.
/// If no temporary file can be created there (e.g. a read-only directory holding a writable file),
/// the image is encoded in memory first and then written over the target in place.
pub fn encode(image: &Image, path: &Path) -> Result<(), ResizeError> {
    let format = choose_encoding_format(image, path)?;
    // a path that doesn't exist yet is written as is
    let target = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());

    let original_permissions = match fs::metadata(&target) {
        Ok(metadata) => {
            if metadata.permissions().readonly() {
                return Err(rz_err!(
                    ErrorKind::Encode,
                    "unable to open image `{}': file is read-only",
                    path.display()
                ));
            }
            Some(metadata.permissions())
        }
        Err(_) => None,
    };

    // `parent()` of a bare file name is an empty path, which means the current directory
    let directory = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let temp_file = match NamedTempFile::new_in(directory) {
        Ok(temp_file) => temp_file,
        Err(error) => {
            debug!(
                "no temporary file in `{}' ({error}), overwriting in place",
                directory.display()
            );
            return overwrite_in_place(image, &target, format);
        }
    };
    if let Some(permissions) = original_permissions {
        // temporary files are created owner-only, the replacement should keep the original mode
        rz_try!(
            ErrorKind::Encode,
            temp_file.as_file().set_permissions(permissions)
        );
    }

    // Wrap in BufWriter for performance
    let mut writer = BufWriter::new(temp_file);
    encode_with_format(image, &mut writer, format)?;
    // Flush explicitly: dropping the BufWriter would flush too, but would swallow errors.
    rz_try!(ErrorKind::Encode, writer.flush());
    let temp_file = rz_try!(ErrorKind::Encode, writer.into_inner());

    debug!(
        "replacing `{}' with {}",
        target.display(),
        temp_file.path().display()
    );
    temp_file.persist(&target).map_err(|error| {
        rz_err!(
            ErrorKind::Encode,
            "unable to replace `{}': {}",
            target.display(),
            error.error
        )
    })?;
    Ok(())
}

/// Encodes fully into memory before touching the file, so an encoding failure still leaves it intact.
fn overwrite_in_place(image: &Image, target: &Path, format: ImageFormat) -> Result<(), ResizeError> {
    let mut encoded = Cursor::new(Vec::new());
    encode_with_format(image, &mut encoded, format)?;

    // `File::create` truncates the existing file, keeping its inode, mode and any links to it.
    let mut file = File::create(target).map_err(|error| {
        rz_err!(
            ErrorKind::Encode,
            "unable to open image `{}': {error}",
            target.display()
        )
    })?;
    rz_try!(ErrorKind::Encode, file.write_all(encoded.get_ref()));
    rz_try!(ErrorKind::Encode, file.flush());
    Ok(())
}

fn encode_with_format<W: Write + Seek>(
    image: &Image,
    writer: &mut W,
    format: ImageFormat,
) -> Result<(), ResizeError> {
    debug!("encoding {:?} as {format:?}", image.pixels.color());
    match format {
        #[cfg(feature = "png")]
        ImageFormat::Png => encoders::png::encode(image, writer)?,
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => encoders::jpeg::encode(image, writer)?,
        #[cfg(feature = "webp")]
        ImageFormat::WebP => encoders::webp::encode(image, writer)?,
        _ => rz_try!(ErrorKind::Encode, image.pixels.write_to(writer, format)),
    }
    Ok(())
}

/// The format the file was read as wins, so a PNG named `photo.jpg` stays a PNG.
/// If decoding could not tell, the extension decides.
pub(crate) fn choose_encoding_format(image: &Image, path: &Path) -> Result<ImageFormat, ResizeError> {
    if let Some(format) = image.format {
        return Ok(format);
    }
    if let Ok(format) = ImageFormat::from_path(path) {
        return Ok(format);
    }
    // no extension at all is reported as an empty format name
    let extension = path.extension().unwrap_or(OsStr::new(""));
    Err(rz_err!(
        ErrorKind::Encode,
        "no encode delegate for this image format `{}'",
        extension.to_ascii_uppercase().to_string_lossy()
    ))
}
