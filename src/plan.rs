use std::path::PathBuf;

use log::{debug, info};

use crate::{decode::decode, encode::encode, error::ResizeError, resize::resize};

/// The file that gets resized when no path is given on the command line
pub const DEFAULT_PATH: &str = "faceDetect.png";
pub const TARGET_WIDTH: u32 = 750;
pub const TARGET_HEIGHT: u32 = 421;

/// Everything a single run needs: which file to rewrite and what size to rewrite it to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeJob {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

impl Default for ResizeJob {
    fn default() -> Self {
        Self::for_path(DEFAULT_PATH)
    }
}

impl ResizeJob {
    pub fn for_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            width: TARGET_WIDTH,
            height: TARGET_HEIGHT,
        }
    }

    /// Decodes the file, resizes it and writes it back over itself.
    ///
    /// Any failure aborts the run. Nothing is written unless decoding and resizing succeeded.
    pub fn execute(&self) -> Result<(), ResizeError> {
        let mut image = decode(&self.path)?;
        let (original_width, original_height) = (image.width(), image.height());

        resize(&mut image, self.width, self.height)?;

        debug!("writing {:?} back to `{}'", image.format, self.path.display());
        encode(&image, &self.path)?;

        info!(
            "resized `{}' from {original_width}x{original_height} to {}x{}",
            self.path.display(),
            self.width,
            self.height
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;
    use std::path::Path;

    use image::{DynamicImage, GenericImageView, ImageFormat, ImageReader, RgbImage};

    use crate::error::ErrorKind;

    fn reread(path: &Path) -> (ImageFormat, DynamicImage) {
        let reader = ImageReader::open(path)
            .unwrap()
            .with_guessed_format()
            .unwrap();
        let format = reader.format().unwrap();
        (format, reader.decode().unwrap())
    }

    #[test]
    fn default_job_targets_the_fixed_file() {
        let job = ResizeJob::default();
        assert_eq!(job.path, Path::new("faceDetect.png"));
        assert_eq!((job.width, job.height), (750, 421));
    }

    #[test]
    fn full_hd_png_is_squashed_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("faceDetect.png");
        RgbImage::new(1920, 1080).save(&path).unwrap();

        ResizeJob::for_path(&path).execute().unwrap();

        let (format, pixels) = reread(&path);
        assert_eq!(format, ImageFormat::Png);
        assert_eq!(pixels.dimensions(), (750, 421));
    }

    #[test]
    fn second_run_changes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("twice.png");
        let source = RgbImage::from_fn(64, 48, |x, y| image::Rgb([x as u8 * 4, y as u8 * 5, 128]));
        source.save(&path).unwrap();

        let job = ResizeJob::for_path(&path);
        job.execute().unwrap();
        let (_, first) = reread(&path);
        job.execute().unwrap();
        let (_, second) = reread(&path);

        assert_eq!(second.dimensions(), (750, 421));
        assert_eq!(first.to_rgb8(), second.to_rgb8());
    }

    #[test]
    fn missing_input_creates_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("faceDetect.png");

        let err = ResizeJob::for_path(&path).execute().unwrap_err();

        assert_eq!(err.kind, ErrorKind::Decode);
        assert!(!path.exists());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn undecodable_input_is_left_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("faceDetect.png");
        fs::write(&path, b"not really a png").unwrap();

        let err = ResizeJob::for_path(&path).execute().unwrap_err();

        assert_eq!(err.kind, ErrorKind::Decode);
        assert_eq!(fs::read(&path).unwrap(), b"not really a png");
    }

    #[cfg(feature = "jpeg")]
    #[test]
    fn jpeg_stays_jpeg() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.jpg");
        RgbImage::from_pixel(160, 90, image::Rgb([30, 60, 90]))
            .save(&path)
            .unwrap();

        ResizeJob::for_path(&path).execute().unwrap();

        let (format, pixels) = reread(&path);
        assert_eq!(format, ImageFormat::Jpeg);
        assert_eq!(pixels.dimensions(), (750, 421));
    }

    #[test]
    fn mislabeled_file_keeps_its_real_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("actually-a-png.jpg");
        RgbImage::new(20, 10)
            .save_with_format(&path, ImageFormat::Png)
            .unwrap();

        ResizeJob::for_path(&path).execute().unwrap();

        let (format, pixels) = reread(&path);
        assert_eq!(format, ImageFormat::Png);
        assert_eq!(pixels.dimensions(), (750, 421));
    }

    #[test]
    fn grayscale_with_alpha_stays_grayscale_with_alpha() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gray.png");
        DynamicImage::new_luma_a8(30, 30).save(&path).unwrap();

        ResizeJob::for_path(&path).execute().unwrap();

        let (_, pixels) = reread(&path);
        assert_eq!(pixels.color(), image::ColorType::La8);
        assert_eq!(pixels.dimensions(), (750, 421));
    }
}
