use image::{DynamicImage, ImageFormat};

/// Decoded pixels plus everything needed to write them back in the same form.
#[derive(Debug, Clone)]
pub struct Image {
    /// The container format the file was decoded as, if it was recognized
    pub format: Option<ImageFormat>,
    pub exif: Option<Vec<u8>>,
    pub icc: Option<Vec<u8>>,
    pub pixels: DynamicImage,
}

impl Image {
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }
}
