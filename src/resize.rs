//! Resampling to an exact size, ignoring the aspect ratio.

use image::{DynamicImage, ImageBuffer, Pixel};
use log::debug;
use pic_scale_safe::{ImageSize, ResamplingFunction};

use crate::{
    error::{ErrorKind, ResizeError},
    image::Image,
    rz_err, rz_try,
};

/// The filter used for every resize. Bilinear is what most image libraries default to.
pub const RESAMPLING: ResamplingFunction = ResamplingFunction::Bilinear;

/// `DynamicImage` always stores full-range 16-bit samples
const BIT_DEPTH_16: u32 = 16;

/// Stretches or squashes the image to exactly `dst_width` x `dst_height`.
/// The pixel format is preserved. If the image already has the requested size it is left untouched.
pub fn resize(image: &mut Image, dst_width: u32, dst_height: u32) -> Result<(), ResizeError> {
    if dst_width == 0 || dst_height == 0 {
        return Err(rz_err!(
            ErrorKind::Resize,
            "negative or zero image size `{dst_width}x{dst_height}'"
        ));
    }
    if image.width() == dst_width && image.height() == dst_height {
        debug!("already {dst_width}x{dst_height}, not resampling");
        return Ok(());
    }
    debug!(
        "resizing {}x{} to {dst_width}x{dst_height} (bilinear)",
        image.width(),
        image.height()
    );
    image.pixels = resize_impl(&image.pixels, dst_width, dst_height)?;
    Ok(())
}

/// Layouts with alpha are resampled premultiplied, so fully transparent pixels don't bleed their color.
fn resize_impl(
    pixels: &DynamicImage,
    dst_width: u32,
    dst_height: u32,
) -> Result<DynamicImage, ResizeError> {
    use pic_scale_safe::{
        premultiplied_la16, premultiplied_la8, premultiplied_rgba16, premultiplied_rgba8,
        premultiplied_rgba_f32, resize_plane16, resize_plane16_with_alpha, resize_plane8,
        resize_plane8_with_alpha, resize_rgb16, resize_rgb8, resize_rgb_f32, resize_rgba16,
        resize_rgba8, resize_rgba_f32, unpremultiply_la16, unpremultiply_la8,
        unpremultiply_rgba16, unpremultiply_rgba8, unpremultiply_rgba_f32,
    };

    let src = ImageSize::new(pixels.width() as usize, pixels.height() as usize);
    let dst = ImageSize::new(dst_width as usize, dst_height as usize);
    let (w, h) = (dst_width, dst_height);

    let resized = match pixels {
        DynamicImage::ImageLuma8(buffer) => {
            let data = rz_try!(ErrorKind::Resize, resize_plane8(buffer, src, dst, RESAMPLING));
            DynamicImage::ImageLuma8(rebuild(w, h, data)?)
        }
        DynamicImage::ImageLumaA8(buffer) => {
            let premultiplied = premultiplied_la8(buffer);
            let mut data = rz_try!(
                ErrorKind::Resize,
                resize_plane8_with_alpha(&premultiplied, src, dst, RESAMPLING)
            );
            unpremultiply_la8(&mut data);
            DynamicImage::ImageLumaA8(rebuild(w, h, data)?)
        }
        DynamicImage::ImageRgb8(buffer) => {
            let data = rz_try!(ErrorKind::Resize, resize_rgb8(buffer, src, dst, RESAMPLING));
            DynamicImage::ImageRgb8(rebuild(w, h, data)?)
        }
        DynamicImage::ImageRgba8(buffer) => {
            let premultiplied = premultiplied_rgba8(buffer);
            let mut data = rz_try!(
                ErrorKind::Resize,
                resize_rgba8(&premultiplied, src, dst, RESAMPLING)
            );
            unpremultiply_rgba8(&mut data);
            DynamicImage::ImageRgba8(rebuild(w, h, data)?)
        }
        DynamicImage::ImageLuma16(buffer) => {
            let data = rz_try!(
                ErrorKind::Resize,
                resize_plane16(buffer, src, dst, BIT_DEPTH_16, RESAMPLING)
            );
            DynamicImage::ImageLuma16(rebuild(w, h, data)?)
        }
        DynamicImage::ImageLumaA16(buffer) => {
            let premultiplied = premultiplied_la16(buffer, BIT_DEPTH_16);
            let mut data = rz_try!(
                ErrorKind::Resize,
                resize_plane16_with_alpha(&premultiplied, src, dst, BIT_DEPTH_16, RESAMPLING)
            );
            unpremultiply_la16(&mut data, BIT_DEPTH_16);
            DynamicImage::ImageLumaA16(rebuild(w, h, data)?)
        }
        DynamicImage::ImageRgb16(buffer) => {
            let data = rz_try!(
                ErrorKind::Resize,
                resize_rgb16(buffer, src, dst, BIT_DEPTH_16, RESAMPLING)
            );
            DynamicImage::ImageRgb16(rebuild(w, h, data)?)
        }
        DynamicImage::ImageRgba16(buffer) => {
            let premultiplied = premultiplied_rgba16(buffer, BIT_DEPTH_16);
            let mut data = rz_try!(
                ErrorKind::Resize,
                resize_rgba16(&premultiplied, src, dst, BIT_DEPTH_16, RESAMPLING)
            );
            unpremultiply_rgba16(&mut data, BIT_DEPTH_16);
            DynamicImage::ImageRgba16(rebuild(w, h, data)?)
        }
        DynamicImage::ImageRgb32F(buffer) => {
            let data = rz_try!(ErrorKind::Resize, resize_rgb_f32(buffer, src, dst, RESAMPLING));
            DynamicImage::ImageRgb32F(rebuild(w, h, data)?)
        }
        DynamicImage::ImageRgba32F(buffer) => {
            let premultiplied = premultiplied_rgba_f32(buffer);
            let mut data = rz_try!(
                ErrorKind::Resize,
                resize_rgba_f32(&premultiplied, src, dst, RESAMPLING)
            );
            unpremultiply_rgba_f32(&mut data);
            DynamicImage::ImageRgba32F(rebuild(w, h, data)?)
        }
        other => {
            return Err(rz_err!(
                ErrorKind::Resize,
                "unsupported pixel format {:?}",
                other.color()
            ))
        }
    };
    Ok(resized)
}

fn rebuild<P: Pixel>(
    width: u32,
    height: u32,
    data: Vec<P::Subpixel>,
) -> Result<ImageBuffer<P, Vec<P::Subpixel>>, ResizeError> {
    ImageBuffer::from_raw(width, height, data)
        .ok_or_else(|| rz_err!(ErrorKind::Resize, "resampler returned a buffer of the wrong size"))
}
