//! Format-specific encoders. Formats without one here go through `image`'s generic encoder.

pub mod common;
#[cfg(feature = "jpeg")]
pub mod jpeg;
#[cfg(feature = "png")]
pub mod png;
#[cfg(feature = "webp")]
pub mod webp;
