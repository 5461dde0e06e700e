//! Resizes an image file to a fixed size and writes it back over itself, in the same format.
//!
//! The library half exists so that the binary and the tests share one code path;
//! it is not meant as a general-purpose API.

#![forbid(unsafe_code)]

#[cfg(feature = "hardened_malloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

pub mod args;
pub mod decode;
pub mod encode;
mod encoders;
pub mod error;
pub mod help;
pub mod image;
pub mod plan;
pub mod resize;
mod utils;
