#![doc = include_str!("../README.md")]
#![deny(missing_docs)]

use image::imageops::{self, FilterType};
use image::RgbImage;

pub mod args;
pub mod error;
pub mod render;

pub use args::{Args, DEFAULT_ORDER, HELP_TEXT};
pub use error::{Error, Result};
pub use render::{par_render, render, residue, shade};

/// Scales a rendered ring down to `size`×`size`.
///
/// Uses a smooth triangle filter and returns the image unchanged when it
/// already has the requested size.
pub fn scale(img: RgbImage, size: u32) -> RgbImage {
    if img.dimensions() == (size, size) {
        img
    } else {
        imageops::resize(&img, size, size, FilterType::Triangle)
    }
}

/// File name of the output image for a ring of order `order` scaled to `size`.
pub fn output_file_name(order: u32, size: u32) -> String {
    format!("Z-{}Z.{}x{}.png", order, size, size)
}
