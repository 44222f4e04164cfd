//! Frame loading, saving and raw-buffer conversions via the `image` crate.

use anyhow::Context;
use image::{GrayImage, Rgb, RgbImage};
use std::path::Path;

use crate::Result;
use crate::error::FrameError;

/// Frame I/O helpers.
pub struct FrameIo;

impl FrameIo {
    /// Load an image and convert it to 8-bit grayscale.
    pub fn load_gray<P: AsRef<Path>>(path: P) -> Result<GrayImage> {
        let img = image::open(&path)
            .with_context(|| format!("Failed to open image: {:?}", path.as_ref()))?;
        Ok(img.to_luma8())
    }

    /// Load an image as 8-bit RGB.
    pub fn load_rgb<P: AsRef<Path>>(path: P) -> Result<RgbImage> {
        let img = image::open(&path)
            .with_context(|| format!("Failed to open image: {:?}", path.as_ref()))?;
        Ok(img.to_rgb8())
    }

    /// Save a grayscale frame.
    pub fn save_gray<P: AsRef<Path>>(frame: &GrayImage, path: P) -> Result<()> {
        frame
            .save(&path)
            .with_context(|| format!("Failed to save image: {:?}", path.as_ref()))
    }

    /// Save an RGB frame.
    pub fn save_rgb<P: AsRef<Path>>(frame: &RgbImage, path: P) -> Result<()> {
        frame
            .save(&path)
            .with_context(|| format!("Failed to save image: {:?}", path.as_ref()))
    }

    /// Wrap a raw row-major buffer as a grayscale frame, validating its
    /// length against the declared dimensions.
    pub fn gray_from_raw(
        width: u32,
        height: u32,
        data: Vec<u8>,
    ) -> std::result::Result<GrayImage, FrameError> {
        let needed = width as usize * height as usize;
        if data.len() != needed {
            return Err(FrameError::BufferSize {
                width,
                height,
                actual: data.len(),
                needed,
            });
        }
        Ok(GrayImage::from_raw(width, height, data).expect("length validated above"))
    }

    /// Promote a grayscale frame to RGB for overlay drawing.
    pub fn gray_to_rgb(frame: &GrayImage) -> RgbImage {
        let mut rgb = RgbImage::new(frame.width(), frame.height());
        for (x, y, pixel) in frame.enumerate_pixels() {
            let v = pixel[0];
            rgb.put_pixel(x, y, Rgb([v, v, v]));
        }
        rgb
    }
}
