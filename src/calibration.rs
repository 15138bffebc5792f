use crate::error::{Jp4Error, Result};

use image::{imageops, GrayImage, ImageBuffer, Pixel, RgbImage};
use tracing::debug;

/// Fixed region of interest and orientation applied to every input frame.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Calibration {
    pub roi_x: u32,
    pub roi_y: u32,
    pub roi_width: u32,
    pub roi_height: u32,
    /// The camera is mounted upside down; rotate frames by 180 degrees.
    pub flip: bool,
}

impl Default for Calibration {
    fn default() -> Self {
        Calibration {
            roi_x: 1024 - 16 * 15,
            roi_y: 1024 * 3 - 16 * 8,
            roi_width: 128 * 4,
            roi_height: 128 * 4,
            flip: true,
        }
    }
}

impl Calibration {
    fn apply<P>(
        &self,
        image: &ImageBuffer<P, Vec<P::Subpixel>>,
    ) -> Result<ImageBuffer<P, Vec<P::Subpixel>>>
    where
        P: Pixel + 'static,
    {
        let (image_width, image_height) = image.dimensions();
        if self.roi_x as u64 + self.roi_width as u64 > image_width as u64
            || self.roi_y as u64 + self.roi_height as u64 > image_height as u64
        {
            return Err(Jp4Error::RoiOutOfBounds {
                roi_x: self.roi_x,
                roi_y: self.roi_y,
                roi_width: self.roi_width,
                roi_height: self.roi_height,
                image_width,
                image_height,
            });
        }

        debug!(
            "Cropping {}x{} at ({}, {}) from {}x{} frame",
            self.roi_width, self.roi_height, self.roi_x, self.roi_y, image_width, image_height
        );
        let cropped = imageops::crop_imm(
            image,
            self.roi_x,
            self.roi_y,
            self.roi_width,
            self.roi_height,
        )
        .to_image();

        if self.flip {
            Ok(imageops::rotate180(&cropped))
        } else {
            Ok(cropped)
        }
    }

    pub fn apply_gray(&self, image: &GrayImage) -> Result<GrayImage> {
        self.apply(image)
    }

    pub fn apply_rgb(&self, image: &RgbImage) -> Result<RgbImage> {
        self.apply(image)
    }
}
