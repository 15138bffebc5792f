use crate::error::{Jp4Error, Result};

use image::GrayImage;

// A simple 8-bit single channel raster. Samples are stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plane {
    pub buffer: Vec<u8>,
    pub width: usize,
    pub height: usize,
}

impl Plane {
    // Creates a new zero-filled plane of the requested width and height
    pub fn new(width: usize, height: usize) -> Plane {
        Plane {
            buffer: vec![0; width * height],
            width,
            height,
        }
    }

    pub fn from_vec(v: Vec<u8>, width: usize, height: usize) -> Result<Plane> {
        if v.len() != width * height {
            return Err(Jp4Error::BufferSizeMismatch {
                len: v.len(),
                width,
                height,
            });
        }

        Ok(Plane {
            buffer: v,
            width,
            height,
        })
    }

    pub fn from_gray_image(image_data: &GrayImage) -> Plane {
        let (width, height) = image_data.dimensions();
        Plane {
            buffer: image_data.as_raw().clone(),
            width: width as usize,
            height: height as usize,
        }
    }

    pub fn to_gray_image(&self) -> Result<GrayImage> {
        GrayImage::from_raw(self.width as u32, self.height as u32, self.buffer.clone()).ok_or(
            Jp4Error::BufferSizeMismatch {
                len: self.buffer.len(),
                width: self.width,
                height: self.height,
            },
        )
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.buffer
    }

    pub fn get(&self, x: usize, y: usize) -> u8 {
        if x < self.width && y < self.height {
            self.buffer[y * self.width + x]
        } else {
            panic!("Invalid pixel coordinates: ({}, {})", x, y);
        }
    }

    pub fn put(&mut self, x: usize, y: usize, val: u8) {
        if x < self.width && y < self.height {
            self.buffer[y * self.width + x] = val;
        } else {
            panic!("Invalid pixel coordinates: ({}, {})", x, y);
        }
    }

    // Integer shift. Vacated pixels are left at zero, pixels pushed off the edge are dropped.
    pub fn shift(&self, horiz: i32, vert: i32) -> Plane {
        let mut shifted = Plane::new(self.width, self.height);

        let h = self.height as i32;
        let w = self.width as i32;

        for y in 0..h {
            for x in 0..w {
                let shift_x = x + horiz;
                let shift_y = y + vert;

                if shift_x >= 0 && shift_y >= 0 && shift_x < w && shift_y < h {
                    shifted.put(
                        shift_x as usize,
                        shift_y as usize,
                        self.get(x as usize, y as usize),
                    );
                }
            }
        }
        shifted
    }
}
