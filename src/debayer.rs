use crate::{
    error::{Jp4Error, Result},
    plane::Plane,
};

use bayer::{BayerDepth, Demosaic, RasterDepth, RasterMut, CFA};
use image::{imageops, GrayImage, RgbImage};
use std::io::Cursor;
use tracing::debug;

/// Debayers a GRBG mosaic, as produced by [`crate::jp4::to_bayer`], using linear
/// interpolation
pub fn demosaic(bayer: &Plane) -> Result<RgbImage> {
    let (width, height) = bayer.dimensions();
    debug!("Demosaicing {}x{} GRBG mosaic", width, height);

    let mut output_buf = vec![0u8; width * height * 3];
    {
        let mut output_raster =
            RasterMut::new(width, height, RasterDepth::Depth8, &mut output_buf);

        bayer::run_demosaic(
            &mut Cursor::new(bayer.as_slice()),
            BayerDepth::Depth8,
            CFA::GRBG,
            Demosaic::Linear,
            &mut output_raster,
        )
        .map_err(|e| Jp4Error::Demosaic(format!("{:?}", e)))?;
    }

    RgbImage::from_raw(width as u32, height as u32, output_buf).ok_or(
        Jp4Error::BufferSizeMismatch {
            len: width * height * 3,
            width,
            height,
        },
    )
}

pub fn to_gray(image: &RgbImage) -> GrayImage {
    imageops::grayscale(image)
}
