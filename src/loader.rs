use crate::error::{Jp4Error, Result};

use image::{open, GrayImage, RgbImage};
use std::path::Path;
use tracing::info;

fn check_exists(file_path: &Path) -> Result<()> {
    if file_path.is_file() {
        Ok(())
    } else {
        Err(Jp4Error::FileNotFound(file_path.display().to_string()))
    }
}

/// Opens a JP4 frame as 8-bit grayscale. JP4 frames are JPEG wrapped, so any
/// format supported by the `image` crate is accepted.
pub fn open_raw<P: AsRef<Path>>(file_path: P) -> Result<GrayImage> {
    let file_path = file_path.as_ref();
    check_exists(file_path)?;

    let image_data = open(file_path)?.into_luma8();
    info!(
        "Loaded raw frame {} ({}x{})",
        file_path.display(),
        image_data.width(),
        image_data.height()
    );
    Ok(image_data)
}

/// Opens a reference image as 8-bit RGB.
pub fn open_reference<P: AsRef<Path>>(file_path: P) -> Result<RgbImage> {
    let file_path = file_path.as_ref();
    check_exists(file_path)?;

    let image_data = open(file_path)?.into_rgb8();
    info!(
        "Loaded reference {} ({}x{})",
        file_path.display(),
        image_data.width(),
        image_data.height()
    );
    Ok(image_data)
}
