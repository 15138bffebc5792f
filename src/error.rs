use thiserror::Error;

#[derive(Error, Debug)]
pub enum Jp4Error {
    #[error("Image dimensions must be non-zero multiples of 16: width={width}, height={height}")]
    MisalignedDimensions { width: usize, height: usize },

    #[error("Buffer length {len} does not match dimensions {width}x{height}")]
    BufferSizeMismatch {
        len: usize,
        width: usize,
        height: usize,
    },

    #[error("Array size mismatch: {0}x{1} vs {2}x{3}")]
    SizeMismatch(usize, usize, usize, usize),

    #[error(
        "Region of interest {roi_width}x{roi_height} at ({roi_x}, {roi_y}) \
         exceeds {image_width}x{image_height} image"
    )]
    RoiOutOfBounds {
        roi_x: u32,
        roi_y: u32,
        roi_width: u32,
        roi_height: u32,
        image_width: u32,
        image_height: u32,
    },

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Demosaic failed: {0}")]
    Demosaic(String),

    #[error("Display error: {0}")]
    Display(String),
}

pub type Result<T> = std::result::Result<T, Jp4Error>;
