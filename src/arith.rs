use crate::{
    error::{Jp4Error, Result},
    plane::Plane,
};

use image::{Rgb, RgbImage};
use imageproc::map::map_colors2;

/// Offset added to differences so that "no change" renders as mid-gray.
pub const DIFFERENCE_OFFSET: f32 = 128.0;

fn saturate_u8(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

#[inline]
fn weigh(a: u8, alpha: f32, b: u8, beta: f32, gamma: f32) -> u8 {
    saturate_u8(a as f32 * alpha + b as f32 * beta + gamma)
}

/// Per-sample `a * alpha + b * beta + gamma`, rounded and saturated to 0..=255.
pub fn add_weighted(a: &Plane, alpha: f32, b: &Plane, beta: f32, gamma: f32) -> Result<Plane> {
    if a.dimensions() != b.dimensions() {
        return Err(Jp4Error::SizeMismatch(a.width, a.height, b.width, b.height));
    }

    let v: Vec<u8> = a
        .buffer
        .iter()
        .zip(b.buffer.iter())
        .map(|(&pa, &pb)| weigh(pa, alpha, pb, beta, gamma))
        .collect();

    Plane::from_vec(v, a.width, a.height)
}

/// Color version of [`add_weighted`], applied to each channel independently.
pub fn add_weighted_rgb(
    a: &RgbImage,
    alpha: f32,
    b: &RgbImage,
    beta: f32,
    gamma: f32,
) -> Result<RgbImage> {
    if a.dimensions() != b.dimensions() {
        return Err(Jp4Error::SizeMismatch(
            a.width() as usize,
            a.height() as usize,
            b.width() as usize,
            b.height() as usize,
        ));
    }

    Ok(map_colors2(a, b, |pa: Rgb<u8>, pb: Rgb<u8>| {
        Rgb([
            weigh(pa[0], alpha, pb[0], beta, gamma),
            weigh(pa[1], alpha, pb[1], beta, gamma),
            weigh(pa[2], alpha, pb[2], beta, gamma),
        ])
    }))
}

/// `b - a`, offset to mid-gray.
pub fn centered_difference(a: &Plane, b: &Plane) -> Result<Plane> {
    add_weighted(a, -1.0, b, 1.0, DIFFERENCE_OFFSET)
}

pub fn centered_difference_rgb(a: &RgbImage, b: &RgbImage) -> Result<RgbImage> {
    add_weighted_rgb(a, -1.0, b, 1.0, DIFFERENCE_OFFSET)
}
