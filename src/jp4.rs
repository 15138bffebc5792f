//! Remapping of JP4 macroblock-coded frames.
//!
//! A JP4 frame carries its Bayer data in 16x16 macroblocks, each holding the
//! four color components as 8x8 patches (see [`Component::patch_offset`]).
//! This module splits such a frame into four half-resolution component
//! planes, or scatters it back into a standard GRBG Bayer mosaic that a
//! regular demosaic routine can consume.

use crate::{
    enums::{Component, MACROBLOCK_SIZE, PATCH_SIZE},
    error::{Jp4Error, Result},
    plane::Plane,
};

use itertools::iproduct;
use tracing::debug;

/// The four half-resolution component planes of a JP4 frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Components {
    pub g1: Plane,
    pub g2: Plane,
    pub r: Plane,
    pub b: Plane,
}

impl Components {
    fn new(width: usize, height: usize) -> Components {
        Components {
            g1: Plane::new(width, height),
            g2: Plane::new(width, height),
            r: Plane::new(width, height),
            b: Plane::new(width, height),
        }
    }

    pub fn dimensions(&self) -> (usize, usize) {
        self.g1.dimensions()
    }

    pub fn get(&self, component: Component) -> &Plane {
        match component {
            Component::Gr => &self.g1,
            Component::R => &self.r,
            Component::Gb => &self.g2,
            Component::B => &self.b,
        }
    }

    fn get_mut(&mut self, component: Component) -> &mut Plane {
        match component {
            Component::Gr => &mut self.g1,
            Component::R => &mut self.r,
            Component::Gb => &mut self.g2,
            Component::B => &mut self.b,
        }
    }
}

fn check_alignment(width: usize, height: usize) -> Result<()> {
    if width == 0 || height == 0 || width % MACROBLOCK_SIZE != 0 || height % MACROBLOCK_SIZE != 0
    {
        Err(Jp4Error::MisalignedDimensions { width, height })
    } else {
        Ok(())
    }
}

// Returns the existing plane if it already has the requested dimensions, otherwise
// replaces it with a freshly allocated one.
fn ensure_plane(slot: &mut Option<Plane>, width: usize, height: usize) -> &mut Plane {
    let reusable = matches!(slot, Some(p) if p.dimensions() == (width, height));
    if !reusable {
        debug!("Allocating {}x{} plane", width, height);
        *slot = Some(Plane::new(width, height));
    }
    slot.get_or_insert_with(|| Plane::new(width, height))
}

// Same as ensure_plane, for the four component planes, which are always
// (re)allocated together.
fn ensure_components(
    slot: &mut Option<Components>,
    width: usize,
    height: usize,
) -> &mut Components {
    let reusable = matches!(slot, Some(c) if c.dimensions() == (width, height));
    if !reusable {
        debug!("Allocating component planes of {}x{}", width, height);
        *slot = Some(Components::new(width, height));
    }
    slot.get_or_insert_with(|| Components::new(width, height))
}

/// Splits JP4 frames into their component planes. The planes are allocated
/// lazily and reused for as long as the source dimensions stay the same.
#[derive(Debug, Default)]
pub struct Jp4Splitter {
    components: Option<Components>,
}

impl Jp4Splitter {
    pub fn new() -> Jp4Splitter {
        Jp4Splitter::default()
    }

    pub fn g1(&self) -> Option<&Plane> {
        self.components.as_ref().map(|c| &c.g1)
    }

    pub fn g2(&self) -> Option<&Plane> {
        self.components.as_ref().map(|c| &c.g2)
    }

    pub fn r(&self) -> Option<&Plane> {
        self.components.as_ref().map(|c| &c.r)
    }

    pub fn b(&self) -> Option<&Plane> {
        self.components.as_ref().map(|c| &c.b)
    }

    pub fn component(&self, component: Component) -> Option<&Plane> {
        self.components.as_ref().map(|c| c.get(component))
    }

    pub fn components(&self) -> Option<&Components> {
        self.components.as_ref()
    }

    /// Splits a macroblock-coded frame into the four component planes.
    ///
    /// All four planes are reallocated together when the held planes don't match
    /// half the source dimensions, and are overwritten in place otherwise.
    pub fn split(&mut self, source: &Plane) -> Result<&Components> {
        check_alignment(source.width, source.height)?;

        let half_width = source.width / 2;
        let half_height = source.height / 2;

        let components = ensure_components(&mut self.components, half_width, half_height);

        for (my, mx) in iproduct!(
            (0..source.height).step_by(MACROBLOCK_SIZE),
            (0..source.width).step_by(MACROBLOCK_SIZE)
        ) {
            for component in Component::ALL {
                let (py, px) = component.patch_offset();
                let dest = components.get_mut(component);

                for y in 0..PATCH_SIZE {
                    let src_idx = (my + py + y) * source.width + mx + px;
                    let dest_idx = (my / 2 + y) * half_width + mx / 2;
                    dest.buffer[dest_idx..dest_idx + PATCH_SIZE]
                        .copy_from_slice(&source.buffer[src_idx..src_idx + PATCH_SIZE]);
                }
            }
        }

        Ok(&*components)
    }
}

fn scatter_to_bayer(source: &Plane, bayer: &mut Plane) {
    let width = source.width;

    for (my, mx) in iproduct!(
        (0..source.height).step_by(MACROBLOCK_SIZE),
        (0..width).step_by(MACROBLOCK_SIZE)
    ) {
        for component in Component::ALL {
            let (py, px) = component.patch_offset();
            let (by, bx) = component.bayer_phase();

            for (y, x) in iproduct!(0..PATCH_SIZE, 0..PATCH_SIZE) {
                let src_idx = (my + py + y) * width + mx + px + x;
                let dest_idx = (my + 2 * y + by) * width + mx + 2 * x + bx;
                bayer.buffer[dest_idx] = source.buffer[src_idx];
            }
        }
    }
}

/// Reassembles a macroblock-coded frame into a GRBG Bayer mosaic of the same size.
///
/// `bayer` is reused when it already matches the source dimensions and is
/// allocated otherwise. Source and destination can never share storage here, see
/// [`to_bayer_in_place`] for converting a frame in place.
pub fn to_bayer<'a>(source: &Plane, bayer: &'a mut Option<Plane>) -> Result<&'a Plane> {
    check_alignment(source.width, source.height)?;

    let dest = ensure_plane(bayer, source.width, source.height);
    scatter_to_bayer(source, dest);
    Ok(&*dest)
}

/// Converts a frame to a GRBG Bayer mosaic in place. The scatter always targets
/// a fresh buffer, which then replaces the frame's storage.
pub fn to_bayer_in_place(frame: &mut Plane) -> Result<()> {
    check_alignment(frame.width, frame.height)?;

    let mut bayer = Plane::new(frame.width, frame.height);
    scatter_to_bayer(frame, &mut bayer);
    *frame = bayer;
    Ok(())
}

/// Pulls the four component planes out of a GRBG Bayer mosaic.
pub fn bayer_to_components(bayer: &Plane) -> Result<Components> {
    check_alignment(bayer.width, bayer.height)?;

    let half_width = bayer.width / 2;
    let mut components = Components::new(half_width, bayer.height / 2);

    for component in Component::ALL {
        let (by, bx) = component.bayer_phase();
        let dest = components.get_mut(component);

        for (y, x) in iproduct!(0..dest.height, 0..half_width) {
            let src_idx = (2 * y + by) * bayer.width + 2 * x + bx;
            dest.buffer[y * half_width + x] = bayer.buffer[src_idx];
        }
    }

    Ok(components)
}
