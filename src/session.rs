//! The diagnostic pipeline: everything that ends up on screen, in display order.

use crate::{
    arith,
    calibration::Calibration,
    debayer,
    enums::Component,
    error::Result,
    jp4::{self, Jp4Splitter},
    plane::Plane,
};

use image::{DynamicImage, GrayImage, RgbImage};
use tracing::{debug, info};

/// A named image destined for its own window.
#[derive(Debug, Clone)]
pub struct View {
    pub name: String,
    pub image: DynamicImage,
}

impl View {
    pub fn new(name: &str, image: DynamicImage) -> View {
        View {
            name: name.to_owned(),
            image,
        }
    }

    fn gray(name: &str, plane: &Plane) -> Result<View> {
        Ok(View::new(
            name,
            DynamicImage::ImageLuma8(plane.to_gray_image()?),
        ))
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.image.width(), self.image.height())
    }
}

pub struct DebugSession {
    calibration: Calibration,
    splitter: Jp4Splitter,
    bayer: Option<Plane>,
    views: Vec<View>,
}

impl DebugSession {
    pub fn new(calibration: Calibration) -> DebugSession {
        DebugSession {
            calibration,
            splitter: Jp4Splitter::new(),
            bayer: None,
            views: vec![],
        }
    }

    fn push(&mut self, view: View) {
        let (w, h) = view.dimensions();
        debug!("View '{}' ({}x{})", view.name, w, h);
        self.views.push(view);
    }

    /// Runs the full pipeline on a raw frame and an optional reference image,
    /// both uncalibrated, and returns the views in display order.
    pub fn run(&mut self, raw: &GrayImage, reference: Option<&RgbImage>) -> Result<Vec<View>> {
        self.views.clear();

        let frame = Plane::from_gray_image(&self.calibration.apply_gray(raw)?);
        self.push(View::gray("raw", &frame)?);

        self.push_components(&frame)?;

        let bayer = jp4::to_bayer(&frame, &mut self.bayer)?.clone();
        self.push(View::gray("bayer", &bayer)?);

        let col = debayer::demosaic(&bayer)?;
        let gray = debayer::to_gray(&col);
        self.push(View::new("col", DynamicImage::ImageRgb8(col.clone())));
        self.push(View::new("gray", DynamicImage::ImageLuma8(gray.clone())));

        if let Some(reference) = reference {
            self.push_reference(reference, &col, &gray)?;
        }

        info!("Produced {} views", self.views.len());
        Ok(std::mem::take(&mut self.views))
    }

    fn push_components(&mut self, frame: &Plane) -> Result<()> {
        let components = self.splitter.split(frame)?.clone();

        for component in [Component::Gr, Component::Gb, Component::B, Component::R] {
            self.push(View::gray(
                &component.to_string(),
                components.get(component),
            )?);
        }

        let g1 = &components.g1;
        let g2 = &components.g2;
        let r = &components.r;
        let b = &components.b;

        self.push(View::gray(
            "g1-g2",
            &arith::centered_difference(g1, g2)?,
        )?);

        // Gr and Gb sit diagonally within a Bayer cell
        let g1_shifted = g1.shift(1, 1);
        self.push(View::gray(
            "g1-g2 shifted",
            &arith::centered_difference(&g1_shifted, g2)?,
        )?);

        let drg = arith::centered_difference(g1, r)?;
        let dgb = arith::centered_difference(g2, b)?;
        let drb = arith::centered_difference(r, b)?;
        let drbg = arith::centered_difference(&drg, &drb)?;

        self.push(View::gray("g1-r", &drg)?);
        self.push(View::gray("g2-b", &dgb)?);
        self.push(View::gray("r-b", &drb)?);
        self.push(View::gray("drbg", &drbg)?);

        Ok(())
    }

    fn push_reference(
        &mut self,
        reference: &RgbImage,
        col: &RgbImage,
        gray: &GrayImage,
    ) -> Result<()> {
        let reference = self.calibration.apply_rgb(reference)?;
        self.push(View::new(
            "col jpg",
            DynamicImage::ImageRgb8(reference.clone()),
        ));

        let dcol = arith::centered_difference_rgb(&reference, col)?;
        self.push(View::new("dcol", DynamicImage::ImageRgb8(dcol)));

        let jgray = debayer::to_gray(&reference);
        self.push(View::new("jgray", DynamicImage::ImageLuma8(jgray.clone())));

        let dgray = arith::centered_difference(
            &Plane::from_gray_image(&jgray),
            &Plane::from_gray_image(gray),
        )?;
        self.push(View::gray("dgray", &dgray)?);

        Ok(())
    }
}
