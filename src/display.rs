use crate::{
    error::{Jp4Error, Result},
    session::View,
};

use image::DynamicImage;
use minifb::{Key, Window, WindowOptions};
use std::time::Duration;
use tracing::{debug, info};

const TARGET_FPS: u64 = 30;

/// Minimum delay between two window updates.
pub fn frame_interval() -> Duration {
    Duration::from_micros(1_000_000 / TARGET_FPS)
}

// Packs an image into the 0RGB framebuffer layout expected by minifb
pub fn to_framebuffer(image: &DynamicImage) -> Vec<u32> {
    image
        .to_rgb8()
        .pixels()
        .map(|p| ((p[0] as u32) << 16) | ((p[1] as u32) << 8) | (p[2] as u32))
        .collect()
}

struct ViewWindow {
    window: Window,
    framebuffer: Vec<u32>,
    width: usize,
    height: usize,
}

impl ViewWindow {
    fn open(view: &View) -> Result<ViewWindow> {
        let (width, height) = view.dimensions();
        let (width, height) = (width as usize, height as usize);

        let mut window = Window::new(&view.name, width, height, WindowOptions::default())
            .map_err(|e| Jp4Error::Display(format!("{}: {}", view.name, e)))?;
        window.limit_update_rate(Some(frame_interval()));

        Ok(ViewWindow {
            window,
            framebuffer: to_framebuffer(&view.image),
            width,
            height,
        })
    }

    fn redraw(&mut self) -> Result<()> {
        self.window
            .update_with_buffer(&self.framebuffer, self.width, self.height)
            .map_err(|e| Jp4Error::Display(e.to_string()))
    }
}

/// Shows every view in its own window and blocks until all windows are closed or
/// Escape is pressed in any of them.
pub fn show(views: &[View]) -> Result<()> {
    let mut windows = views
        .iter()
        .map(ViewWindow::open)
        .collect::<Result<Vec<ViewWindow>>>()?;
    info!("Opened {} windows, press Escape to quit", windows.len());

    while !windows.is_empty() {
        if windows.iter().any(|w| w.window.is_key_down(Key::Escape)) {
            debug!("Escape pressed");
            break;
        }

        for w in windows.iter_mut() {
            w.redraw()?;
        }
        windows.retain(|w| w.window.is_open());
    }

    Ok(())
}
