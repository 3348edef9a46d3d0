//! Transient preview windows.
//!
//! A preview blocks until a key is pressed, the window is closed or the deadline passes,
//! whichever happens first. The window is always gone when `show` returns.

use crate::config::Config;
use image::{GrayImage, RgbImage};

pub type ViewerResult<T> = Result<T, ViewerError>;

#[derive(thiserror::Error, Debug)]
pub enum ViewerError {
    #[error("window error: {0}")]
    Window(String),

    #[error("nothing to display: image is {0}x{1}")]
    EmptyImage(u32, u32),
}

#[derive(Debug, Clone, Copy)]
pub enum Preview<'a> {
    Color(&'a RgbImage),
    Gray(&'a GrayImage),
}

impl Preview<'_> {
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            Preview::Color(image) => image.dimensions(),
            Preview::Gray(image) => image.dimensions(),
        }
    }

    /// Packs the pixels as `0RGB` words, row major.
    pub fn to_argb(&self) -> Vec<u32> {
        let pack = |r: u8, g: u8, b: u8| ((r as u32) << 16) | ((g as u32) << 8) | b as u32;

        match self {
            Preview::Color(image) => image.pixels().map(|p| pack(p[0], p[1], p[2])).collect(),
            Preview::Gray(image) => image.pixels().map(|p| pack(p[0], p[0], p[0])).collect(),
        }
    }
}

/// What became of a preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presented {
    Window,
    /// Nothing could be drawn; the caller tells the user instead.
    Skipped,
}

pub trait Viewer {
    fn show(&mut self, title: &str, preview: Preview<'_>) -> ViewerResult<Presented>;
}

/// Used when no window system is compiled in.
#[derive(Debug, Default)]
pub struct HeadlessViewer;

impl Viewer for HeadlessViewer {
    fn show(&mut self, title: &str, preview: Preview<'_>) -> ViewerResult<Presented> {
        let (width, height) = preview.dimensions();
        log::info!("{title}: {width}x{height}");
        Ok(Presented::Skipped)
    }
}

#[cfg(feature = "window")]
pub use window::WindowViewer;

#[cfg(feature = "window")]
mod window {
    use super::{Presented, Preview, Viewer, ViewerError, ViewerResult};
    use minifb::{KeyRepeat, ScaleMode, Window, WindowOptions};
    use std::time::{Duration, Instant};

    const TARGET_FPS: usize = 30;

    pub struct WindowViewer {
        timeout: Duration,
    }

    impl WindowViewer {
        pub fn new(timeout: Duration) -> Self {
            Self { timeout }
        }
    }

    impl Viewer for WindowViewer {
        fn show(&mut self, title: &str, preview: Preview<'_>) -> ViewerResult<Presented> {
            let (width, height) = preview.dimensions();
            if width == 0 || height == 0 {
                return Err(ViewerError::EmptyImage(width, height));
            }

            let (width, height) = (width as usize, height as usize);
            let buffer = preview.to_argb();

            let mut window = Window::new(
                title,
                width,
                height,
                WindowOptions {
                    resize: true,
                    scale_mode: ScaleMode::AspectRatioStretch,
                    ..WindowOptions::default()
                },
            )
            .map_err(|e| ViewerError::Window(e.to_string()))?;

            // update_with_buffer sleeps to hold the frame rate, so this loop does not spin
            window.set_target_fps(TARGET_FPS);

            let deadline = Instant::now() + self.timeout;
            while window.is_open() && Instant::now() < deadline {
                window
                    .update_with_buffer(&buffer, width, height)
                    .map_err(|e| ViewerError::Window(e.to_string()))?;

                if !window.get_keys_pressed(KeyRepeat::No).is_empty() {
                    log::debug!("{title}: closed by key press");
                    break;
                }
            }

            Ok(Presented::Window)
        }
    }
}

/// The viewer matching the compiled features.
pub fn default_viewer(config: &Config) -> Box<dyn Viewer> {
    #[cfg(feature = "window")]
    {
        Box::new(WindowViewer::new(config.display_timeout))
    }

    #[cfg(not(feature = "window"))]
    {
        log::debug!(
            "built without window support, previews ({}s) are skipped",
            config.display_timeout.as_secs()
        );
        Box::new(HeadlessViewer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Luma, Rgb};

    #[test]
    fn test_color_to_argb() {
        let image = RgbImage::from_fn(2, 1, |x, _| {
            if x == 0 {
                Rgb([0x12, 0x34, 0x56])
            } else {
                Rgb([0xff, 0x00, 0x01])
            }
        });

        assert_eq!(Preview::Color(&image).to_argb(), vec![0x123456, 0xff0001]);
    }

    #[test]
    fn test_gray_to_argb() {
        let image = GrayImage::from_pixel(1, 2, Luma([0x80]));
        let preview = Preview::Gray(&image);

        assert_eq!(preview.dimensions(), (1, 2));
        assert_eq!(preview.to_argb(), vec![0x808080, 0x808080]);
    }

    #[test]
    fn test_headless_viewer_skips() {
        let image = RgbImage::new(3, 3);
        let mut viewer = HeadlessViewer;
        assert_eq!(
            viewer.show("test", Preview::Color(&image)).unwrap(),
            Presented::Skipped
        );
    }
}
