//! Annotation effects
//!
//! Draws shapes on top of an image without touching the pixels around them.

use crate::{Effect, ImageEffectError, ImageEffectResult};
use derivative::Derivative;
use derive_setters::Setters;
use image::{Rgb, RgbImage};
use imageproc::{drawing::draw_hollow_rect_mut, rect::Rect};

/// Hollow rectangle configuration
///
/// The corners may be given in any order and may lie outside the image; the parts that
/// fall outside are clipped. The border is centred on the outline, an even thickness puts
/// the extra pixel on the outside.
#[derive(Debug, Clone, Copy, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct RectangleConfig {
    #[derivative(Default(value = "(0, 0)"))]
    pub top_left: (i32, i32),

    #[derivative(Default(value = "(0, 0)"))]
    pub bottom_right: (i32, i32),

    /// Border color (RGB)
    #[derivative(Default(value = "Rgb([0, 0, 255])"))]
    pub color: Rgb<u8>,

    /// Border width in pixels
    #[derivative(Default(value = "2"))]
    pub thickness: u32,
}

impl RectangleConfig {
    pub fn new(top_left: (i32, i32), bottom_right: (i32, i32)) -> Self {
        Self::default()
            .with_top_left(top_left)
            .with_bottom_right(bottom_right)
    }
}

impl Effect for RectangleConfig {
    fn apply(&self, image: &mut RgbImage) -> ImageEffectResult<()> {
        if self.thickness == 0 {
            return Err(ImageEffectError::InvalidParameter(
                "rectangle thickness must be at least 1".to_string(),
            ));
        }

        let t = self.thickness as i64;

        // Keep far-away corners just outside the canvas so line drawing stays bounded
        let clamp_x = |v: i32| (v as i64).clamp(-t - 1, image.width() as i64 + t);
        let clamp_y = |v: i32| (v as i64).clamp(-t - 1, image.height() as i64 + t);

        let (x1, x2) = (clamp_x(self.top_left.0), clamp_x(self.bottom_right.0));
        let (y1, y2) = (clamp_y(self.top_left.1), clamp_y(self.bottom_right.1));
        let (left, right) = (x1.min(x2), x1.max(x2));
        let (top, bottom) = (y1.min(y2), y1.max(y2));

        let outward = t / 2;
        for offset in -outward..(t - outward) {
            let width = right - left + 1 - 2 * offset;
            let height = bottom - top + 1 - 2 * offset;
            if width <= 0 || height <= 0 {
                break;
            }

            let rect = Rect::at((left + offset) as i32, (top + offset) as i32)
                .of_size(width as u32, height as u32);
            draw_hollow_rect_mut(image, rect, self.color);
        }

        Ok(())
    }
}
