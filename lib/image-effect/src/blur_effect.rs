use crate::{Effect, ImageEffectError, ImageEffectResult};
use derivative::Derivative;
use derive_setters::Setters;
use image::{GrayImage, Rgb, RgbImage};
use imageproc::{
    filter::box_filter,
    map::{into_blue_channel, into_green_channel, into_red_channel},
};

/// Keeps `255 * (side + kernel)` inside the `u32` running sums of `box_filter`.
const KERNEL_SIZE_CAP: u64 = u32::MAX as u64 / (255 * 3);

/// Box (averaging) blur configuration
///
/// Every pixel becomes the mean of the `kernel_size` x `kernel_size` square around it.
/// The kernel size must be odd, at least 3 and at most [`BoxBlurConfig::max_kernel_size`]
/// for the image it is applied to.
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct BoxBlurConfig {
    #[derivative(Default(value = "3"))]
    kernel_size: u32,
}

impl BoxBlurConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kernel_size(&self) -> u32 {
        self.kernel_size
    }

    pub fn is_valid_kernel_size(kernel_size: i64) -> bool {
        kernel_size >= 3 && kernel_size % 2 == 1 && kernel_size <= u32::MAX as i64
    }

    /// Largest kernel accepted for an image of the given size: one that spans the
    /// longer side from any pixel.
    pub fn max_kernel_size(width: u32, height: u32) -> u32 {
        let side = width.max(height) as u64;
        ((2 * side + 1).min(KERNEL_SIZE_CAP) | 1) as u32
    }

    fn radius(&self) -> ImageEffectResult<u32> {
        if !Self::is_valid_kernel_size(self.kernel_size as i64) {
            return Err(ImageEffectError::InvalidParameter(format!(
                "kernel size must be an odd number >= 3, got {}",
                self.kernel_size
            )));
        }

        Ok((self.kernel_size - 1) / 2)
    }
}

impl Effect for BoxBlurConfig {
    fn apply(&self, image: &mut RgbImage) -> ImageEffectResult<()> {
        let radius = self.radius()?;
        if image.width() == 0 || image.height() == 0 {
            return Ok(());
        }

        let max = Self::max_kernel_size(image.width(), image.height());
        if self.kernel_size > max {
            return Err(ImageEffectError::InvalidParameter(format!(
                "kernel size {} exceeds {max} for a {}x{} image",
                self.kernel_size,
                image.width(),
                image.height()
            )));
        }

        let blur = |plane: GrayImage| box_filter(&plane, radius, radius);
        let (r, g, b) = (
            blur(into_red_channel(&*image)),
            blur(into_green_channel(&*image)),
            blur(into_blue_channel(&*image)),
        );

        *image = RgbImage::from_fn(image.width(), image.height(), |x, y| {
            Rgb([
                r.get_pixel(x, y)[0],
                g.get_pixel(x, y)[0],
                b.get_pixel(x, y)[0],
            ])
        });

        log::debug!("box blur {0}x{0} done", self.kernel_size);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkerboard() -> RgbImage {
        RgbImage::from_fn(9, 7, |x, y| {
            if (x + y) % 2 == 0 {
                Rgb([200, 100, 50])
            } else {
                Rgb([0, 20, 250])
            }
        })
    }

    #[test]
    fn test_kernel_size_validation() {
        assert!(BoxBlurConfig::is_valid_kernel_size(3));
        assert!(BoxBlurConfig::is_valid_kernel_size(5));
        assert!(BoxBlurConfig::is_valid_kernel_size(31));
        assert!(!BoxBlurConfig::is_valid_kernel_size(1));
        assert!(!BoxBlurConfig::is_valid_kernel_size(2));
        assert!(!BoxBlurConfig::is_valid_kernel_size(4));
        assert!(!BoxBlurConfig::is_valid_kernel_size(-3));
        assert!(!BoxBlurConfig::is_valid_kernel_size(0));
    }

    #[test]
    fn test_invalid_kernel_is_rejected() {
        let mut image = checkerboard();
        let before = image.clone();

        let ret = BoxBlurConfig::new().with_kernel_size(6).apply(&mut image);
        assert!(matches!(ret, Err(ImageEffectError::InvalidParameter(_))));
        assert_eq!(image, before);
    }

    #[test]
    fn test_max_kernel_size() {
        assert_eq!(BoxBlurConfig::max_kernel_size(4, 4), 9);
        assert_eq!(BoxBlurConfig::max_kernel_size(1, 1), 3);
        assert_eq!(BoxBlurConfig::max_kernel_size(9, 7), 19);

        let huge = BoxBlurConfig::max_kernel_size(u32::MAX, 1);
        assert_eq!(huge % 2, 1);
        assert!(huge as u64 <= KERNEL_SIZE_CAP + 1);
    }

    #[test]
    fn test_oversized_kernel_is_rejected() {
        let mut image = RgbImage::from_pixel(4, 4, Rgb([255, 255, 255]));
        let before = image.clone();

        for k in [11, 20_000_001, u32::MAX] {
            let ret = BoxBlurConfig::new().with_kernel_size(k).apply(&mut image);
            assert!(matches!(ret, Err(ImageEffectError::InvalidParameter(_))));
            assert_eq!(image, before);
        }
    }

    #[test]
    fn test_largest_kernel_is_accepted() {
        let mut image = RgbImage::from_pixel(4, 4, Rgb([255, 255, 255]));
        BoxBlurConfig::new().with_kernel_size(9).apply(&mut image).unwrap();

        assert!(image.pixels().all(|p| *p == Rgb([255, 255, 255])));
    }

    #[test]
    fn test_blur_keeps_shape_and_is_deterministic() {
        let source = checkerboard();

        for k in [3, 5, 7, 9, 15] {
            let config = BoxBlurConfig::new().with_kernel_size(k);
            let mut first = source.clone();
            let mut second = source.clone();
            config.apply(&mut first).unwrap();
            config.apply(&mut second).unwrap();

            assert_eq!(first.dimensions(), source.dimensions());
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_blur_uniform_image_is_unchanged() {
        let mut image = RgbImage::from_pixel(6, 6, Rgb([12, 34, 56]));
        BoxBlurConfig::new().with_kernel_size(5).apply(&mut image).unwrap();

        assert!(image.pixels().all(|p| *p == Rgb([12, 34, 56])));
    }

    #[test]
    fn test_blur_smooths_checkerboard() {
        let mut image = checkerboard();
        BoxBlurConfig::new().with_kernel_size(3).apply(&mut image).unwrap();

        // Interior pixels average 5 of one colour and 4 of the other
        let p = image.get_pixel(4, 3);
        assert!(p[0] > 0 && p[0] < 200);
        assert!(p[2] > 50 && p[2] < 250);
    }
}
