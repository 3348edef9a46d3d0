use crate::{Effect, ImageEffectResult};
use image::{DynamicImage, GrayImage, RgbImage, imageops};

/// Single-channel luminance of an RGB image, Rec. 709 weights.
pub fn to_luma(image: &RgbImage) -> GrayImage {
    imageops::grayscale(image)
}

/// Re-expands a luminance image to three equal channels.
pub fn expand_luma(gray: GrayImage) -> RgbImage {
    DynamicImage::ImageLuma8(gray).to_rgb8()
}

/// Grayscale effect configuration
///
/// The stored image keeps its three channels, each holding the luminance.
#[derive(Debug, Clone, Default)]
#[non_exhaustive]
pub struct GrayscaleConfig {}

impl GrayscaleConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Effect for GrayscaleConfig {
    fn apply(&self, image: &mut RgbImage) -> ImageEffectResult<()> {
        *image = expand_luma(to_luma(image));
        Ok(())
    }
}
