pub mod annotate_effect;
pub mod base_effect;
pub mod blur_effect;
pub mod channel_effect;

use image::RgbImage;

pub use annotate_effect::RectangleConfig;
pub use base_effect::{GrayscaleConfig, expand_luma, to_luma};
pub use blur_effect::BoxBlurConfig;
pub use channel_effect::{Channel, ChannelConfig};

pub type ImageEffectResult<T> = Result<T, ImageEffectError>;

#[derive(thiserror::Error, Debug)]
pub enum ImageEffectError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

pub trait Effect {
    fn apply(&self, image: &mut RgbImage) -> ImageEffectResult<()>;
}

#[derive(Debug, Clone)]
pub enum ImageEffect {
    // Channel effects
    IsolateChannel(channel_effect::ChannelConfig),

    // Blur effects
    BoxBlur(blur_effect::BoxBlurConfig),

    // Base effects
    Grayscale(base_effect::GrayscaleConfig),

    // Annotations
    Rectangle(annotate_effect::RectangleConfig),
}

impl Effect for ImageEffect {
    fn apply(&self, image: &mut RgbImage) -> ImageEffectResult<()> {
        match self {
            ImageEffect::IsolateChannel(config) => config.apply(image),
            ImageEffect::BoxBlur(config) => config.apply(image),
            ImageEffect::Grayscale(config) => config.apply(image),
            ImageEffect::Rectangle(config) => config.apply(image),
        }
    }
}

impl ImageEffect {
    /// Runs the effect on a copy and hands the copy back, leaving `image` untouched.
    pub fn render(&self, image: &RgbImage) -> ImageEffectResult<RgbImage> {
        let mut output = image.clone();
        self.apply(&mut output)?;
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_render_leaves_source_untouched() {
        let source = RgbImage::from_pixel(3, 3, Rgb([10, 20, 30]));
        let effect = ImageEffect::IsolateChannel(ChannelConfig::new(Channel::Green));

        let output = effect.render(&source).unwrap();
        assert_eq!(source.get_pixel(1, 1), &Rgb([10, 20, 30]));
        assert_eq!(output.get_pixel(1, 1), &Rgb([0, 20, 0]));
    }

    #[test]
    fn test_render_failure_returns_error() {
        let source = RgbImage::from_pixel(3, 3, Rgb([10, 20, 30]));
        let effect = ImageEffect::BoxBlur(BoxBlurConfig::new().with_kernel_size(4));

        assert!(matches!(
            effect.render(&source),
            Err(ImageEffectError::InvalidParameter(_))
        ));
    }
}
