//! Channel isolation effects
//!
//! Keeps a single colour channel of an RGB image and zeroes the other two.

use crate::{Effect, ImageEffectError, ImageEffectResult};
use derivative::Derivative;
use derive_setters::Setters;
use image::RgbImage;
use imageproc::map::{
    from_blue_channel, from_green_channel, from_red_channel, into_blue_channel,
    into_green_channel, into_red_channel,
};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// Position of the channel inside an `Rgb` pixel.
    pub fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Channel::Red => 'R',
            Channel::Green => 'G',
            Channel::Blue => 'B',
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for Channel {
    type Err = ImageEffectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "R" => Ok(Channel::Red),
            "G" => Ok(Channel::Green),
            "B" => Ok(Channel::Blue),
            other => Err(ImageEffectError::InvalidParameter(format!(
                "unknown channel `{other}`"
            ))),
        }
    }
}

/// Isolate channel effect configuration
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct ChannelConfig {
    #[derivative(Default(value = "Channel::Red"))]
    channel: Channel,
}

impl ChannelConfig {
    pub fn new(channel: Channel) -> Self {
        Self::default().with_channel(channel)
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }
}

impl Effect for ChannelConfig {
    fn apply(&self, image: &mut RgbImage) -> ImageEffectResult<()> {
        *image = match self.channel {
            Channel::Red => from_red_channel(&into_red_channel(&*image)),
            Channel::Green => from_green_channel(&into_green_channel(&*image)),
            Channel::Blue => from_blue_channel(&into_blue_channel(&*image)),
        };

        Ok(())
    }
}
