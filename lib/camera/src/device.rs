use crate::CameraResult;
use derivative::Derivative;
use derive_setters::Setters;
use image::RgbImage;

/// Source of single still frames.
pub trait FrameGrabber {
    /// Opens the device, reads exactly one frame and releases the device again.
    fn grab(&mut self) -> CameraResult<RgbImage>;
}

#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct CameraConfig {
    #[derivative(Default(value = "0"))]
    pub index: u32,
}

/// A physical capture device addressed by index.
#[derive(Debug, Clone, Default)]
pub struct DeviceCamera {
    config: CameraConfig,
}

impl DeviceCamera {
    pub fn new(config: CameraConfig) -> Self {
        Self { config }
    }

    pub fn index(&self) -> u32 {
        self.config.index
    }
}

impl FrameGrabber for DeviceCamera {
    #[cfg(feature = "native")]
    fn grab(&mut self) -> CameraResult<RgbImage> {
        crate::init();

        // The client stops its stream on drop, whichever way this returns
        let mut client = crate::CameraClient::new(self.config.index)?;
        client.start()?;
        let frame = client.frame()?;

        log::debug!(
            "camera {} frame: {}x{}",
            self.config.index,
            frame.width(),
            frame.height()
        );
        Ok(frame)
    }

    #[cfg(not(feature = "native"))]
    fn grab(&mut self) -> CameraResult<RgbImage> {
        Err(crate::CameraError::Unavailable(format!(
            "camera {} requested but native camera support is not compiled in",
            self.config.index
        )))
    }
}
