use crate::{CameraError, CameraResult};
use image::RgbImage;
use nokhwa::{
    Camera,
    pixel_format::RgbFormat,
    utils::{CameraIndex, RequestedFormat, RequestedFormatType},
};

/// Blocking handle on one capture device. The stream is stopped when the client drops.
pub struct CameraClient {
    camera: Camera,
    is_running: bool,
}

impl CameraClient {
    pub fn new(index: u32) -> CameraResult<Self> {
        let format =
            RequestedFormat::new::<RgbFormat>(RequestedFormatType::AbsoluteHighestFrameRate);

        let camera = Camera::new(CameraIndex::Index(index), format)
            .map_err(|e| CameraError::Unavailable(e.to_string()))?;

        Ok(Self {
            camera,
            is_running: false,
        })
    }

    pub fn start(&mut self) -> CameraResult<()> {
        self.camera
            .open_stream()
            .map_err(|e| CameraError::StartError(e.to_string()))?;
        self.is_running = true;
        Ok(())
    }

    pub fn stop(&mut self) -> CameraResult<()> {
        self.camera
            .stop_stream()
            .map_err(|e| CameraError::StopError(e.to_string()))?;
        self.is_running = false;
        Ok(())
    }

    pub fn frame(&mut self) -> CameraResult<RgbImage> {
        if !self.is_running {
            return Err(CameraError::StartError("stream not opened".to_string()));
        }

        let buffer = self.camera.frame()?;
        let image = buffer.decode_image::<RgbFormat>()?;

        if image.is_empty() {
            return Err(CameraError::NoFrameAvailable);
        }

        Ok(image)
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }
}

impl Drop for CameraClient {
    fn drop(&mut self) {
        if self.is_running() {
            match self.stop() {
                Ok(_) => log::debug!("camera stream stopped"),
                Err(e) => log::warn!("{e}"),
            }
        }
    }
}
