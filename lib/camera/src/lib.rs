#[cfg(feature = "native")]
pub mod camera_client;
pub mod device;

#[cfg(feature = "native")]
pub use camera_client::CameraClient;
pub use device::{CameraConfig, DeviceCamera, FrameGrabber};
pub use image::RgbImage;

pub type CameraResult<T> = Result<T, CameraError>;

#[derive(thiserror::Error, Debug)]
pub enum CameraError {
    #[error("Camera unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to start camera: {0}")]
    StartError(String),

    #[error("Failed to stop camera: {0}")]
    StopError(String),

    #[error("No frame available")]
    NoFrameAvailable,

    #[cfg(feature = "native")]
    #[error("Camera error: {0}")]
    NokhwaError(#[from] nokhwa::NokhwaError),
}

impl CameraError {
    /// Whether the device could not be opened at all, as opposed to failing mid-capture.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            CameraError::Unavailable(_) | CameraError::StartError(_)
        )
    }
}

pub fn init() {
    #[cfg(all(feature = "native", target_os = "macos"))]
    nokhwa::nokhwa_initialize(|granted| {
        log::info!("User said {} for nokhwa", granted);
    });
}
