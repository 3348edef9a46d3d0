use camera::CameraError;
use std::{io, path::PathBuf};

/// Failures while talking to the user.
#[derive(thiserror::Error, Debug)]
pub enum ConsoleError {
    #[error("input closed")]
    Closed,

    #[error("console IO error: {0}")]
    Io(#[from] io::Error),
}

/// Failures while obtaining the initial image.
#[derive(thiserror::Error, Debug)]
pub enum SourceError {
    #[error("could not decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error(transparent)]
    Camera(#[from] CameraError),
}

#[derive(thiserror::Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Console(#[from] ConsoleError),

    #[error(transparent)]
    Source(#[from] SourceError),
}

/// Failures while writing the current image to disk.
#[derive(thiserror::Error, Debug)]
pub enum SaveError {
    #[error("could not create {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not write {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
