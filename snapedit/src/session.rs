use image::RgbImage;

/// Image state of one editing session.
///
/// `original` can only be set by [`Session::with_image`] and is only ever read afterwards;
/// `current` is swapped out wholesale by every transformation.
#[derive(Debug, Default)]
pub struct Session {
    current: Option<RgbImage>,
    original: Option<RgbImage>,
}

impl Session {
    /// A session that has no image yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes `image` as both the working copy and the reset snapshot.
    pub fn with_image(image: RgbImage) -> Self {
        Self {
            original: Some(image.clone()),
            current: Some(image),
        }
    }

    pub fn has_image(&self) -> bool {
        self.current.is_some()
    }

    pub fn current(&self) -> Option<&RgbImage> {
        self.current.as_ref()
    }

    pub fn original(&self) -> Option<&RgbImage> {
        self.original.as_ref()
    }

    pub fn replace(&mut self, image: RgbImage) {
        self.current = Some(image);
    }

    /// Restores `current` from the snapshot. Returns `false` when there is nothing to restore.
    pub fn reset(&mut self) -> bool {
        match &self.original {
            Some(original) => {
                self.current = Some(original.clone());
                true
            }
            None => false,
        }
    }
}
