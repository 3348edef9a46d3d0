use anyhow::{Context, Result};
use derivative::Derivative;
use derive_setters::Setters;
use image::Rgb;
use std::{
    path::{Path, PathBuf},
    time::Duration,
};

pub const JOURNAL_FILE: &str = "image_processing_log.txt";
pub const OUTPUT_DIR: &str = "processed_images";

/// Runtime settings. Nothing here is read from or written to disk.
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct Config {
    #[derivative(Default(value = "PathBuf::from(JOURNAL_FILE)"))]
    pub journal_path: PathBuf,

    #[derivative(Default(value = "PathBuf::from(OUTPUT_DIR)"))]
    pub output_dir: PathBuf,

    #[derivative(Default(value = "\"output.jpg\".to_string()"))]
    pub default_save_name: String,

    /// Longest time a preview window stays open without a key press
    #[derivative(Default(value = "Duration::from_secs(5)"))]
    pub display_timeout: Duration,

    #[derivative(Default(value = "0"))]
    pub camera_index: u32,

    #[derivative(Default(value = "Rgb([0, 0, 255])"))]
    pub annotation_color: Rgb<u8>,

    #[derivative(Default(value = "2"))]
    pub annotation_thickness: u32,
}

impl Config {
    /// Places the journal and the output directory next to the executable.
    pub fn new() -> Result<Self> {
        let dir = cutil::fs::working_dir().context("failed to locate executable directory")?;
        Ok(Self::in_dir(&dir))
    }

    pub fn in_dir(dir: &Path) -> Self {
        Self::default()
            .with_journal_path(dir.join(JOURNAL_FILE))
            .with_output_dir(dir.join(OUTPUT_DIR))
    }
}
