use crate::error::SaveError;
use image::RgbImage;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Extensions the encoder accepts as they are; anything else gets `.jpg` appended.
pub const RECOGNIZED_EXTENSIONS: [&str; 10] = [
    "jpg", "jpeg", "png", "bmp", "gif", "pnm", "ppm", "tif", "tiff", "webp",
];
pub const FALLBACK_EXTENSION: &str = "jpg";

/// Resolves the name typed at the save prompt to a bare file name.
///
/// Quotes, whitespace and any directory part are dropped. A blank answer falls back to
/// `default_name`.
pub fn output_file_name(input: &str, default_name: &str) -> String {
    let name = cutil::fs::file_name(cutil::fs::normalize_user_path(input));
    let name = if name.is_empty() {
        default_name.to_string()
    } else {
        name
    };

    let recognized = Path::new(&name)
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| RECOGNIZED_EXTENSIONS.contains(&ext.as_str()));

    if recognized {
        name
    } else {
        format!("{name}.{FALLBACK_EXTENSION}")
    }
}

/// Encodes `image` as `dir/name`, creating `dir` first when needed.
pub fn save_image(image: &RgbImage, dir: &Path, name: &str) -> Result<PathBuf, SaveError> {
    fs::create_dir_all(dir).map_err(|source| SaveError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(name);
    image.save(&path).map_err(|source| SaveError::Encode {
        path: path.clone(),
        source,
    })?;

    log::debug!("saved {}x{} to {}", image.width(), image.height(), path.display());
    Ok(path)
}
