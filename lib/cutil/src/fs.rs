//! File system utilities for locating the executable and normalising user supplied paths.

use anyhow::Result;
use std::{
    env,
    path::{Component, Path, PathBuf},
};

/// Characters stripped from both ends of a path typed by a user.
const USER_PATH_TRIM: &[char] = &['"', '\'', ' ', '\t', '\r', '\n'];

/// Gets the directory containing the current executable.
///
/// # Returns
///
/// Returns the directory path of the current executable, or an error if it cannot be determined.
///
/// # Examples
///
/// ```no_run
/// use cutil::fs::working_dir;
///
/// let dir = working_dir().unwrap();
/// println!("Executable directory: {:?}", dir);
/// ```
pub fn working_dir() -> Result<PathBuf> {
    let mut dir = env::current_exe()?;
    dir.pop();

    match dir.to_str() {
        Some(path) => Ok(PathBuf::from(path)),
        _ => Err(anyhow::anyhow!("convert {:?} failed", dir)),
    }
}

/// Turns a path typed at a prompt into a normalised path.
///
/// Surrounding quotes and whitespace are removed, then `.` components are dropped and
/// `name/..` pairs are collapsed without touching the file system.
///
/// # Arguments
///
/// * `input` - Raw text entered by the user
///
/// # Returns
///
/// Returns the normalised path. An input that collapses to nothing becomes `.`.
///
/// # Examples
///
/// ```
/// use cutil::fs::normalize_user_path;
/// use std::path::PathBuf;
///
/// assert_eq!(normalize_user_path("\"a/./b/../c.png\" "), PathBuf::from("a/c.png"));
/// ```
pub fn normalize_user_path(input: &str) -> PathBuf {
    let trimmed = input.trim_matches(USER_PATH_TRIM);
    let mut out = PathBuf::new();

    for component in Path::new(trimmed).components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }

    if out.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        out
    }
}

/// Extracts the file name from a path.
///
/// # Arguments
///
/// * `path` - Path to extract file name from
///
/// # Returns
///
/// Returns the file name as a string, or an empty string if the path has no file name.
///
/// # Examples
///
/// ```
/// use cutil::fs::file_name;
///
/// assert_eq!(file_name("/path/to/file.txt"), "file.txt");
/// assert_eq!(file_name("/path/to/directory/"), "directory");
/// ```
pub fn file_name(path: impl AsRef<Path>) -> String {
    path.as_ref()
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_user_path() {
        assert_eq!(normalize_user_path("image.png"), PathBuf::from("image.png"));
        assert_eq!(normalize_user_path("  'image.png'  "), PathBuf::from("image.png"));
        assert_eq!(normalize_user_path("\"dir/img.jpg\""), PathBuf::from("dir/img.jpg"));
        assert_eq!(normalize_user_path("./a/b/../c.png"), PathBuf::from("a/c.png"));
        assert_eq!(normalize_user_path("../x.png"), PathBuf::from("../x.png"));
        assert_eq!(normalize_user_path("/../x.png"), PathBuf::from("/x.png"));
        assert_eq!(normalize_user_path("a/.."), PathBuf::from("."));
        assert_eq!(normalize_user_path(""), PathBuf::from("."));
    }

    #[test]
    fn test_file_name() {
        assert_eq!(file_name("/path/to/file.txt"), "file.txt");
        assert_eq!(file_name("file.txt"), "file.txt");
        assert_eq!(file_name("/path/to/directory/"), "directory");
        assert_eq!(file_name(""), "");
    }

    #[test]
    fn test_working_dir() -> Result<()> {
        let wd = working_dir()?;
        assert!(wd.is_dir());
        Ok(())
    }
}
