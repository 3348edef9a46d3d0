//! # CUtil - Common Utilities Library
//!
//! A collection of utility modules shared by the workspace crates.
//!
//! ## Features
//!
//! - `fs`: File system utilities (executable directory, user path normalisation, file names)
//! - `time`: Time utilities (formatting the local clock)

#[cfg(feature = "fs")]
pub mod fs;

#[cfg(feature = "time")]
pub mod time;
