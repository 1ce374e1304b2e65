//! Filesystem layer for flutter-pods
//!
//! Provides normalized path handling, plugin symlink creation and
//! format-agnostic configuration loading.

pub mod config;
pub mod constants;
pub mod error;
pub mod io;
pub mod path;

pub use config::ConfigStore;
pub use constants::PodPath;
pub use error::{Error, Result};
pub use path::{NormalizedPath, validate_path_segment};
