//! Loaders for reading lookup tables from game-data files.
//!
//! Each loader converts one RON/TOML file into its in-memory table from
//! [`crate::tables`]. Every loader also exposes a `parse` entry point for
//! callers that already hold the file contents.

pub mod appearances;
pub mod classes;
pub mod config;
pub mod items;
pub mod races;

pub use appearances::AppearanceLoader;
pub use classes::ClassLoader;
pub use config::ConfigLoader;
pub use items::ItemLoader;
pub use races::RaceLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
