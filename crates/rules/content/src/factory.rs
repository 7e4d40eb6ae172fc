//! Loads a content directory into a ready-to-use oracle bundle.

use std::path::Path;

use anyhow::Context;
use rules_core::EditorConfig;

use crate::loaders::{
    AppearanceLoader, ClassLoader, ConfigLoader, ItemLoader, LoadResult, RaceLoader,
};
use crate::tables::OracleBundle;

/// Everything a content directory provides.
#[derive(Clone, Debug)]
pub struct LoadedContent {
    pub bundle: OracleBundle,
    pub config: EditorConfig,
}

/// Factory that assembles an [`OracleBundle`] from a content directory.
///
/// Expected layout:
///
/// ```text
/// content/
///   races.ron
///   appearances.ron
///   classes.ron
///   items.ron
///   config.toml      (optional)
/// ```
pub struct ContentFactory;

impl ContentFactory {
    /// Load all tables from `dir`.
    ///
    /// The four table files are required; `config.toml` falls back to
    /// [`EditorConfig::default`] when absent.
    pub fn load_dir(dir: &Path) -> LoadResult<LoadedContent> {
        let bundle = OracleBundle::new(
            RaceLoader::load(&dir.join("races.ron"))
                .with_context(|| format!("loading race table from {}", dir.display()))?,
            AppearanceLoader::load(&dir.join("appearances.ron"))
                .with_context(|| format!("loading appearance table from {}", dir.display()))?,
            ClassLoader::load(&dir.join("classes.ron"))
                .with_context(|| format!("loading class table from {}", dir.display()))?,
            ItemLoader::load(&dir.join("items.ron"))
                .with_context(|| format!("loading item catalog from {}", dir.display()))?,
        );

        let config_path = dir.join("config.toml");
        let config = if config_path.exists() {
            ConfigLoader::load(&config_path)?
        } else {
            EditorConfig::default()
        };

        Ok(LoadedContent { bundle, config })
    }
}
