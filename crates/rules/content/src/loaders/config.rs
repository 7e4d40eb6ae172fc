//! Editor configuration loader.

use std::path::Path;

use rules_core::EditorConfig;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Configuration file structure for TOML files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFileSpec {
    #[serde(default)]
    pub editor: EditorConfig,
}

/// Loader for editor configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> LoadResult<EditorConfig> {
        Self::parse(&read_file(path)?)
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> LoadResult<EditorConfig> {
        let spec: ConfigFileSpec = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        Ok(spec.editor)
    }
}
