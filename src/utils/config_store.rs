//! Config Store
//!
//! Loads and saves `GridConfig` as TOML.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::constants::CONFIG_FILE_NAME;
use crate::domain::GridConfig;
use crate::error::Result;
use crate::helpers::get_or_create_config_dir;

/// `grid-table.toml` inside the per-user config directory
pub fn default_config_path() -> Result<PathBuf> {
    Ok(get_or_create_config_dir()?.join(CONFIG_FILE_NAME))
}

/// Read and validate a config file
pub fn load_config(path: &Path) -> Result<GridConfig> {
    info!(path = ?path, "Loading config file");
    let value = fs::read_to_string(path)?;
    let config: GridConfig = toml::from_str(&value).map_err(|e| {
        error!(error = %e, path = ?path, "Failed to parse config file");
        e
    })?;
    config.validate()?;
    Ok(config)
}

/// Load the config, falling back to defaults when the file is missing
pub fn load_config_or_default(path: &Path) -> Result<GridConfig> {
    if !path.exists() {
        info!(path = ?path, "Config file not found, using defaults");
        return Ok(GridConfig::default());
    }
    load_config(path)
}

pub fn save_config(path: &Path, config: &GridConfig) -> Result<()> {
    config.validate()?;
    let value = toml::to_string(config)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, value)?;
    info!(path = ?path, "Config saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SortSpec;
    use crate::error::Error;
    use crate::i18n::Locale;
    use tempfile::TempDir;

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("nested").join("roundtrip.toml");
        let config = GridConfig {
            locale: Some(Locale::ZhCN),
            page_size: 50,
            hidden_columns: vec!["email".into()],
            initial_sort: SortSpec::desc("last_name"),
            ..GridConfig::default()
        };
        save_config(&path, &config).expect("save");
        let loaded = load_config(&path).expect("load");
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("partial.toml");
        fs::write(&path, "page_size = 100\nis_virtual_scrolling = true\n").expect("write");

        let loaded = load_config(&path).expect("load");
        assert_eq!(loaded.page_size, 100);
        assert!(loaded.is_virtual_scrolling);
        assert!(loaded.is_paginated);
    }

    #[test]
    fn test_invalid_page_size_rejected() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("invalid.toml");
        fs::write(&path, "page_size = 0\n").expect("write");

        assert!(matches!(load_config(&path), Err(Error::Invalid { .. })));
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("malformed.toml");
        fs::write(&path, "page_size = \"many\"\n").expect("write");

        assert!(matches!(load_config(&path), Err(Error::TomlDe { .. })));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("does-not-exist.toml");
        assert_eq!(load_config_or_default(&path).expect("default"), GridConfig::default());
    }
}
