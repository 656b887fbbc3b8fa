use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::{Error, Result};

/// Per-user config directory, created on first use
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    let project = ProjectDirs::from("com", "cyenx", "grid-table").ok_or_else(|| Error::Invalid {
        message: "no home directory for config".to_string(),
    })?;
    let path = project.config_dir().to_path_buf();
    fs::create_dir_all(&path)?;
    Ok(path)
}
