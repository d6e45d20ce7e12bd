// src/system/settings.rs

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::models::ShellSettings;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Filesystem Error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse settings file: {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("Failed to serialize default settings: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// Loads engine settings from `path`.
///
/// A missing file is created with the default settings, which are then
/// returned; every key in the file is optional and falls back to its
/// default. The conventional file name is
/// [`crate::constants::SETTINGS_FILENAME`].
pub fn load_settings(path: &Path) -> Result<ShellSettings, SettingsError> {
    if !path.exists() {
        let defaults = ShellSettings::default();
        let toml_string = toml::to_string_pretty(&defaults)?;
        fs::write(path, toml_string)?;
        log::debug!("wrote default settings to {}", path.display());
        return Ok(defaults);
    }

    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

// MARK: --- UNIT TESTS ---
