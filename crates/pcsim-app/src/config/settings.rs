//! Settings loader for config.toml

use std::path::{Path, PathBuf};

use pcsim_core::prelude::*;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const PCSIM_DIR: &str = ".pcsim";
const APP_DIR: &str = "pc-assembly-sim";

/// Parse settings from TOML text
///
/// Unknown keys are ignored; missing sections take their defaults. A zero
/// frame rate is rejected since the event loop could never tick.
pub fn parse_settings(content: &str) -> Result<Settings> {
    let settings: Settings = toml::from_str(content)?;
    if settings.ui.frame_rate == 0 {
        return Err(Error::config_invalid("ui.frame_rate must be at least 1"));
    }
    Ok(settings)
}

/// Load settings from an explicit file
///
/// Unlike [`load_settings`], a missing or malformed file is an error here:
/// the user asked for this file by name.
pub fn load_settings_from(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Err(Error::config_not_found(path));
    }
    let content = std::fs::read_to_string(path)?;
    let settings = parse_settings(&content)?;
    debug!("Loaded settings from {:?}", path);
    Ok(settings)
}

/// Locate the settings file to use for `working_dir`
///
/// `.pcsim/config.toml` in the working directory wins over the per-user
/// config directory.
pub fn find_settings_file(working_dir: &Path) -> Option<PathBuf> {
    let local = working_dir.join(PCSIM_DIR).join(CONFIG_FILENAME);
    if local.exists() {
        return Some(local);
    }

    let user = dirs::config_dir()?.join(APP_DIR).join(CONFIG_FILENAME);
    user.exists().then_some(user)
}

/// Load settings for `working_dir`, falling back to defaults
///
/// Problems with the discovered file are logged and the defaults are used.
pub fn load_settings(working_dir: &Path) -> Settings {
    let Some(config_path) = find_settings_file(working_dir) else {
        debug!("No config file found from {:?}, using defaults", working_dir);
        return Settings::default();
    };

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match parse_settings(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}
