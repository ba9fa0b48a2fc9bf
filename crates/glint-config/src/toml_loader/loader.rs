//! Read TOML overrides from text or files.

use crate::overrides::ConfigOverrides;
use glint_common::ConfigError;
use std::path::Path;
use tracing::{debug, info};

use super::paths::default_config_path;

/// Parse TOML text as overrides. Keys left out keep their defaults.
pub fn load_from_str(content: &str) -> Result<ConfigOverrides, ConfigError> {
    toml::from_str(content).map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))
}

/// Read overrides from a TOML file without merging them.
pub fn load_overrides_from_path(path: &Path) -> Result<ConfigOverrides, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
        _ => ConfigError::ParseError(format!("failed to read {}: {e}", path.display())),
    })?;
    let overrides = load_from_str(&content)?;
    info!("loaded config overrides from {}", path.display());
    Ok(overrides)
}

/// Read overrides from the platform-specific default path.
///
/// On Linux: `~/.config/glint/config.toml`
///
/// A missing file means no overrides.
pub fn load_default_overrides() -> Result<ConfigOverrides, ConfigError> {
    overrides_or_default(&default_config_path()?)
}

pub(super) fn overrides_or_default(path: &Path) -> Result<ConfigOverrides, ConfigError> {
    match load_overrides_from_path(path) {
        Err(ConfigError::FileNotFound(_)) => {
            debug!("no config at {}, using defaults", path.display());
            Ok(ConfigOverrides::default())
        }
        other => other,
    }
}
