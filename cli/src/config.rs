use std::fs;
use std::path::{Path, PathBuf};

use primkit_types::ConvertSettings;
use serde::Deserialize;

/// Contents of `~/.primkit/config.toml`.
///
/// ```toml
/// [convert]
/// truthy = ["true", "yes", "y"]
/// falsy = ["false", "no", "n"]
/// separator = " | "
/// fixed_digits = 3
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PrimkitConfig {
    pub convert: Option<ConvertSettings>,
}

impl PrimkitConfig {
    /// Load from `explicit`, or from the default location when `None`.
    ///
    /// A missing default file is silent. Anything else that goes wrong is
    /// logged and treated as "no config".
    pub fn load(explicit: Option<&Path>) -> Option<Self> {
        match explicit {
            Some(path) => {
                if !path.exists() {
                    tracing::warn!("Config file {:?} does not exist", path);
                    return None;
                }
                Self::load_from(path)
            }
            None => {
                let path = config_path()?;
                if !path.exists() {
                    return None;
                }
                Self::load_from(&path)
            }
        }
    }

    pub fn load_from(path: &Path) -> Option<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return None;
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Some(config),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                None
            }
        }
    }

    pub fn into_settings(self) -> ConvertSettings {
        self.convert.unwrap_or_default()
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".primkit").join("config.toml"))
}
