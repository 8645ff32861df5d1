use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::cache::DEFAULT_CACHE_CAPACITY;

/// Global configuration loaded from `~/.config/yurl/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YurlConfig {
    /// Number of parsed inputs memoized before the parse cache is reset.
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,
    /// Validate every parsed input and fail on the first invalid component.
    #[serde(default)]
    pub validate: bool,
    /// Print components as JSON instead of `name: value` lines.
    #[serde(default)]
    pub json: bool,
}

fn default_cache_capacity() -> usize {
    DEFAULT_CACHE_CAPACITY
}

impl Default for YurlConfig {
    fn default() -> Self {
        Self {
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            validate: false,
            json: false,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("yurl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<YurlConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`], for an explicit config file location.
pub fn load_or_init_at(path: &Path) -> Result<YurlConfig> {
    if !path.exists() {
        let default_cfg = YurlConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)?;
    let cfg: YurlConfig = toml::from_str(&data)
        .with_context(|| format!("invalid config file {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = YurlConfig::default();
        assert_eq!(cfg.cache_capacity, 20);
        assert!(!cfg.validate);
        assert!(!cfg.json);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = YurlConfig {
            cache_capacity: 64,
            validate: true,
            json: false,
        };
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: YurlConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_missing_fields_use_defaults() {
        let cfg: YurlConfig = toml::from_str("validate = true").unwrap();
        assert_eq!(cfg.cache_capacity, 20);
        assert!(cfg.validate);
        assert!(!cfg.json);
    }

    #[test]
    fn load_or_init_writes_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let cfg = load_or_init_at(&path).unwrap();
        assert_eq!(cfg, YurlConfig::default());
        assert!(path.exists());

        fs::write(&path, "cache_capacity = 5\njson = true\n").unwrap();
        let cfg = load_or_init_at(&path).unwrap();
        assert_eq!(cfg.cache_capacity, 5);
        assert!(cfg.json);
    }

    #[test]
    fn load_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "cache_capacity = \"lots\"").unwrap();
        let err = load_or_init_at(&path).unwrap_err();
        assert!(format!("{err:#}").contains("invalid config file"));
    }
}
