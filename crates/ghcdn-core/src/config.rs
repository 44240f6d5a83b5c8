use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::present::{DEFAULT_COPY_NOTICE, DEFAULT_TOOLTIP_THRESHOLD};

/// Global configuration loaded from `~/.config/ghcdn/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GhcdnConfig {
    /// Entries longer than this many characters are shown truncated (hover tooltip in a GUI).
    #[serde(default = "default_tooltip_threshold")]
    pub tooltip_threshold: usize,
    /// Seconds the "Copied to clipboard" notice stays visible.
    #[serde(default = "default_copy_notice_secs")]
    pub copy_notice_secs: u64,
    /// Directory holding persisted custom templates. None = `~/.local/state/ghcdn`.
    #[serde(default)]
    pub state_dir: Option<PathBuf>,
    /// Include the built-in CDN mirrors in generated links.
    #[serde(default = "default_include_builtin")]
    pub include_builtin: bool,
}

fn default_tooltip_threshold() -> usize {
    DEFAULT_TOOLTIP_THRESHOLD
}

fn default_copy_notice_secs() -> u64 {
    DEFAULT_COPY_NOTICE.as_secs()
}

fn default_include_builtin() -> bool {
    true
}

impl Default for GhcdnConfig {
    fn default() -> Self {
        Self {
            tooltip_threshold: default_tooltip_threshold(),
            copy_notice_secs: default_copy_notice_secs(),
            state_dir: None,
            include_builtin: default_include_builtin(),
        }
    }
}

impl GhcdnConfig {
    pub fn copy_notice(&self) -> Duration {
        Duration::from_secs(self.copy_notice_secs)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("ghcdn")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<GhcdnConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`] for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<GhcdnConfig> {
    if !path.exists() {
        let default_cfg = GhcdnConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write config: {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: GhcdnConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = GhcdnConfig::default();
        assert_eq!(cfg.tooltip_threshold, 20);
        assert_eq!(cfg.copy_notice_secs, 2);
        assert_eq!(cfg.copy_notice(), Duration::from_secs(2));
        assert!(cfg.state_dir.is_none());
        assert!(cfg.include_builtin);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = GhcdnConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: GhcdnConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_partial_uses_defaults() {
        let toml = r#"
            tooltip_threshold = 40
        "#;
        let cfg: GhcdnConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.tooltip_threshold, 40);
        assert_eq!(cfg.copy_notice_secs, 2);
        assert!(cfg.include_builtin);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            tooltip_threshold = 10
            copy_notice_secs = 5
            state_dir = "/tmp/ghcdn-state"
            include_builtin = false
        "#;
        let cfg: GhcdnConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.tooltip_threshold, 10);
        assert_eq!(cfg.copy_notice_secs, 5);
        assert_eq!(cfg.state_dir.as_deref(), Some(Path::new("/tmp/ghcdn-state")));
        assert!(!cfg.include_builtin);
    }

    #[test]
    fn load_or_init_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sub").join("config.toml");
        let cfg = load_or_init_at(&path).unwrap();
        assert_eq!(cfg, GhcdnConfig::default());
        assert!(path.exists());

        fs::write(&path, "copy_notice_secs = 9\n").unwrap();
        let cfg = load_or_init_at(&path).unwrap();
        assert_eq!(cfg.copy_notice_secs, 9);
    }

    #[test]
    fn load_or_init_rejects_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "tooltip_threshold = \"many\"").unwrap();
        assert!(load_or_init_at(&path).is_err());
    }
}
