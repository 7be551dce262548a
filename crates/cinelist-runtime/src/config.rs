use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Poster shown when a movie has none
pub const PLACEHOLDER_POSTER_URL: &str =
    "https://via.placeholder.com/300x400/6b7280/ffffff?text=No+Image";

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. CINELIST_CONFIG environment variable (with tilde expansion)
/// 3. XDG config directory
/// 4. ~/.cinelist/config.toml (fallback for systems without XDG)
pub fn resolve_config_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("CINELIST_CONFIG") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("cinelist").join("config.toml"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".cinelist").join("config.toml"));
    }

    Err(Error::Config(
        "Could not determine config path: no HOME directory or XDG config directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

fn default_placeholder_poster_url() -> String {
    PLACEHOLDER_POSTER_URL.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_placeholder_poster_url")]
    pub placeholder_poster_url: String,

    /// Replaces the built-in seed catalog; read once at startup
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            placeholder_poster_url: default_placeholder_poster_url(),
            seed_path: None,
        }
    }
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Seed path relative to the config file's directory when not absolute
    pub fn resolved_seed_path(&self, config_path: &Path) -> Option<PathBuf> {
        let seed = self.seed_path.as_ref()?;
        if seed.is_absolute() {
            return Some(seed.clone());
        }
        Some(
            config_path
                .parent()
                .map(|dir| dir.join(seed))
                .unwrap_or_else(|| seed.clone()),
        )
    }
}
