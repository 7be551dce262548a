use anyhow::Result;
use cinelist_runtime::{Catalog, Config, resolve_config_path};
use std::path::{Path, PathBuf};

use crate::presentation::view_models::DisplayOptions;
use crate::types::OutputFormat;

pub struct ExecutionContext {
    config_path: PathBuf,
    config: Config,
    pub format: OutputFormat,
}

impl ExecutionContext {
    pub fn load(explicit_config: Option<&str>, format: OutputFormat) -> Result<Self> {
        let config_path = resolve_config_path(explicit_config)?;
        let config = Config::load_from(&config_path)?;
        tracing::debug!(path = %config_path.display(), "configuration loaded");

        Ok(Self {
            config_path,
            config,
            format,
        })
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Fresh catalog for this process, seeded per the configuration
    pub fn catalog(&self) -> Result<Catalog> {
        let catalog = Catalog::from_config(&self.config, &self.config_path)?;
        tracing::info!(movies = catalog.movies().len(), "catalog seeded");
        Ok(catalog)
    }

    pub fn json_mode(&self) -> bool {
        self.format == OutputFormat::Json
    }

    pub fn display_options(&self) -> DisplayOptions {
        use is_terminal::IsTerminal;

        DisplayOptions {
            enable_color: std::io::stdout().is_terminal(),
        }
    }

    pub fn placeholder_poster_url(&self) -> &str {
        &self.config.placeholder_poster_url
    }
}
