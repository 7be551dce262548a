use cinelist_runtime::Config;
use std::path::Path;

use crate::presentation::view_models::ConfigViewModel;

pub fn present_config(config: &Config, path: &Path) -> ConfigViewModel {
    ConfigViewModel {
        path: path.display().to_string(),
        exists: path.exists(),
        placeholder_poster_url: config.placeholder_poster_url.clone(),
        seed_path: config
            .resolved_seed_path(path)
            .map(|p| p.display().to_string()),
    }
}
