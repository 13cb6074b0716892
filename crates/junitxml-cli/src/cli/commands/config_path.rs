use junitxml_core::config::{load_config, ReportConfig, DEFAULT_CONFIG_PATH};
use std::path::Path;

/// An explicit path must exist; the default path is optional.
pub fn resolve_config(explicit: Option<&Path>) -> anyhow::Result<ReportConfig> {
    match explicit {
        Some(path) => Ok(load_config(path)?),
        None => {
            let default = Path::new(DEFAULT_CONFIG_PATH);
            if default.exists() {
                tracing::debug!(path = %default.display(), "using default config");
                Ok(load_config(default)?)
            } else {
                Ok(ReportConfig::default())
            }
        }
    }
}
