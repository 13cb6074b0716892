//! Reads a result tree produced elsewhere (YAML or JSON) and validates it.

use crate::errors::ReportError;
use crate::model::RunResult;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeFormat {
    Yaml,
    Json,
}

impl TreeFormat {
    /// `.json` selects JSON; anything else is read as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => TreeFormat::Json,
            _ => TreeFormat::Yaml,
        }
    }
}

pub fn parse_result(raw: &str, format: TreeFormat, path: &Path) -> Result<RunResult, ReportError> {
    let parsed = match format {
        TreeFormat::Json => serde_json::from_str::<RunResult>(raw).map_err(|e| e.to_string()),
        TreeFormat::Yaml => serde_yaml::from_str::<RunResult>(raw).map_err(|e| e.to_string()),
    };
    let result = parsed.map_err(|message| ReportError::Parse {
        path: path.to_path_buf(),
        message,
    })?;
    result.validate()?;
    Ok(result)
}

pub fn load_result(path: &Path) -> Result<RunResult, ReportError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let result = parse_result(&raw, TreeFormat::from_path(path), path)?;
    tracing::debug!(
        path = %path.display(),
        processes = result.process_count(),
        events = result.event_count(),
        "loaded result tree"
    );
    Ok(result)
}
