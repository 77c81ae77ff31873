use serde::Deserialize;
use std::path::PathBuf;

pub const REPORT_DIR_ENV: &str = "EMBODIED_REPORT_DIR";
pub const DEFAULT_MAX_VERSIONS: u32 = 50;

/// Where and how CSV reports are written.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub folder_location: Option<PathBuf>,
    /// Highest `_<n>` suffix tried before the last version is overwritten
    pub max_versions: u32,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            folder_location: None,
            max_versions: DEFAULT_MAX_VERSIONS,
        }
    }
}

impl ExportConfig {
    pub fn new(folder_location: impl Into<PathBuf>) -> Self {
        Self {
            folder_location: Some(folder_location.into()),
            ..Default::default()
        }
    }

    /// Reads the folder location from `EMBODIED_REPORT_DIR`
    pub fn from_env() -> Self {
        Self {
            folder_location: std::env::var_os(REPORT_DIR_ENV)
                .filter(|dir| !dir.is_empty())
                .map(PathBuf::from),
            ..Default::default()
        }
    }
}
