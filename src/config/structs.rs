//! Configuration struct definitions.

use crate::fmt::ModeSetting;
use serde::Deserialize;

/// General configuration.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GeneralConfig {
    /// Project id used in trace paths. The project environment variable wins over this.
    pub project_id: Option<String>,
    /// `auto`, `structured` (alias `json`) or `text`.
    pub mode: ModeSetting,
    /// Resolve and attach the call site to every record.
    pub source_location: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            project_id: None,
            mode: ModeSetting::Auto,
            source_location: true,
        }
    }
}

/// Names of the environment variables consulted at resolve time.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EnvConfig {
    /// Declares the project id.
    pub project_var: String,
    /// Presence means "running on the platform", which turns on structured output in `auto` mode.
    pub platform_var: String,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            project_var: "GOOGLE_CLOUD_PROJECT".to_string(),
            platform_var: "GAE_DEPLOYMENT_ID".to_string(),
        }
    }
}
