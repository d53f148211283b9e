//! Output configuration

use serde::Deserialize;

/// How the command line renders results
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    /// Default rendering, overridable per invocation
    #[serde(default)]
    pub format: OutputFormat,
}

/// Rendering of classification results
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
