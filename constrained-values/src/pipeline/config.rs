//! Pipeline configuration.

use crate::core::DEFAULT_SUCCESS_MESSAGE;
use serde::{Deserialize, Serialize};

/// Settings applied when a pipeline runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Details recorded when every stage passes.
    #[serde(default = "default_success_details")]
    pub success_details: String,
    /// Whether to emit a trace event per stage.
    #[serde(default = "default_log_stages")]
    pub log_stages: bool,
}

fn default_success_details() -> String {
    DEFAULT_SUCCESS_MESSAGE.to_string()
}

fn default_log_stages() -> bool {
    true
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            success_details: default_success_details(),
            log_stages: default_log_stages(),
        }
    }
}

impl PipelineConfig {
    /// Creates a configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the success details.
    #[must_use]
    pub fn with_success_details(mut self, details: impl Into<String>) -> Self {
        self.success_details = details.into();
        self
    }

    /// Enables or disables per-stage events.
    #[must_use]
    pub const fn with_log_stages(mut self, enabled: bool) -> Self {
        self.log_stages = enabled;
        self
    }
}
