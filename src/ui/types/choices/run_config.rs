use crate::ui::types::choices::DemoChoice;
use anyhow::{Context, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use strum_macros::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema, Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum OutputFormat {
    /// Narrated derivation trace
    #[default]
    Text,
    /// Structured evaluation outcome
    Json,
}

/// What the binary runs, read from a JSON file or assembled by the wizard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RunConfig {
    pub demo: DemoChoice,

    /// Replaces the demonstration's own query when present.
    #[serde(default)]
    pub query: Option<Vec<f64>>,

    #[serde(default)]
    pub format: OutputFormat,
}

impl RunConfig {
    pub fn load(path: &Path) -> Result<RunConfig> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("invalid config {}", path.display()))
    }
}
