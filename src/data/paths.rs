use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where to load forecasts, observations and climatology from, and where to
/// write results.
///
/// Locations are opaque strings (local paths or object-store URLs); nothing
/// here checks that they exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paths {
    pub forecast: String,
    pub obs: String,
    pub output_dir: String,
    #[serde(default)]
    pub output_file_prefix: String,
    #[serde(default)]
    pub climatology: Option<String>,
}

impl Paths {
    pub fn new(
        forecast: impl Into<String>,
        obs: impl Into<String>,
        output_dir: impl Into<String>,
    ) -> Self {
        Self {
            forecast: forecast.into(),
            obs: obs.into(),
            output_dir: output_dir.into(),
            output_file_prefix: String::new(),
            climatology: None,
        }
    }

    pub fn with_output_file_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.output_file_prefix = prefix.into();
        self
    }

    pub fn with_climatology(mut self, climatology: impl Into<String>) -> Self {
        self.climatology = Some(climatology.into());
        self
    }

    /// `output_dir/{prefix}{eval_name}.{extension}`
    pub fn output_path(&self, eval_name: &str, extension: &str) -> PathBuf {
        let file_name = format!("{}{eval_name}.{extension}", self.output_file_prefix);
        PathBuf::from(&self.output_dir).join(file_name)
    }
}
