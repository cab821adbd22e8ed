use serde::{Deserialize, Serialize};

/// One subplot: which metric/variable to draw and how to label it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelConfig {
    pub metric: String,
    pub variable: String,
    #[serde(default)]
    pub level: Option<i64>,
    /// Name of a region in an eval config. Not checked here.
    #[serde(default)]
    pub region: Option<String>,
    /// Series to plot the others relative to; interpreted by the plotter.
    #[serde(default)]
    pub relative: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub xlabel: Option<String>,
    #[serde(default)]
    pub ylabel: Option<String>,
    #[serde(default)]
    pub ylim: Option<(f64, f64)>,
    #[serde(default)]
    pub xlim: Option<(f64, f64)>,
}

impl PanelConfig {
    pub fn new(metric: impl Into<String>, variable: impl Into<String>) -> Self {
        Self {
            metric: metric.into(),
            variable: variable.into(),
            level: None,
            region: None,
            relative: None,
            title: None,
            xlabel: None,
            ylabel: None,
            ylim: None,
            xlim: None,
        }
    }

    pub fn with_level(mut self, level: i64) -> Self {
        self.level = Some(level);
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_relative(mut self, relative: impl Into<String>) -> Self {
        self.relative = Some(relative.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_axis_labels(mut self, xlabel: impl Into<String>, ylabel: impl Into<String>) -> Self {
        self.xlabel = Some(xlabel.into());
        self.ylabel = Some(ylabel.into());
        self
    }

    pub fn with_ylim(mut self, lower: f64, upper: f64) -> Self {
        self.ylim = Some((lower, upper));
        self
    }

    pub fn with_xlim(mut self, lower: f64, upper: f64) -> Self {
        self.xlim = Some((lower, upper));
        self
    }

    /// Explicit title, or `"<variable> <level> <metric>"`.
    pub fn display_title(&self) -> String {
        if let Some(title) = &self.title {
            return title.clone();
        }
        match self.level {
            Some(level) => format!("{} {level} {}", self.variable, self.metric),
            None => format!("{} {}", self.variable, self.metric),
        }
    }
}
