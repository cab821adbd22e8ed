/// A problem found by [`crate::validate::validate`].
///
/// Building a config never produces these; they only come out of the
/// explicit validation pass.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("selection lists no variables")]
    NoVariables,

    #[error("variable '{0}' is selected more than once")]
    DuplicateVariable(String),

    #[error("eval config '{eval}' has no metrics")]
    NoMetrics { eval: String },

    #[error("eval config '{eval}': probabilistic climatology is enabled but '{field}' is unset")]
    MissingProbabilisticBound { eval: String, field: &'static str },

    #[error("eval config '{eval}': probabilistic climatology start year {start} is after end year {end}")]
    InvertedYearRange { eval: String, start: i32, end: i32 },

    #[error("eval config '{eval}': probabilistic climatology hour interval must be positive, got {interval}")]
    InvalidHourInterval { eval: String, interval: i32 },

    #[error("eval config '{eval}' needs a climatology but paths.climatology is unset")]
    MissingClimatology { eval: String },

    #[error("panel {index}: metric '{metric}' is not defined in any eval config")]
    UnknownPanelMetric { index: usize, metric: String },

    #[error("panel {index}: region '{region}' is not defined in any eval config")]
    UnknownPanelRegion { index: usize, region: String },

    #[error("panel {index}: {axis} lower bound {lower} exceeds upper bound {upper}")]
    InvertedAxisLimits {
        index: usize,
        axis: &'static str,
        lower: f64,
        upper: f64,
    },
}
