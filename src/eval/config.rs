use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::derived::DerivedVariable;
use super::metric::Metric;
use super::region::Region;

fn default_true() -> bool {
    true
}

/// Year range and sampling step of a probabilistic climatology baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbabilisticClimatology {
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
    pub hour_interval: Option<i32>,
}

/// One evaluation request: which metrics, over which regions, against
/// which baselines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvalConfig {
    pub metrics: IndexMap<String, Metric>,
    #[serde(default)]
    pub regions: Option<IndexMap<String, Region>>,
    #[serde(default)]
    pub evaluate_persistence: bool,
    #[serde(default)]
    pub evaluate_climatology: bool,
    #[serde(default)]
    pub evaluate_probabilistic_climatology: bool,
    // The three bounds below only matter with
    // `evaluate_probabilistic_climatology` set.
    #[serde(default)]
    pub probabilistic_climatology_start_year: Option<i32>,
    #[serde(default)]
    pub probabilistic_climatology_end_year: Option<i32>,
    #[serde(default)]
    pub probabilistic_climatology_hour_interval: Option<i32>,
    /// Score against the analysis (forecast at lead time zero) rather than
    /// observations.
    #[serde(default)]
    pub against_analysis: bool,
    #[serde(default)]
    pub derived_variables: Vec<DerivedVariable>,
    /// Average scores over time before writing them out.
    #[serde(default = "default_true")]
    pub temporal_mean: bool,
}

impl EvalConfig {
    pub fn new<I, K>(metrics: I) -> Self
    where
        I: IntoIterator<Item = (K, Metric)>,
        K: Into<String>,
    {
        Self {
            metrics: metrics.into_iter().map(|(k, m)| (k.into(), m)).collect(),
            regions: None,
            evaluate_persistence: false,
            evaluate_climatology: false,
            evaluate_probabilistic_climatology: false,
            probabilistic_climatology_start_year: None,
            probabilistic_climatology_end_year: None,
            probabilistic_climatology_hour_interval: None,
            against_analysis: false,
            derived_variables: Vec::new(),
            temporal_mean: true,
        }
    }

    pub fn with_regions<I, K>(mut self, regions: I) -> Self
    where
        I: IntoIterator<Item = (K, Region)>,
        K: Into<String>,
    {
        self.regions = Some(regions.into_iter().map(|(k, r)| (k.into(), r)).collect());
        self
    }

    pub fn with_persistence(mut self, enabled: bool) -> Self {
        self.evaluate_persistence = enabled;
        self
    }

    pub fn with_climatology(mut self, enabled: bool) -> Self {
        self.evaluate_climatology = enabled;
        self
    }

    /// Turn on the probabilistic climatology baseline with its bounds.
    pub fn with_probabilistic_climatology(
        mut self,
        start_year: i32,
        end_year: i32,
        hour_interval: i32,
    ) -> Self {
        self.evaluate_probabilistic_climatology = true;
        self.probabilistic_climatology_start_year = Some(start_year);
        self.probabilistic_climatology_end_year = Some(end_year);
        self.probabilistic_climatology_hour_interval = Some(hour_interval);
        self
    }

    pub fn with_against_analysis(mut self, enabled: bool) -> Self {
        self.against_analysis = enabled;
        self
    }

    pub fn with_derived_variables(mut self, derived: Vec<DerivedVariable>) -> Self {
        self.derived_variables = derived;
        self
    }

    pub fn with_temporal_mean(mut self, enabled: bool) -> Self {
        self.temporal_mean = enabled;
        self
    }

    /// Probabilistic climatology settings, present only when that baseline
    /// is switched on. Bounds are returned as supplied, never filled in.
    pub fn probabilistic_climatology(&self) -> Option<ProbabilisticClimatology> {
        self.evaluate_probabilistic_climatology
            .then_some(ProbabilisticClimatology {
                start_year: self.probabilistic_climatology_start_year,
                end_year: self.probabilistic_climatology_end_year,
                hour_interval: self.probabilistic_climatology_hour_interval,
            })
    }

    /// Whether running this evaluation needs a climatology dataset.
    ///
    /// The probabilistic climatology baseline is built from the observations
    /// over its own year window, so it does not count.
    pub fn requires_climatology(&self) -> bool {
        self.evaluate_climatology || self.metrics.values().any(Metric::requires_climatology)
    }

    /// Whether any metric scores an ensemble.
    pub fn is_probabilistic(&self) -> bool {
        self.metrics.values().any(Metric::is_probabilistic)
    }

    pub fn region(&self, name: &str) -> Option<&Region> {
        self.regions.as_ref().and_then(|regions| regions.get(name))
    }
}
