use serde::{Deserialize, Serialize};

fn default_dry_threshold_mm() -> f64 {
    0.25
}

fn default_min_p1() -> f64 {
    0.1
}

fn default_max_p1() -> f64 {
    0.85
}

/// Verification metric applied to a forecast/truth pair.
///
/// The set of metrics is closed; the evaluation engine matches on the variant
/// to pick the computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Metric {
    Rmse,
    Mse,
    /// MSE kept per grid point instead of area-averaged.
    SpatialMse,
    Bias,
    SpatialBias,
    /// Anomaly correlation coefficient.
    Acc,
    /// Stable equitable error in probability space, for precipitation.
    Seeps {
        #[serde(default = "default_dry_threshold_mm")]
        dry_threshold_mm: f64,
        #[serde(default = "default_min_p1")]
        min_p1: f64,
        #[serde(default = "default_max_p1")]
        max_p1: f64,
    },
    /// RMSE of the wind vector built from two component variables.
    WindVectorRmse {
        u_name: String,
        v_name: String,
        vector_name: String,
    },
    Crps,
    CrpsSpread,
    CrpsSkill,
    EnsembleMeanRmse,
    EnsembleStddev,
    EnsembleVariance,
    RankHistogram {
        #[serde(default)]
        num_bins: Option<u32>,
    },
}

impl Metric {
    pub fn seeps() -> Self {
        Metric::Seeps {
            dry_threshold_mm: default_dry_threshold_mm(),
            min_p1: default_min_p1(),
            max_p1: default_max_p1(),
        }
    }

    /// Metrics that score an ensemble rather than a single forecast.
    pub fn is_probabilistic(&self) -> bool {
        matches!(
            self,
            Metric::Crps
                | Metric::CrpsSpread
                | Metric::CrpsSkill
                | Metric::EnsembleMeanRmse
                | Metric::EnsembleStddev
                | Metric::EnsembleVariance
                | Metric::RankHistogram { .. }
        )
    }

    /// Metrics that cannot be computed without a climatology dataset.
    pub fn requires_climatology(&self) -> bool {
        matches!(self, Metric::Acc | Metric::Seeps { .. })
    }
}
