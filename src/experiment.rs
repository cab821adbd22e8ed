use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::data::config::DataConfig;
use crate::eval::config::EvalConfig;
use crate::viz::config::VizConfig;
use crate::viz::panel::PanelConfig;

// ---------------------------------------------------------------------------
// ExperimentConfig – everything one config file describes
// ---------------------------------------------------------------------------

/// A full experiment: one data source, any number of named evaluations,
/// and optionally how to plot the results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    pub data: DataConfig,
    /// Evaluation name → request. The name becomes part of the output file.
    pub eval: IndexMap<String, EvalConfig>,
    #[serde(default)]
    pub viz: Option<VizConfig>,
    #[serde(default)]
    pub panels: Vec<PanelConfig>,
}

impl ExperimentConfig {
    pub fn new(data: DataConfig) -> Self {
        Self {
            data,
            eval: IndexMap::new(),
            viz: None,
            panels: Vec::new(),
        }
    }

    pub fn with_eval(mut self, name: impl Into<String>, eval: EvalConfig) -> Self {
        self.eval.insert(name.into(), eval);
        self
    }

    pub fn with_viz(mut self, viz: VizConfig) -> Self {
        self.viz = Some(viz);
        self
    }

    pub fn with_panel(mut self, panel: PanelConfig) -> Self {
        self.panels.push(panel);
        self
    }

    /// Every variable that has to be read from disk: the selection plus
    /// inputs of derived variables, first occurrence order, no repeats.
    pub fn required_variables(&self) -> Vec<&str> {
        let selected = self.data.selection.variables.iter().map(String::as_str);
        let derived_inputs = self
            .eval
            .values()
            .flat_map(|e| e.derived_variables.iter())
            .flat_map(|d| d.base_variables());

        let mut out: Vec<&str> = Vec::new();
        for name in selected.chain(derived_inputs) {
            if !out.contains(&name) {
                out.push(name);
            }
        }
        out
    }

    /// One human-readable line per evaluation.
    pub fn summary(&self) -> Vec<String> {
        self.eval
            .iter()
            .map(|(name, e)| {
                let metrics: Vec<&str> = e.metrics.keys().map(String::as_str).collect();
                let regions = e.regions.as_ref().map_or(0, |r| r.len());
                let mut baselines = Vec::new();
                if e.evaluate_persistence {
                    baselines.push("persistence");
                }
                if e.evaluate_climatology {
                    baselines.push("climatology");
                }
                if e.evaluate_probabilistic_climatology {
                    baselines.push("probabilistic-climatology");
                }
                let output = self.data.paths.output_path(name, "nc");
                format!(
                    "{name}: metrics=[{}] regions={regions} baselines=[{}] -> {}",
                    metrics.join(", "),
                    baselines.join(", "),
                    output.display()
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::paths::Paths;
    use crate::data::selection::{AxisSlice, Selection};
    use crate::eval::derived::DerivedVariable;
    use crate::eval::metric::Metric;

    fn data() -> DataConfig {
        DataConfig::new(
            Selection::new(
                ["u_component_of_wind", "geopotential"],
                AxisSlice::full(),
            ),
            Paths::new("fc.zarr", "obs.zarr", "/out").with_output_file_prefix("exp_"),
        )
    }

    #[test]
    fn test_required_variables_dedup() {
        let eval = EvalConfig::new([("rmse", Metric::Rmse)]).with_derived_variables(vec![
            DerivedVariable::WindSpeed {
                u_name: "u_component_of_wind".into(),
                v_name: "v_component_of_wind".into(),
            },
        ]);
        let experiment = ExperimentConfig::new(data()).with_eval("deterministic", eval);

        assert_eq!(
            experiment.required_variables(),
            vec![
                "u_component_of_wind",
                "geopotential",
                "v_component_of_wind"
            ]
        );
    }

    #[test]
    fn test_summary() {
        let experiment = ExperimentConfig::new(data()).with_eval(
            "deterministic",
            EvalConfig::new([("rmse", Metric::Rmse), ("bias", Metric::Bias)]).with_persistence(true),
        );
        let lines = experiment.summary();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("deterministic: metrics=[rmse, bias] regions=0"));
        assert!(lines[0].contains("baselines=[persistence]"));
        assert!(lines[0].ends_with("exp_deterministic.nc"));
    }
}
