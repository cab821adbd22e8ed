//! Opt-in consistency checks for a loaded experiment.
//!
//! Nothing in the config types calls this; consumers run it when they want
//! problems reported up front instead of deep inside an evaluation run.

use std::collections::HashSet;

use log::debug;

use crate::error::ConfigError;
use crate::eval::config::EvalConfig;
use crate::experiment::ExperimentConfig;

/// Check an experiment and report every problem found.
pub fn validate(config: &ExperimentConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    check_selection(config, &mut errors);
    for (name, eval) in &config.eval {
        check_eval(name, eval, config.data.paths.climatology.is_some(), &mut errors);
    }
    check_panels(config, &mut errors);

    debug!(
        "validated {} eval config(s), {} panel(s): {} problem(s)",
        config.eval.len(),
        config.panels.len(),
        errors.len()
    );

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_selection(config: &ExperimentConfig, errors: &mut Vec<ConfigError>) {
    let variables = &config.data.selection.variables;
    if variables.is_empty() {
        errors.push(ConfigError::NoVariables);
    }

    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    for v in variables {
        if !seen.insert(v.as_str()) && reported.insert(v.as_str()) {
            errors.push(ConfigError::DuplicateVariable(v.clone()));
        }
    }
}

fn check_eval(
    name: &str,
    eval: &EvalConfig,
    has_climatology: bool,
    errors: &mut Vec<ConfigError>,
) {
    if eval.metrics.is_empty() {
        errors.push(ConfigError::NoMetrics {
            eval: name.to_string(),
        });
    }

    if let Some(window) = eval.probabilistic_climatology() {
        let bounds = [
            ("probabilistic_climatology_start_year", window.start_year),
            ("probabilistic_climatology_end_year", window.end_year),
            ("probabilistic_climatology_hour_interval", window.hour_interval),
        ];
        for (field, value) in bounds {
            if value.is_none() {
                errors.push(ConfigError::MissingProbabilisticBound {
                    eval: name.to_string(),
                    field,
                });
            }
        }
        if let (Some(start), Some(end)) = (window.start_year, window.end_year) {
            if start > end {
                errors.push(ConfigError::InvertedYearRange {
                    eval: name.to_string(),
                    start,
                    end,
                });
            }
        }
        if let Some(interval) = window.hour_interval {
            if interval <= 0 {
                errors.push(ConfigError::InvalidHourInterval {
                    eval: name.to_string(),
                    interval,
                });
            }
        }
    }

    if eval.requires_climatology() && !has_climatology {
        errors.push(ConfigError::MissingClimatology {
            eval: name.to_string(),
        });
    }
}

fn check_panels(config: &ExperimentConfig, errors: &mut Vec<ConfigError>) {
    for (index, panel) in config.panels.iter().enumerate() {
        let metric_known = config
            .eval
            .values()
            .any(|e| e.metrics.contains_key(&panel.metric));
        if !metric_known {
            errors.push(ConfigError::UnknownPanelMetric {
                index,
                metric: panel.metric.clone(),
            });
        }

        if let Some(region) = &panel.region {
            let region_known = config.eval.values().any(|e| e.region(region).is_some());
            if !region_known {
                errors.push(ConfigError::UnknownPanelRegion {
                    index,
                    region: region.clone(),
                });
            }
        }

        for (axis, limits) in [("xlim", panel.xlim), ("ylim", panel.ylim)] {
            if let Some((lower, upper)) = limits {
                if lower > upper {
                    errors.push(ConfigError::InvertedAxisLimits {
                        index,
                        axis,
                        lower,
                        upper,
                    });
                }
            }
        }
    }
}
