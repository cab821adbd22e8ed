use std::path::Path;

use anyhow::{bail, Context, Result};
use log::{debug, info};

use crate::experiment::ExperimentConfig;

// ---------------------------------------------------------------------------
// Format dispatch
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Yaml,
}

fn format_for(path: &Path) -> Result<Format> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "json" => Ok(Format::Json),
        "yaml" | "yml" => Ok(Format::Yaml),
        other => bail!("Unsupported config file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load an experiment config from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.json`
/// * `.yaml` / `.yml`
///
/// Omitted optional fields take their declared defaults.
pub fn load_file(path: &Path) -> Result<ExperimentConfig> {
    let format = format_for(path)?;
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    let config = parse_str(&text, format)
        .with_context(|| format!("parsing config file {}", path.display()))?;

    info!(
        "loaded {} eval config(s) from {}",
        config.eval.len(),
        path.display()
    );
    Ok(config)
}

/// Write an experiment config, picking the format from the extension.
pub fn save_file(config: &ExperimentConfig, path: &Path) -> Result<()> {
    let text = match format_for(path)? {
        Format::Json => serde_json::to_string_pretty(config).context("serializing JSON")?,
        Format::Yaml => serde_yaml::to_string(config).context("serializing YAML")?,
    };
    std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
    debug!("wrote config to {}", path.display());
    Ok(())
}

/// Parse a JSON document.
pub fn from_json_str(text: &str) -> Result<ExperimentConfig> {
    parse_str(text, Format::Json)
}

/// Parse a YAML document.
pub fn from_yaml_str(text: &str) -> Result<ExperimentConfig> {
    parse_str(text, Format::Yaml)
}

fn parse_str(text: &str, format: Format) -> Result<ExperimentConfig> {
    let config: ExperimentConfig = match format {
        Format::Json => serde_json::from_str(text).context("parsing JSON")?,
        Format::Yaml => serde_yaml::from_str(text).context("parsing YAML")?,
    };
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL_JSON: &str = r#"{
        "data": {
            "selection": {
                "variables": ["geopotential"],
                "time_slice": {"start": "2020-01-01", "stop": "2021-01-01"}
            },
            "paths": {"forecast": "fc.zarr", "obs": "obs.zarr", "output_dir": "out"}
        },
        "eval": {
            "deterministic": {"metrics": {"rmse": {"type": "rmse"}}}
        }
    }"#;

    #[test]
    fn test_minimal_json_gets_defaults() {
        let config = from_json_str(MINIMAL_JSON).unwrap();
        let sel = &config.data.selection;
        assert!(sel.lat_slice.is_unrestricted());
        assert!(sel.lon_slice.is_unrestricted());
        assert_eq!(sel.levels, None);
        assert_eq!(config.data.paths.output_file_prefix, "");
        assert_eq!(config.data.rename_variables, None);

        let eval = &config.eval["deterministic"];
        assert!(eval.temporal_mean);
        assert!(eval.derived_variables.is_empty());
        assert_eq!(eval.regions, None);
        assert_eq!(config.viz, None);
        assert!(config.panels.is_empty());
    }

    #[test]
    fn test_yaml() {
        let yaml = r#"
data:
  selection:
    variables: [2m_temperature]
    time_slice: {start: "2020-01-01"}
    levels: [500, 850]
    lat_slice: {start: -30.0, stop: 30.0}
  paths:
    forecast: fc.zarr
    obs: obs.zarr
    output_dir: out
    climatology: clim.zarr
  pressure_level_suffixes: true
eval:
  regional:
    metrics:
      acc: {type: acc}
    regions:
      tropics: {type: slice, lat_slice: {start: -20.0, stop: 20.0}}
    temporal_mean: false
"#;
        let config = from_yaml_str(yaml).unwrap();
        assert_eq!(config.data.selection.levels, Some(vec![500, 850]));
        assert_eq!(config.data.selection.time_slice.stop, None);
        assert!(config.data.pressure_level_suffixes);
        assert!(!config.eval["regional"].temporal_mean);
        assert!(config.eval["regional"].region("tropics").is_some());
    }

    #[test]
    fn test_missing_required_field() {
        let err = from_json_str(r#"{"data": {}, "eval": {}}"#);
        assert!(err.is_err());
    }

    #[test]
    fn test_unsupported_extension() {
        let err = format_for(Path::new("config.toml")).unwrap_err();
        assert!(err.to_string().contains(".toml"));
        assert_eq!(format_for(Path::new("a.YML")).unwrap(), Format::Yaml);
    }
}
