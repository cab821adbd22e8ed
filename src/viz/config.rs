use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::color::palette_color;

fn default_true() -> bool {
    true
}

/// Line style used when a series has none configured.
pub const DEFAULT_LINESTYLE: &str = "-";

/// How to plot a set of evaluation results.
///
/// Every map keeps insertion order, which the plotting layer uses for
/// legend order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VizConfig {
    /// Series name → results file location.
    pub results: IndexMap<String, String>,
    /// Passed through untouched to the figure writer.
    #[serde(default)]
    pub save_kwargs: IndexMap<String, JsonValue>,
    #[serde(default)]
    pub colors: Option<IndexMap<String, String>>,
    /// Panel grid as `(rows, columns)`.
    #[serde(default)]
    pub layout: Option<(u32, u32)>,
    #[serde(default)]
    pub figsize: Option<(u32, u32)>,
    #[serde(default = "default_true")]
    pub tight_layout: bool,
    #[serde(default)]
    pub labels: Option<IndexMap<String, String>>,
    #[serde(default)]
    pub linestyles: Option<IndexMap<String, String>>,
    #[serde(default)]
    pub marker: Option<String>,
    #[serde(default)]
    pub markersize: Option<u32>,
}

impl VizConfig {
    pub fn new<I, K, V>(results: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            results: results
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            save_kwargs: IndexMap::new(),
            colors: None,
            layout: None,
            figsize: None,
            tight_layout: true,
            labels: None,
            linestyles: None,
            marker: None,
            markersize: None,
        }
    }

    pub fn with_save_kwarg(mut self, key: impl Into<String>, value: JsonValue) -> Self {
        self.save_kwargs.insert(key.into(), value);
        self
    }

    pub fn with_color(mut self, series: impl Into<String>, color: impl Into<String>) -> Self {
        self.colors
            .get_or_insert_with(IndexMap::new)
            .insert(series.into(), color.into());
        self
    }

    pub fn with_label(mut self, series: impl Into<String>, label: impl Into<String>) -> Self {
        self.labels
            .get_or_insert_with(IndexMap::new)
            .insert(series.into(), label.into());
        self
    }

    pub fn with_linestyle(mut self, series: impl Into<String>, style: impl Into<String>) -> Self {
        self.linestyles
            .get_or_insert_with(IndexMap::new)
            .insert(series.into(), style.into());
        self
    }

    pub fn with_layout(mut self, rows: u32, cols: u32) -> Self {
        self.layout = Some((rows, cols));
        self
    }

    pub fn with_figsize(mut self, width: u32, height: u32) -> Self {
        self.figsize = Some((width, height));
        self
    }

    pub fn with_tight_layout(mut self, enabled: bool) -> Self {
        self.tight_layout = enabled;
        self
    }

    pub fn with_marker(mut self, marker: impl Into<String>, size: Option<u32>) -> Self {
        self.marker = Some(marker.into());
        self.markersize = size;
        self
    }

    /// Legend label for a series: the configured label, else its name.
    pub fn label_for<'a>(&'a self, series: &'a str) -> &'a str {
        self.labels
            .as_ref()
            .and_then(|labels| labels.get(series))
            .map_or(series, String::as_str)
    }

    pub fn linestyle_for(&self, series: &str) -> &str {
        self.linestyles
            .as_ref()
            .and_then(|styles| styles.get(series))
            .map_or(DEFAULT_LINESTYLE, String::as_str)
    }

    /// Colour for a series.
    ///
    /// Explicit colours win; otherwise the series gets its slot in a hue
    /// palette spread over `results`, so the choice is stable for a given
    /// results map. Unknown series fall back to the slot after the last one.
    pub fn color_for(&self, series: &str) -> String {
        if let Some(color) = self.colors.as_ref().and_then(|c| c.get(series)) {
            return color.clone();
        }
        let n = self.results.len() + usize::from(!self.results.contains_key(series));
        let index = self.results.get_index_of(series).unwrap_or(n - 1);
        palette_color(index, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::generate_palette;
    use serde_json::json;

    fn two_models() -> VizConfig {
        VizConfig::new([("hres", "hres.nc"), ("graphcast", "graphcast.nc")])
    }

    #[test]
    fn test_defaults() {
        let viz = two_models();
        assert!(viz.save_kwargs.is_empty());
        assert!(viz.tight_layout);
        assert_eq!(viz.colors, None);
        assert_eq!(viz.labels, None);
        assert_eq!(viz.linestyles, None);
        assert_eq!(viz.layout, None);
        assert_eq!(viz.figsize, None);
        assert_eq!(viz.marker, None);
        assert_eq!(viz.markersize, None);
    }

    #[test]
    fn test_save_kwargs_are_independent() {
        let mut a = two_models();
        let b = two_models();
        a.save_kwargs.insert("dpi".into(), json!(300));
        assert!(b.save_kwargs.is_empty());
    }

    #[test]
    fn test_save_kwargs_passthrough() {
        let viz = two_models()
            .with_save_kwarg("dpi", json!(150))
            .with_save_kwarg("bbox_inches", json!("tight"));
        assert_eq!(viz.save_kwargs["dpi"], json!(150));
        assert_eq!(viz.save_kwargs["bbox_inches"], json!("tight"));
        let keys: Vec<&str> = viz.save_kwargs.keys().map(String::as_str).collect();
        assert_eq!(keys, ["dpi", "bbox_inches"]);
    }

    #[test]
    fn test_label_and_linestyle_fallbacks() {
        let viz = two_models()
            .with_label("hres", "IFS HRES")
            .with_linestyle("graphcast", "--");
        assert_eq!(viz.label_for("hres"), "IFS HRES");
        assert_eq!(viz.label_for("graphcast"), "graphcast");
        assert_eq!(viz.linestyle_for("graphcast"), "--");
        assert_eq!(viz.linestyle_for("hres"), DEFAULT_LINESTYLE);
    }

    #[test]
    fn test_color_for() {
        let viz = two_models().with_color("hres", "black");
        assert_eq!(viz.color_for("hres"), "black");

        let palette = generate_palette(2);
        assert_eq!(viz.color_for("graphcast"), palette[1]);
        assert_eq!(two_models().color_for("hres"), palette[0]);
    }

    #[test]
    fn test_color_for_unknown_series() {
        let viz = two_models();
        assert_eq!(viz.color_for("pangu"), generate_palette(3)[2]);
    }
}
