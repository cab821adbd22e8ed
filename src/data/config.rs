use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::paths::Paths;
use super::selection::Selection;

/// Everything needed to locate and subset the input datasets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataConfig {
    pub selection: Selection,
    pub paths: Paths,
    /// Index forecasts by initialization time instead of valid time.
    #[serde(default)]
    pub by_init: bool,
    /// Source name → target name. `None` means no renaming at all.
    #[serde(default)]
    pub rename_variables: Option<IndexMap<String, String>>,
    /// Variables carry their pressure level as a `_<level>` suffix.
    #[serde(default)]
    pub pressure_level_suffixes: bool,
}

impl DataConfig {
    pub fn new(selection: Selection, paths: Paths) -> Self {
        Self {
            selection,
            paths,
            by_init: false,
            rename_variables: None,
            pressure_level_suffixes: false,
        }
    }

    pub fn with_by_init(mut self, by_init: bool) -> Self {
        self.by_init = by_init;
        self
    }

    pub fn with_rename_variables<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.rename_variables = Some(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }

    pub fn with_pressure_level_suffixes(mut self, enabled: bool) -> Self {
        self.pressure_level_suffixes = enabled;
        self
    }

    /// Name a source variable ends up with after renaming.
    pub fn renamed<'a>(&'a self, name: &'a str) -> &'a str {
        self.rename_variables
            .as_ref()
            .and_then(|map| map.get(name))
            .map_or(name, String::as_str)
    }

    /// Split `geopotential_500` into `("geopotential", Some(500))`.
    ///
    /// Only applies when `pressure_level_suffixes` is set; names without a
    /// numeric suffix come back unchanged.
    pub fn split_level_suffix<'a>(&self, name: &'a str) -> (&'a str, Option<i64>) {
        if !self.pressure_level_suffixes {
            return (name, None);
        }
        match name.rsplit_once('_') {
            Some((base, suffix))
                if !base.is_empty()
                    && !suffix.is_empty()
                    && suffix.bytes().all(|b| b.is_ascii_digit()) =>
            {
                match suffix.parse::<i64>() {
                    Ok(level) => (base, Some(level)),
                    Err(_) => (name, None),
                }
            }
            _ => (name, None),
        }
    }
}
