/// Data layer: what to read, where from, and how to load it.
///
/// Architecture:
/// ```text
///  experiment.json / .yaml
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → ExperimentConfig
///   └──────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ DataConfig  │  Selection + Paths + naming flags
///   └────────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ selection  │  variables, time/lat/lon slices, levels
///   └───────────┘
/// ```

pub mod config;
pub mod loader;
pub mod paths;
pub mod selection;
