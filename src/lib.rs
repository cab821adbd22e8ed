//! Typed configuration for weather-forecast evaluation.
//!
//! The records here describe *what* to evaluate and plot; loading data,
//! computing scores and drawing figures happen elsewhere. Building a config
//! never fails and never checks anything. Call [`validate::validate`] to get
//! consistency problems reported.

pub mod color;
pub mod data;
pub mod error;
pub mod eval;
pub mod experiment;
pub mod validate;
pub mod viz;

pub use data::config::DataConfig;
pub use data::paths::Paths;
pub use data::selection::{AxisSlice, Selection};
pub use error::ConfigError;
pub use eval::config::{EvalConfig, ProbabilisticClimatology};
pub use eval::derived::DerivedVariable;
pub use eval::metric::Metric;
pub use eval::region::Region;
pub use experiment::ExperimentConfig;
pub use viz::config::VizConfig;
pub use viz::panel::PanelConfig;
