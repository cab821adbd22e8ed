//! Evaluation requests and the closed sets of metrics, regions and derived
//! variables they reference.

pub mod config;
pub mod derived;
pub mod metric;
pub mod region;
