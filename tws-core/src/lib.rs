//! Core types and data loading for the TWS district dashboard.
//!
//! This crate provides:
//! - `district`: the district-name normalization shared by the dataset and lookups
//! - `series` / `dataset` / `boundary`: the two loaded resources
//! - `loader`: the joined two-request load producing a `LoadState`
//! - `chart`: the chart view model derived from the current selection
//! - `config`: endpoints plus map and chart settings passed to the JS renderers

pub mod boundary;
pub mod chart;
pub mod config;
pub mod dataset;
pub mod district;
pub mod error;
pub mod loader;
pub mod series;

pub use boundary::BoundaryCollection;
pub use dataset::TwsDataset;
pub use error::{LoadError, Result};
pub use loader::{DashboardData, LoadState};
pub use series::WaterSeries;
