//! Configuration for roster generation.
//!
//! This module provides the strongly-typed [`RosterGenerationConfig`] and a
//! [`ConfigLoader`] that reads per-station default profiles from YAML.
//!
//! # Example
//!
//! ```no_run
//! use roster_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/stations.yaml").unwrap();
//! let config = loader.station_defaults("geelong").unwrap();
//! println!("Van coverage: {}", config.min_van_coverage);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{RosterGenerationConfig, StationProfile, StationsConfig};
