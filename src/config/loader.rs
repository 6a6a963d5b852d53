//! Station configuration loading.
//!
//! This module provides the [`ConfigLoader`] type for loading per-station
//! roster-generation defaults from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{RosterGenerationConfig, StationsConfig};

/// Loads and provides access to station roster profiles.
///
/// The stations file maps station codes to partial generation-config
/// overrides:
///
/// ```text
/// stations:
///   geelong:
///     min_van_coverage: 2
///   corio:
///     min_van_coverage: 1
/// ```
///
/// # Example
///
/// ```no_run
/// use roster_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/stations.yaml").unwrap();
/// assert!(loader.station_defaults("geelong").is_some());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    stations: StationsConfig,
}

impl ConfigLoader {
    /// Loads station profiles from the specified YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigNotFound`] when the file is missing and
    /// [`EngineError::ConfigParseError`] when it contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let stations: StationsConfig =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        Ok(Self { stations })
    }

    /// Returns the full default generation config for a station, or `None`
    /// when the station has no profile.
    pub fn station_defaults(&self, station: &str) -> Option<RosterGenerationConfig> {
        self.stations
            .stations
            .get(station)
            .map(|profile| profile.resolve(station))
    }

    /// Returns the known station codes, sorted.
    pub fn station_codes(&self) -> Vec<String> {
        let mut codes: Vec<String> = self.stations.stations.keys().cloned().collect();
        codes.sort();
        codes
    }
}
