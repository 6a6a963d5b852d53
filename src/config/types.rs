//! Configuration types for roster generation.
//!
//! This module contains the strongly-typed configuration structures used to
//! drive the allocation engine, plus the YAML station-profile structures.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{EngineError, EngineResult};

/// Configuration for one roster generation run.
///
/// Every field other than `station` has a serde default, so callers may
/// supply only the fields they want to override.
///
/// The three `enable_*`/`*_priority` flags are accepted and round-tripped
/// for caller compatibility but do not alter the allocation algorithm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterGenerationConfig {
    /// The station to roster.
    pub station: String,
    /// Length of the roster period in weeks.
    #[serde(default = "default_period_weeks")]
    pub period_weeks: i32,
    /// Van crews required per day.
    #[serde(default = "default_van_coverage")]
    pub min_van_coverage: i32,
    /// Watchhouse keepers required per day.
    #[serde(default = "default_watchhouse_coverage")]
    pub min_watchhouse_coverage: i32,
    /// Maximum consecutive night shifts before an employee is excluded from
    /// further nights.
    #[serde(default = "default_max_consecutive_nights")]
    pub max_consecutive_nights: i32,
    /// Advisory rest-day target per fortnight. Reported on, not enforced as
    /// a hard allocation constraint.
    #[serde(default = "default_min_rest_days")]
    pub min_rest_days_per_fortnight: i32,
    /// Maximum hours an employee may accumulate during the generation run.
    #[serde(default = "default_max_fortnight_hours")]
    pub max_fortnight_hours: Decimal,
    /// Accepted for compatibility; no effect on allocation.
    #[serde(default = "default_flag")]
    pub enable_fatigue_balancing: bool,
    /// Accepted for compatibility; no effect on allocation.
    #[serde(default = "default_flag")]
    pub enable_preference_weighting: bool,
    /// Accepted for compatibility; no effect on allocation.
    #[serde(default = "default_flag")]
    pub corro_rotation_priority: bool,
}

fn default_period_weeks() -> i32 {
    2
}

fn default_van_coverage() -> i32 {
    2
}

fn default_watchhouse_coverage() -> i32 {
    1
}

fn default_max_consecutive_nights() -> i32 {
    7
}

fn default_min_rest_days() -> i32 {
    4
}

fn default_max_fortnight_hours() -> Decimal {
    Decimal::new(76, 0)
}

fn default_flag() -> bool {
    true
}

impl RosterGenerationConfig {
    /// Creates a config with default settings for the given station.
    pub fn for_station(station: impl Into<String>) -> Self {
        Self {
            station: station.into(),
            period_weeks: default_period_weeks(),
            min_van_coverage: default_van_coverage(),
            min_watchhouse_coverage: default_watchhouse_coverage(),
            max_consecutive_nights: default_max_consecutive_nights(),
            min_rest_days_per_fortnight: default_min_rest_days(),
            max_fortnight_hours: default_max_fortnight_hours(),
            enable_fatigue_balancing: default_flag(),
            enable_preference_weighting: default_flag(),
            corro_rotation_priority: default_flag(),
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`] for negative coverage counts,
    /// a non-positive period length, a non-positive hour cap, or a negative
    /// consecutive-night cap.
    pub fn validate(&self) -> EngineResult<()> {
        if self.station.trim().is_empty() {
            return Err(EngineError::InvalidConfig {
                field: "station".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.period_weeks < 1 {
            return Err(EngineError::InvalidConfig {
                field: "period_weeks".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.min_van_coverage < 0 {
            return Err(EngineError::InvalidConfig {
                field: "min_van_coverage".to_string(),
                message: "must not be negative".to_string(),
            });
        }
        if self.min_watchhouse_coverage < 0 {
            return Err(EngineError::InvalidConfig {
                field: "min_watchhouse_coverage".to_string(),
                message: "must not be negative".to_string(),
            });
        }
        if self.max_consecutive_nights < 0 {
            return Err(EngineError::InvalidConfig {
                field: "max_consecutive_nights".to_string(),
                message: "must not be negative".to_string(),
            });
        }
        if self.min_rest_days_per_fortnight < 0 {
            return Err(EngineError::InvalidConfig {
                field: "min_rest_days_per_fortnight".to_string(),
                message: "must not be negative".to_string(),
            });
        }
        if self.max_fortnight_hours <= Decimal::ZERO {
            return Err(EngineError::InvalidConfig {
                field: "max_fortnight_hours".to_string(),
                message: "must be positive".to_string(),
            });
        }
        Ok(())
    }
}

/// Optional per-station overrides from the stations YAML file.
///
/// Fields left out of a profile fall back to the built-in defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StationProfile {
    /// Van coverage override.
    pub min_van_coverage: Option<i32>,
    /// Watchhouse coverage override.
    pub min_watchhouse_coverage: Option<i32>,
    /// Period length override in weeks.
    pub period_weeks: Option<i32>,
    /// Consecutive-night cap override.
    pub max_consecutive_nights: Option<i32>,
    /// Rest-day target override.
    pub min_rest_days_per_fortnight: Option<i32>,
    /// Fortnight hour cap override.
    pub max_fortnight_hours: Option<Decimal>,
}

impl StationProfile {
    /// Builds a full generation config for `station` from this profile,
    /// falling back to built-in defaults for unset fields.
    pub fn resolve(&self, station: &str) -> RosterGenerationConfig {
        let mut config = RosterGenerationConfig::for_station(station);
        if let Some(value) = self.min_van_coverage {
            config.min_van_coverage = value;
        }
        if let Some(value) = self.min_watchhouse_coverage {
            config.min_watchhouse_coverage = value;
        }
        if let Some(value) = self.period_weeks {
            config.period_weeks = value;
        }
        if let Some(value) = self.max_consecutive_nights {
            config.max_consecutive_nights = value;
        }
        if let Some(value) = self.min_rest_days_per_fortnight {
            config.min_rest_days_per_fortnight = value;
        }
        if let Some(value) = self.max_fortnight_hours {
            config.max_fortnight_hours = value;
        }
        config
    }
}

/// Stations configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct StationsConfig {
    /// Map of station code to profile overrides.
    pub stations: HashMap<String, StationProfile>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_documented_values() {
        let config = RosterGenerationConfig::for_station("geelong");
        assert_eq!(config.period_weeks, 2);
        assert_eq!(config.min_van_coverage, 2);
        assert_eq!(config.min_watchhouse_coverage, 1);
        assert_eq!(config.max_consecutive_nights, 7);
        assert_eq!(config.min_rest_days_per_fortnight, 4);
        assert_eq!(config.max_fortnight_hours, Decimal::new(76, 0));
        assert!(config.enable_fatigue_balancing);
        assert!(config.enable_preference_weighting);
        assert!(config.corro_rotation_priority);
    }

    #[test]
    fn test_deserialize_with_station_only() {
        let config: RosterGenerationConfig =
            serde_json::from_str(r#"{"station": "corio"}"#).unwrap();
        assert_eq!(config.station, "corio");
        assert_eq!(config.min_van_coverage, 2);
        assert_eq!(config.max_fortnight_hours, Decimal::new(76, 0));
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(RosterGenerationConfig::for_station("geelong")
            .validate()
            .is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_van_coverage() {
        let mut config = RosterGenerationConfig::for_station("geelong");
        config.min_van_coverage = -1;
        let error = config.validate().unwrap_err();
        assert!(error.to_string().contains("min_van_coverage"));
    }

    #[test]
    fn test_validate_rejects_negative_watchhouse_coverage() {
        let mut config = RosterGenerationConfig::for_station("geelong");
        config.min_watchhouse_coverage = -2;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_period() {
        let mut config = RosterGenerationConfig::for_station("geelong");
        config.period_weeks = 0;
        let error = config.validate().unwrap_err();
        assert!(error.to_string().contains("period_weeks"));
    }

    #[test]
    fn test_validate_rejects_non_positive_hour_cap() {
        let mut config = RosterGenerationConfig::for_station("geelong");
        config.max_fortnight_hours = Decimal::ZERO;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_station() {
        let mut config = RosterGenerationConfig::for_station("geelong");
        config.station = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_coverage_is_valid() {
        let mut config = RosterGenerationConfig::for_station("geelong");
        config.min_van_coverage = 0;
        config.min_watchhouse_coverage = 0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_profile_resolve_overrides_and_defaults() {
        let profile = StationProfile {
            min_van_coverage: Some(3),
            max_fortnight_hours: Some(Decimal::new(72, 0)),
            ..StationProfile::default()
        };
        let config = profile.resolve("corio");
        assert_eq!(config.station, "corio");
        assert_eq!(config.min_van_coverage, 3);
        assert_eq!(config.max_fortnight_hours, Decimal::new(72, 0));
        assert_eq!(config.min_watchhouse_coverage, 1); // default
    }

    #[test]
    fn test_stations_config_from_yaml() {
        let yaml = r#"
stations:
  geelong:
    min_van_coverage: 2
  corio:
    min_van_coverage: 1
    min_watchhouse_coverage: 1
"#;
        let parsed: StationsConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(parsed.stations.len(), 2);
        assert_eq!(parsed.stations["corio"].min_van_coverage, Some(1));
    }
}
