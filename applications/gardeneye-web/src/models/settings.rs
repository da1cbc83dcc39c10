use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Scheduled wall-clock time at which sensors are expected to sync,
/// serialized as a two-element `[hour, minute]` array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncTime(pub u8, pub u8);

impl SyncTime {
    pub fn hour(&self) -> u8 {
        self.0
    }

    pub fn minute(&self) -> u8 {
        self.1
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.0 > 23 || self.1 > 59 {
            return Err(SettingsError::InvalidSyncTime {
                hour: self.0,
                minute: self.1,
            });
        }
        Ok(())
    }
}

impl std::fmt::Display for SyncTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.0, self.1)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SettingsError {
    #[error("sync time {hour:02}:{minute:02} is out of range")]
    InvalidSyncTime { hour: u8, minute: u8 },

    #[error(
        "battery critical threshold ({critical}) must not exceed the warning threshold ({warning})"
    )]
    ThresholdOrder { warning: f64, critical: f64 },

    #[error("max latency must be positive, got {0}")]
    NonPositiveLatency(i64),
}

/// Dashboard-wide settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalSettings {
    pub sync_time: SyncTime,
    /// Battery percentage below which a sensor is shown as low.
    pub battery_warning_threshold: f64,
    /// Battery percentage below which a sensor is shown as critical.
    pub battery_critical_threshold: f64,
    /// Seconds since the last sample after which a sensor counts as offline.
    pub max_latency: i64,
}

impl GlobalSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        self.sync_time.validate()?;
        if self.battery_critical_threshold > self.battery_warning_threshold {
            return Err(SettingsError::ThresholdOrder {
                warning: self.battery_warning_threshold,
                critical: self.battery_critical_threshold,
            });
        }
        if self.max_latency <= 0 {
            return Err(SettingsError::NonPositiveLatency(self.max_latency));
        }
        Ok(())
    }

    /// Classify a battery percentage against the configured thresholds.
    pub fn battery_level(&self, battery: f64) -> BatteryLevel {
        if battery < self.battery_critical_threshold {
            BatteryLevel::Critical
        } else if battery < self.battery_warning_threshold {
            BatteryLevel::Warning
        } else {
            BatteryLevel::Ok
        }
    }
}

impl Default for GlobalSettings {
    fn default() -> Self {
        Self {
            sync_time: SyncTime(6, 30),
            battery_warning_threshold: 20.0,
            battery_critical_threshold: 10.0,
            max_latency: 86_400,
        }
    }
}

/// Battery alert state for a sensor card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatteryLevel {
    Ok,
    Warning,
    Critical,
}

impl BatteryLevel {
    /// CSS class suffix for the battery indicator.
    pub fn as_str(&self) -> &'static str {
        match self {
            BatteryLevel::Ok => "ok",
            BatteryLevel::Warning => "warning",
            BatteryLevel::Critical => "critical",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_settings_are_valid() {
        let settings = GlobalSettings {
            sync_time: SyncTime(6, 30),
            battery_warning_threshold: 20.0,
            battery_critical_threshold: 10.0,
            max_latency: 300,
        };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn inverted_thresholds_are_rejected() {
        let settings = GlobalSettings {
            battery_warning_threshold: 20.0,
            battery_critical_threshold: 25.0,
            ..Default::default()
        };
        assert_eq!(
            settings.validate(),
            Err(SettingsError::ThresholdOrder {
                warning: 20.0,
                critical: 25.0,
            })
        );
    }

    #[test]
    fn equal_thresholds_are_allowed() {
        let settings = GlobalSettings {
            battery_warning_threshold: 15.0,
            battery_critical_threshold: 15.0,
            ..Default::default()
        };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn out_of_range_sync_time_is_rejected() {
        assert!(SyncTime(24, 0).validate().is_err());
        assert!(SyncTime(0, 60).validate().is_err());
        assert!(SyncTime(23, 59).validate().is_ok());
    }

    #[test]
    fn sync_time_serializes_as_a_pair() {
        let json = serde_json::to_string(&SyncTime(6, 30)).unwrap();
        assert_eq!(json, "[6,30]");
        let back: SyncTime = serde_json::from_str(&json).unwrap();
        assert_eq!(back, SyncTime(6, 30));
    }

    #[test]
    fn settings_round_trip() {
        let settings = GlobalSettings::default();
        let json = serde_json::to_string(&settings).unwrap();
        let back: GlobalSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn battery_level_classification() {
        let settings = GlobalSettings::default();
        assert_eq!(settings.battery_level(50.0), BatteryLevel::Ok);
        assert_eq!(settings.battery_level(20.0), BatteryLevel::Ok);
        assert_eq!(settings.battery_level(19.9), BatteryLevel::Warning);
        assert_eq!(settings.battery_level(10.0), BatteryLevel::Warning);
        assert_eq!(settings.battery_level(9.9), BatteryLevel::Critical);
    }
}
