use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One sampled measurement from a sensor. Timestamps are epoch seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub timestamp: i64,
    pub humidity: f64,
    pub temperature: f64,
    pub battery: f64,
}

/// A time series of readings as parallel, index-aligned columns.
///
/// Invariant: all four columns have the same length. The backend sends the
/// series this way; [`Readings::validate`] must pass before indexed access
/// is meaningful.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Readings {
    pub timestamps: Vec<i64>,
    pub humidity: Vec<f64>,
    pub temperature: Vec<f64>,
    pub battery: Vec<f64>,
    /// Server-observed current time, used for freshness calculations.
    pub now: i64,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SeriesError {
    #[error(
        "series length mismatch: timestamps={timestamps}, humidity={humidity}, \
         temperature={temperature}, battery={battery}"
    )]
    LengthMismatch {
        timestamps: usize,
        humidity: usize,
        temperature: usize,
        battery: usize,
    },

    #[error("sensor mac must not be empty")]
    EmptyMac,
}

impl Readings {
    /// Check the equal-length invariant across all four columns.
    pub fn validate(&self) -> Result<(), SeriesError> {
        let n = self.timestamps.len();
        if self.humidity.len() != n || self.temperature.len() != n || self.battery.len() != n {
            return Err(SeriesError::LengthMismatch {
                timestamps: n,
                humidity: self.humidity.len(),
                temperature: self.temperature.len(),
                battery: self.battery.len(),
            });
        }
        Ok(())
    }

    /// Number of samples in the series.
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Assemble the sample at index `i` from the parallel columns.
    pub fn get(&self, i: usize) -> Option<Reading> {
        Some(Reading {
            timestamp: *self.timestamps.get(i)?,
            humidity: *self.humidity.get(i)?,
            temperature: *self.temperature.get(i)?,
            battery: *self.battery.get(i)?,
        })
    }

    /// The most recent sample, taking the series as newest-first
    /// (the backend returns `ORDER BY timestamp DESC`).
    pub fn latest(&self) -> Option<Reading> {
        self.get(0)
    }
}

/// A readings series tagged with the owning sensor identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReadings {
    pub mac: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub series: Readings,
}

impl SensorReadings {
    pub fn validate(&self) -> Result<(), SeriesError> {
        if self.mac.is_empty() {
            return Err(SeriesError::EmptyMac);
        }
        self.series.validate()
    }

    /// Display name: the user-assigned name if set, the MAC otherwise.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.mac)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(n: usize) -> Readings {
        Readings {
            timestamps: (0..n as i64).rev().collect(),
            humidity: vec![40.0; n],
            temperature: vec![21.5; n],
            battery: vec![88.0; n],
            now: 1_700_000_000,
        }
    }

    #[test]
    fn equal_length_series_validates() {
        assert!(series(3).validate().is_ok());
        assert!(series(0).validate().is_ok());
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let mut s = series(3);
        s.humidity.pop();
        let err = s.validate().unwrap_err();
        assert_eq!(
            err,
            SeriesError::LengthMismatch {
                timestamps: 3,
                humidity: 2,
                temperature: 3,
                battery: 3,
            }
        );
    }

    #[test]
    fn latest_takes_the_first_sample() {
        let s = series(3);
        let latest = s.latest().unwrap();
        assert_eq!(latest.timestamp, 2);
        assert_eq!(latest.humidity, 40.0);
        assert!(series(0).latest().is_none());
    }

    #[test]
    fn sensor_readings_require_a_mac() {
        let sr = SensorReadings {
            mac: String::new(),
            name: None,
            series: series(1),
        };
        assert_eq!(sr.validate(), Err(SeriesError::EmptyMac));
    }

    #[test]
    fn sensor_readings_flatten_the_series_in_json() {
        let sr = SensorReadings {
            mac: "aa:bb:cc:dd:ee:ff".into(),
            name: Some("Tomatoes".into()),
            series: series(2),
        };
        let value = serde_json::to_value(&sr).unwrap();
        // The series columns sit next to mac/name, not nested.
        assert!(value.get("timestamps").is_some());
        assert!(value.get("series").is_none());
        assert_eq!(value["mac"], "aa:bb:cc:dd:ee:ff");

        let back: SensorReadings = serde_json::from_value(value).unwrap();
        assert_eq!(back, sr);
    }

    #[test]
    fn display_name_falls_back_to_mac() {
        let mut sr = SensorReadings {
            mac: "aa:bb:cc:dd:ee:ff".into(),
            name: None,
            series: series(0),
        };
        assert_eq!(sr.display_name(), "aa:bb:cc:dd:ee:ff");
        sr.name = Some("Herb bed".into());
        assert_eq!(sr.display_name(), "Herb bed");
    }
}
