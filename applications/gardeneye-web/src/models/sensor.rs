use serde::{Deserialize, Serialize};

use super::Reading;

/// A physical sensor as reported by the backend.
///
/// `online` is a point-in-time liveness flag the backend computes from the
/// age of the latest sample. A missing `latest_reading` means the sensor has
/// never reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sensor {
    /// Hardware MAC address, the stable identity of the sensor.
    pub mac: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub online: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_reading: Option<Reading>,
}

impl Sensor {
    /// Display name: the user-assigned name if set, the MAC otherwise.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.mac)
    }
}

/// Patch body for updating per-sensor settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SensorPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_round_trip_preserves_all_fields() {
        let sensor = Sensor {
            mac: "aa:bb:cc:dd:ee:ff".into(),
            name: Some("Greenhouse".into()),
            online: true,
            latest_reading: Some(Reading {
                timestamp: 1_700_000_000,
                humidity: 42.5,
                temperature: 19.25,
                battery: 77.0,
            }),
        };
        let json = serde_json::to_string(&sensor).unwrap();
        let back: Sensor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sensor);
    }

    #[test]
    fn never_reported_sensor_parses_without_a_reading() {
        let json = r#"{"mac":"aa:bb:cc:dd:ee:ff","online":false}"#;
        let sensor: Sensor = serde_json::from_str(json).unwrap();
        assert!(sensor.latest_reading.is_none());
        assert!(sensor.name.is_none());
        assert!(!sensor.online);
    }

    #[test]
    fn missing_mac_is_a_parse_error() {
        let json = r#"{"online":true}"#;
        assert!(serde_json::from_str::<Sensor>(json).is_err());
    }

    #[test]
    fn optional_fields_are_omitted_when_absent() {
        let sensor = Sensor {
            mac: "aa:bb:cc:dd:ee:ff".into(),
            name: None,
            online: false,
            latest_reading: None,
        };
        let value = serde_json::to_value(&sensor).unwrap();
        assert!(value.get("name").is_none());
        assert!(value.get("latest_reading").is_none());
    }
}
