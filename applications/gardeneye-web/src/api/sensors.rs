use super::client::{ApiClient, ApiError};
use crate::models::{Sensor, SensorPatch};

impl ApiClient {
    /// Get all registered sensors with their latest readings
    pub async fn get_sensors(&self) -> Result<Vec<Sensor>, ApiError> {
        self.get("/api/sensors").await
    }

    /// Get a single sensor by MAC address
    pub async fn get_sensor(&self, mac: &str) -> Result<Sensor, ApiError> {
        self.get(&sensor_query_path(mac)).await
    }

    /// Update per-sensor settings (currently just the display name)
    pub async fn update_sensor(
        &self,
        mac: &str,
        patch: &SensorPatch,
    ) -> Result<(), ApiError> {
        self.post_empty(&format!("{}/settings", sensor_path(mac)), patch)
            .await
    }

    /// Remove a sensor; the backend cascades to its readings
    pub async fn delete_sensor(&self, mac: &str) -> Result<(), ApiError> {
        self.delete_empty(&sensor_path(mac)).await
    }
}

fn sensor_path(mac: &str) -> String {
    format!("/api/sensors/{}", urlencode(mac))
}

fn sensor_query_path(mac: &str) -> String {
    format!("/api/sensors?mac={}", urlencode(mac))
}

/// Percent-encode a MAC for use in a path or query. Only the colon needs
/// escaping in practice, but cover the reserved set anyway.
pub(super) fn urlencode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char)
            }
            _ => out.push_str(&format!("%{:02X}", b)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mac_colons_are_percent_encoded() {
        assert_eq!(urlencode("aa:bb:cc:dd:ee:ff"), "aa%3Abb%3Acc%3Add%3Aee%3Aff");
    }

    #[test]
    fn unreserved_characters_pass_through() {
        assert_eq!(urlencode("sensor-01_x.y~z"), "sensor-01_x.y~z");
    }

    #[test]
    fn single_sensor_lookup_uses_the_mac_query() {
        assert_eq!(
            sensor_query_path("aa:bb:cc:dd:ee:ff"),
            "/api/sensors?mac=aa%3Abb%3Acc%3Add%3Aee%3Aff"
        );
    }

    #[test]
    fn sensor_path_targets_one_sensor() {
        assert_eq!(
            sensor_path("aa:bb:cc:dd:ee:ff"),
            "/api/sensors/aa%3Abb%3Acc%3Add%3Aee%3Aff"
        );
    }
}
