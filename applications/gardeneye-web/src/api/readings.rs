use super::client::{ApiClient, ApiError};
use super::sensors::urlencode;
use crate::models::Readings;

impl ApiClient {
    /// Get the reading series for a sensor. `period` is a look-back window
    /// in seconds; omitting it retrieves all available data.
    pub async fn get_readings(
        &self,
        mac: &str,
        period: Option<u32>,
    ) -> Result<Readings, ApiError> {
        let readings: Readings = self.get(&readings_path(mac, period)).await?;
        // The columns must stay index-aligned before any per-sample access.
        readings
            .validate()
            .map_err(|e| ApiError::Deserialization(e.to_string()))?;
        Ok(readings)
    }

    /// Drop all stored readings for a sensor, keeping the sensor itself.
    pub async fn delete_readings(&self, mac: &str) -> Result<(), ApiError> {
        self.delete_empty(&readings_path(mac, None)).await
    }

    /// URL for the CSV export of a sensor's readings, for download links.
    pub fn readings_download_url(&self, mac: &str, period: Option<u32>) -> String {
        let mut path = format!("/api/readings/download?mac={}", urlencode(mac));
        if let Some(period) = period {
            path.push_str(&format!("&period={}", period));
        }
        self.url(&path)
    }
}

fn readings_path(mac: &str, period: Option<u32>) -> String {
    let mut path = format!("/api/readings?mac={}", urlencode(mac));
    if let Some(period) = period {
        path.push_str(&format!("&period={}", period));
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_is_omitted_when_none() {
        assert_eq!(
            readings_path("aa:bb:cc:dd:ee:ff", None),
            "/api/readings?mac=aa%3Abb%3Acc%3Add%3Aee%3Aff"
        );
    }

    #[test]
    fn period_is_appended_when_set() {
        assert_eq!(
            readings_path("aa:bb:cc:dd:ee:ff", Some(86_400)),
            "/api/readings?mac=aa%3Abb%3Acc%3Add%3Aee%3Aff&period=86400"
        );
    }

    #[test]
    fn download_url_points_at_the_csv_export() {
        let client = ApiClient::new();
        assert_eq!(
            client.readings_download_url("aa:bb:cc:dd:ee:ff", Some(3600)),
            "/api/readings/download?mac=aa%3Abb%3Acc%3Add%3Aee%3Aff&period=3600"
        );
    }
}
