use super::client::{ApiClient, ApiError};
use crate::models::InfoItem;

impl ApiClient {
    /// Get fleet-status items for the dashboard banner
    pub async fn get_info(&self) -> Result<Vec<InfoItem>, ApiError> {
        self.get("/api/info").await
    }
}
