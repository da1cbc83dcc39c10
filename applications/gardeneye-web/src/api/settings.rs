use super::client::{ApiClient, ApiError};
use crate::models::GlobalSettings;

impl ApiClient {
    /// Get the dashboard-wide settings
    pub async fn get_settings(&self) -> Result<GlobalSettings, ApiError> {
        self.get("/api/settings").await
    }

    /// Replace the dashboard-wide settings
    pub async fn update_settings(
        &self,
        settings: &GlobalSettings,
    ) -> Result<GlobalSettings, ApiError> {
        self.put("/api/settings", settings).await
    }
}
