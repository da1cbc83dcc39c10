use serde::{Deserialize, Serialize};

/// Severity of a status banner item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InfoLevel {
    Info,
    Warning,
    Error,
}

impl InfoLevel {
    /// CSS class suffix for the banner item.
    pub fn as_str(&self) -> &'static str {
        match self {
            InfoLevel::Info => "info",
            InfoLevel::Warning => "warning",
            InfoLevel::Error => "error",
        }
    }
}

/// One fleet-status item from `/api/info`, e.g. "Offline Sensors: 2".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoItem {
    pub title: String,
    pub content: String,
    pub level: InfoLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_parses_from_lowercase() {
        let item: InfoItem = serde_json::from_str(
            r#"{"title":"Offline Sensors","content":"2","level":"error"}"#,
        )
        .unwrap();
        assert_eq!(item.level, InfoLevel::Error);
    }

    #[test]
    fn round_trip() {
        let item = InfoItem {
            title: "Low Battery Sensors".into(),
            content: "1".into(),
            level: InfoLevel::Warning,
        };
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(serde_json::from_str::<InfoItem>(&json).unwrap(), item);
    }
}
