pub mod info;
pub mod readings;
pub mod sensor;
pub mod settings;

pub use info::{InfoItem, InfoLevel};
pub use readings::{Reading, Readings, SensorReadings, SeriesError};
pub use sensor::{Sensor, SensorPatch};
pub use settings::{BatteryLevel, GlobalSettings, SettingsError, SyncTime};
