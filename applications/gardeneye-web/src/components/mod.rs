pub mod dashboard;
pub mod history;
pub mod layout;
pub mod not_found;
pub mod sensor_settings;
pub mod settings;

pub use dashboard::Dashboard;
pub use history::History;
pub use not_found::NotFound;
pub use sensor_settings::SensorSettings;
pub use settings::Settings;
