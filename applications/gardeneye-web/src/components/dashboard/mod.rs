mod dashboard;
mod info_banner;
mod sensor_card;

pub use dashboard::Dashboard;
