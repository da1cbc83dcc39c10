pub mod client;
pub mod info;
pub mod readings;
pub mod sensors;
pub mod settings;

pub use client::{ApiClient, ApiError};
