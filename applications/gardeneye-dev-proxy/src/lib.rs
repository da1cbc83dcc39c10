pub mod allow_host;
pub mod config;
pub mod error;
pub mod forward;
pub mod routes;

pub use config::{Config, Mode};
pub use error::{ProxyError, Result};
pub use forward::AppState;
