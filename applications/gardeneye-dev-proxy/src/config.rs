use std::env;
use std::path::PathBuf;

/// Build mode of the dev server. Anything other than `development` is
/// treated as production so a typo cannot silently open the host
/// allow-list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Development,
    Production,
}

impl Mode {
    pub fn parse(s: &str) -> Self {
        match s {
            "development" => Mode::Development,
            _ => Mode::Production,
        }
    }
}

/// Dev-server configuration, read from the environment once at startup and
/// passed around explicitly. Request handlers never touch the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub mode: Mode,
    /// Backend host that `/api` requests are forwarded to.
    pub backend_host: String,
    pub backend_port: u16,
    /// Extra hostname accepted outside development mode.
    pub proxy_host: String,
    /// Port the dev server itself listens on.
    pub listen_port: u16,
    /// Directory holding the built frontend (index.html, WASM bundle).
    pub static_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> crate::Result<Self> {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable lookup. Tests
    /// inject a map here instead of mutating the process environment.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> crate::Result<Self> {
        let backend_port = parse_port(&lookup, "BACKEND_PORT", 8000)?;
        let listen_port = parse_port(&lookup, "FRONTEND_PORT", 3000)?;

        Ok(Config {
            mode: Mode::parse(
                lookup("MODE")
                    .unwrap_or_else(|| "development".to_string())
                    .as_str(),
            ),
            backend_host: lookup("BACKEND_HOST").unwrap_or_else(|| "localhost".to_string()),
            backend_port,
            proxy_host: lookup("PROXY_HOST").unwrap_or_else(|| "gardeneye-proxy".to_string()),
            listen_port,
            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("dist")),
        })
    }

    /// Base URL of the backend, without a trailing slash.
    pub fn backend_url(&self) -> String {
        format!("http://{}:{}", self.backend_host, self.backend_port)
    }

    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.listen_port)
    }
}

fn parse_port(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: u16,
) -> crate::Result<u16> {
    match lookup(name) {
        None => Ok(default),
        Some(raw) => raw
            .parse()
            .map_err(|_| crate::ProxyError::Config(format!("{name} is not a valid port: {raw}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> crate::Result<Config> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|name| map.get(name).cloned())
    }

    #[test]
    fn defaults_match_the_dev_setup() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.mode, Mode::Development);
        assert_eq!(config.backend_url(), "http://localhost:8000");
        assert_eq!(config.proxy_host, "gardeneye-proxy");
        assert_eq!(config.listen_port, 3000);
        assert_eq!(config.static_dir, PathBuf::from("dist"));
    }

    #[test]
    fn backend_host_and_port_override_the_target() {
        let config =
            config_from(&[("BACKEND_HOST", "myhost"), ("BACKEND_PORT", "9000")]).unwrap();
        assert_eq!(config.backend_url(), "http://myhost:9000");
    }

    #[test]
    fn mode_is_compared_against_the_variable_itself() {
        assert_eq!(config_from(&[]).unwrap().mode, Mode::Development);
        assert_eq!(
            config_from(&[("MODE", "development")]).unwrap().mode,
            Mode::Development
        );
        assert_eq!(
            config_from(&[("MODE", "production")]).unwrap().mode,
            Mode::Production
        );
        // Unknown values fall to the restrictive side.
        assert_eq!(
            config_from(&[("MODE", "developmnet")]).unwrap().mode,
            Mode::Production
        );
    }

    #[test]
    fn invalid_port_is_a_config_error() {
        let err = config_from(&[("BACKEND_PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("BACKEND_PORT"));
    }
}
