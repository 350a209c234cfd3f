//! Server settings loaded via OrthoConfig.

use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

/// Errors raised while interpreting [`ServerSettings`].
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid bind address {value}: {source}")]
    BindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
    #[error("invalid store URL {value}: {source}")]
    StoreUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
}

/// Configuration for the HTTP server and its store connection.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ENERGY_SERVER")]
pub struct ServerSettings {
    /// Socket address to listen on.
    #[ortho_config(default = "0.0.0.0:8080".to_owned())]
    pub bind_addr: String,
    /// REST root of the energy store; an in-memory store is used when absent.
    pub store_url: Option<String>,
    /// API key sent to the store.
    pub store_api_key: Option<String>,
    /// Per-request store timeout in seconds.
    #[ortho_config(default = 10)]
    pub store_timeout_secs: u64,
    /// Generator seed for fallback data; random when absent.
    pub generator_seed: Option<u64>,
    /// Weekday probability of the EVENT scenario.
    pub event_probability: Option<f64>,
}

impl ServerSettings {
    /// Parse the configured bind address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        self.bind_addr.parse().map_err(|source| SettingsError::BindAddr {
            value: self.bind_addr.clone(),
            source,
        })
    }

    /// Parse the configured store URL, if any.
    pub fn store_url(&self) -> Result<Option<Url>, SettingsError> {
        self.store_url
            .as_deref()
            .map(|value| {
                Url::parse(value).map_err(|source| SettingsError::StoreUrl {
                    value: value.to_owned(),
                    source,
                })
            })
            .transpose()
    }

    pub fn store_timeout(&self) -> Duration {
        Duration::from_secs(self.store_timeout_secs)
    }

    pub fn event_probability(&self) -> f64 {
        self.event_probability.unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const KEYS: [&str; 6] = [
        "ENERGY_SERVER_BIND_ADDR",
        "ENERGY_SERVER_STORE_URL",
        "ENERGY_SERVER_STORE_API_KEY",
        "ENERGY_SERVER_STORE_TIMEOUT_SECS",
        "ENERGY_SERVER_GENERATOR_SEED",
        "ENERGY_SERVER_EVENT_PROBABILITY",
    ];

    fn load() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("energy-backend")])
            .expect("config should load")
    }

    #[rstest]
    fn defaults_apply_when_unset() {
        let _guard = lock_env(KEYS.map(|key| (key, None::<String>)));

        let settings = load();
        assert_eq!(settings.bind_addr, "0.0.0.0:8080");
        assert_eq!(settings.store_timeout_secs, 10);
        assert_eq!(
            settings.bind_addr().expect("default address"),
            "0.0.0.0:8080".parse().expect("socket address")
        );
        assert!(settings.store_url().expect("no url").is_none());
        assert_eq!(settings.store_timeout(), Duration::from_secs(10));
        assert_eq!(settings.event_probability(), 0.0);
        assert!(settings.generator_seed.is_none());
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("ENERGY_SERVER_BIND_ADDR", Some("127.0.0.1:9000".to_owned())),
            (
                "ENERGY_SERVER_STORE_URL",
                Some("https://store.example/rest/v1".to_owned()),
            ),
            ("ENERGY_SERVER_STORE_API_KEY", Some("anon".to_owned())),
            ("ENERGY_SERVER_STORE_TIMEOUT_SECS", Some("3".to_owned())),
            ("ENERGY_SERVER_GENERATOR_SEED", Some("42".to_owned())),
            ("ENERGY_SERVER_EVENT_PROBABILITY", Some("0.25".to_owned())),
        ]);

        let settings = load();
        assert_eq!(
            settings.bind_addr().expect("address"),
            "127.0.0.1:9000".parse().expect("socket address")
        );
        assert_eq!(
            settings.store_url().expect("url").map(|url| url.host_str().map(str::to_owned)),
            Some(Some("store.example".to_owned()))
        );
        assert_eq!(settings.store_api_key.as_deref(), Some("anon"));
        assert_eq!(settings.store_timeout(), Duration::from_secs(3));
        assert_eq!(settings.generator_seed, Some(42));
        assert_eq!(settings.event_probability(), 0.25);
    }

    #[rstest]
    #[case("ENERGY_SERVER_BIND_ADDR", "not-an-address")]
    #[case("ENERGY_SERVER_STORE_URL", "::nope")]
    fn malformed_values_are_reported(#[case] key: &'static str, #[case] value: &str) {
        let mut vars = KEYS.map(|name| (name, None::<String>));
        for var in &mut vars {
            if var.0 == key {
                var.1 = Some(value.to_owned());
            }
        }
        let _guard = lock_env(vars);

        let settings = load();
        let failed = settings.bind_addr().is_err() || settings.store_url().is_err();
        assert!(failed, "{key}={value} should be rejected");
    }
}
