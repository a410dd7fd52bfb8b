use config::{Config, ConfigError};
use serde::Deserialize;
use std::env;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    server: Server,
    location_api: LocationApi,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("location_api.max_attempts", 2)?
            .set_default("location_api.retry_delay", "1s")?
            .set_default("location_api.connect_timeout", "2s")?
            .set_default("location_api.request_timeout", "5s")?
            .set_default("location_api.on_exhausted", "fallback")?
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::default().separator("__"))
            .set_override_option("location_api.url", env::var("API_URL").ok())?
            .build()?
            .try_deserialize()
    }

    pub fn server(&self) -> &Server {
        &self.server
    }

    pub fn location_api(&self) -> &LocationApi {
        &self.location_api
    }
}

#[derive(Debug, Deserialize)]
pub struct Server {
    host: String,
    port: u16,
}

impl Server {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// What to do once every attempt to reach the upstream API has failed.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExhaustedPolicy {
    /// Serve the last known position, or (0, 0) if there is none.
    #[default]
    Fallback,
    /// Report the failure to the caller.
    Fail,
}

#[derive(Debug, Deserialize)]
pub struct LocationApi {
    url: String,
    max_attempts: u32,
    #[serde(with = "humantime_serde")]
    retry_delay: Duration,
    #[serde(with = "humantime_serde")]
    connect_timeout: Duration,
    #[serde(with = "humantime_serde")]
    request_timeout: Duration,
    on_exhausted: ExhaustedPolicy,
}

impl LocationApi {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn retry_delay(&self) -> Duration {
        self.retry_delay
    }

    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    pub fn on_exhausted(&self) -> ExhaustedPolicy {
        self.on_exhausted
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                server: Server {
                    host: "127.0.0.1".to_string(),
                    port: 0,
                },
                location_api: LocationApi {
                    url: "https://iss.url/".to_string(),
                    max_attempts: 2,
                    retry_delay: Duration::from_millis(10),
                    connect_timeout: Duration::from_millis(500),
                    request_timeout: Duration::from_secs(1),
                    on_exhausted: ExhaustedPolicy::Fallback,
                },
            },
        }
    }

    pub fn location_api_url(mut self, url: String) -> Self {
        self.config.location_api.url = url;
        self
    }

    pub fn retry_delay(mut self, retry_delay: Duration) -> Self {
        self.config.location_api.retry_delay = retry_delay;
        self
    }

    pub fn on_exhausted(mut self, on_exhausted: ExhaustedPolicy) -> Self {
        self.config.location_api.on_exhausted = on_exhausted;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
