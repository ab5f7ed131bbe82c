use std::time::Duration;

use anyhow::Context;
use derive_builder::Builder;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Настройки сервера
#[derive(Clone, Debug, Builder)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct Config {
    #[builder(setter(into), default = "String::from(DEFAULT_HOST)")]
    pub host: String,
    #[builder(default = "DEFAULT_PORT")]
    pub port: u16,
    #[builder(default = "Duration::from_secs(DEFAULT_TIMEOUT_SECS)")]
    pub request_timeout: Duration,
}

impl Config {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
    /// Читает HOST, PORT и REQUEST_TIMEOUT_SECS, для отсутствующих берет значения по умолчанию
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut builder = Self::builder();
        if let Some(host) = lookup("HOST") {
            builder.host(host);
        }
        if let Some(port) = lookup("PORT") {
            let port = port
                .parse::<u16>()
                .with_context(|| format!("PORT is not a valid port: {port}"))?;
            builder.port(port);
        }
        if let Some(secs) = lookup("REQUEST_TIMEOUT_SECS") {
            let secs = secs
                .parse::<u64>()
                .with_context(|| format!("REQUEST_TIMEOUT_SECS is not a number: {secs}"))?;
            builder.request_timeout(Duration::from_secs(secs));
        }
        builder.build().context("invalid server configuration")
    }
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: String::from(DEFAULT_HOST),
            port: DEFAULT_PORT,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if self.host.as_ref().is_some_and(|h| h.trim().is_empty()) {
            return Err(String::from("host must not be empty"));
        }
        if self.request_timeout.is_some_and(|t| t.is_zero()) {
            return Err(String::from("request timeout must be greater than zero"));
        }
        Ok(())
    }
}
