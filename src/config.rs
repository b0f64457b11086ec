use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;

use crate::error::{MonitorError, Result};
use crate::provider::AwsConfig;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub aws: AwsConfig,
    pub dispatch: DispatchConfig,
    pub telemetry: TelemetryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Base URL advertised in the integration descriptor. Derived from the
    /// request `Host` header when unset.
    pub public_base_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchConfig {
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    pub log_level: String,
}

fn env_or<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| MonitorError::config(format!("Invalid {}: {}", name, e))),
        Err(_) => Ok(default),
    }
}

fn env_opt(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            server: ServerConfig {
                host: std::env::var("SERVER_HOST").unwrap_or(defaults.server.host),
                port: env_or("SERVER_PORT", defaults.server.port)?,
                public_base_url: env_opt("PUBLIC_BASE_URL"),
            },
            aws: AwsConfig {
                region: std::env::var("AWS_REGION").unwrap_or(defaults.aws.region),
                endpoint: env_opt("AWS_ENDPOINT_URL"),
                timeout_secs: env_or("PROVIDER_TIMEOUT_SECS", defaults.aws.timeout_secs)?,
            },
            dispatch: DispatchConfig {
                timeout_secs: env_or("DISPATCH_TIMEOUT_SECS", defaults.dispatch.timeout_secs)?,
            },
            telemetry: TelemetryConfig {
                log_level: std::env::var("LOG_LEVEL").unwrap_or(defaults.telemetry.log_level),
            },
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(MonitorError::config("SERVER_PORT must be non-zero"));
        }
        if self.aws.region.trim().is_empty() {
            return Err(MonitorError::config("AWS_REGION must not be empty"));
        }
        if self.aws.timeout_secs == 0 {
            return Err(MonitorError::config("PROVIDER_TIMEOUT_SECS must be non-zero"));
        }
        if self.dispatch.timeout_secs == 0 {
            return Err(MonitorError::config("DISPATCH_TIMEOUT_SECS must be non-zero"));
        }
        if let Some(base) = &self.server.public_base_url {
            url::Url::parse(base)
                .map_err(|e| MonitorError::config(format!("Invalid PUBLIC_BASE_URL: {}", e)))?;
        }
        Ok(())
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn dispatch_timeout(&self) -> Duration {
        Duration::from_secs(self.dispatch.timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8000,
                public_base_url: None,
            },
            aws: AwsConfig::default(),
            dispatch: DispatchConfig { timeout_secs: 10 },
            telemetry: TelemetryConfig {
                log_level: "info".to_string(),
            },
        }
    }
}
