use std::str::FromStr;

use serde::Deserialize;

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(skip)]
    pub environment: Environment,
    pub server: ServerSettings,
    pub limits: LimitSettings,
    pub lea: LeaSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LimitSettings {
    pub max_upload_mb: usize,
    pub split_timeout_secs: u64,
    pub max_pages: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LeaSettings {
    pub endpoint: String,
    pub timeout_secs: u64,
}

impl Settings {
    /// Environment-driven configuration with local-development defaults.
    pub fn from_env() -> Self {
        Self {
            environment: std::env::var("APP_ENV")
                .ok()
                .and_then(|v| Environment::from_str(&v).ok())
                .unwrap_or(Environment::Local),
            server: ServerSettings {
                host: env_or("SERVER_HOST", "0.0.0.0"),
                port: env_parse("SERVER_PORT", 3000),
            },
            limits: LimitSettings {
                max_upload_mb: env_parse("MAX_UPLOAD_MB", 32),
                split_timeout_secs: env_parse("SPLIT_TIMEOUT_SECS", 30),
                max_pages: env_parse("MAX_PAGES", 500),
            },
            lea: LeaSettings {
                endpoint: env_or(
                    "LEA_ENDPOINT",
                    "https://convert.api.fearnot221.com/api/crypto/lea",
                ),
                timeout_secs: env_parse("LEA_TIMEOUT_SECS", 30),
            },
        }
    }
}

impl LimitSettings {
    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb * 1024 * 1024
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
