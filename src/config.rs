use std::env;

const DEFAULT_SITE: &str = "datadoghq.com";

/// Connection settings for the Datadog API.
#[derive(Clone, Debug)]
pub struct DatadogConfig {
    pub base_url: String,
    pub api_key: String,
    pub app_key: String,
    pub timeout_secs: u64,
}

impl DatadogConfig {
    pub fn from_env() -> Self {
        let site = env::var("DD_SITE")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SITE.into());

        Self {
            base_url: env::var("DD_API_BASE_URL")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| base_url_for_site(&site)),
            api_key: env::var("DD_API_KEY").unwrap_or_default(),
            app_key: env::var("DD_APP_KEY").unwrap_or_default(),
            timeout_secs: parse_env_u64_min("RUM_TOOLS_HTTP_TIMEOUT_SECS", 30, 1),
        }
    }

    pub fn has_credentials(&self) -> bool {
        !self.api_key.is_empty() && !self.app_key.is_empty()
    }
}

/// Runtime configuration, read from environment variables.
#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub host: String,
    pub datadog: DatadogConfig,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: parse_env("RUM_TOOLS_PORT", 3143),
            host: env::var("RUM_TOOLS_HOST").unwrap_or_else(|_| "127.0.0.1".into()),
            datadog: DatadogConfig::from_env(),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

pub fn base_url_for_site(site: &str) -> String {
    format!("https://api.{}", site.trim().trim_start_matches("api."))
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn parse_env_u64_min(key: &str, default: u64, min: u64) -> u64 {
    env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .filter(|v| *v >= min)
        .unwrap_or(default)
}
