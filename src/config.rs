use anyhow::{Context, Result, bail};
use clap::Parser;
use reqwest::Url;
use std::fmt;
use std::time::Duration;

#[derive(Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Credential sent to the upstream classifier
    #[arg(long, env = "API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Upstream classifier endpoint
    #[arg(long, env = "API_URL")]
    pub api_url: String,

    /// Timeout in milliseconds for the upstream classifier call
    #[arg(long, env = "UPSTREAM_TIMEOUT_MS", default_value = "10000")]
    pub upstream_timeout_ms: u64,

    /// Server host to bind to
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Server port to bind to
    #[arg(long, env = "PORT", default_value = "8000")]
    pub port: u16,

    /// Emit logs as JSON lines
    #[arg(long, env = "LOG_JSON")]
    pub log_json: bool,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("upstream_timeout_ms", &self.upstream_timeout_ms)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("log_json", &self.log_json)
            .finish()
    }
}

/// Everything the classifier client needs, validated once at startup.
#[derive(Clone)]
pub struct ClassifierConfig {
    pub api_key: String,
    pub api_url: Url,
    pub timeout: Duration,
}

impl fmt::Debug for ClassifierConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassifierConfig")
            .field("api_key", &"<redacted>")
            .field("api_url", &self.api_url.as_str())
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Config {
    pub fn classifier_config(&self) -> Result<ClassifierConfig> {
        let api_key = self.api_key.trim();
        if api_key.is_empty() {
            bail!("API_KEY must not be empty");
        }

        let api_url = self.api_url.trim();
        if api_url.is_empty() {
            bail!("API_URL must not be empty");
        }
        let api_url = Url::parse(api_url)
            .with_context(|| format!("API_URL is not a valid URL: {api_url}"))?;
        if !matches!(api_url.scheme(), "http" | "https") {
            bail!("API_URL must use http or https, got {}", api_url.scheme());
        }

        if self.upstream_timeout_ms == 0 {
            bail!("UPSTREAM_TIMEOUT_MS must be greater than zero");
        }

        Ok(ClassifierConfig {
            api_key: api_key.to_string(),
            api_url,
            timeout: Duration::from_millis(self.upstream_timeout_ms),
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
