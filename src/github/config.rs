use crate::{Error, Result};
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// GitHub upstream configuration
#[derive(Debug, Clone)]
pub struct GitHubConfig {
    /// Base URL of the GitHub REST API
    pub api_url: String,

    /// Optional personal access token, forwarded as a bearer credential
    pub token: Option<String>,

    /// Timeout applied to every upstream request
    pub timeout_seconds: u64,

    pub user_agent: String,
}

impl GitHubConfig {
    /// Build the configuration from a variable lookup (normally the process environment)
    pub fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = var("GITHUB_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let token = var("GITHUB_TOKEN").filter(|t| !t.trim().is_empty());

        let timeout_seconds = var("GITHUB_TIMEOUT_SECONDS")
            .unwrap_or_else(|| "10".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid GITHUB_TIMEOUT_SECONDS value".to_string()))?;

        Ok(Self {
            api_url,
            token,
            timeout_seconds,
            ..Self::default()
        })
    }

    /// Base API URL without a trailing slash
    pub fn api_base_url(&self) -> &str {
        self.api_url.trim_end_matches('/')
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token: None,
            timeout_seconds: 10,
            user_agent: format!("github-users-api/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}
