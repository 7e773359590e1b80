use crate::error::{Error, Result};
use crate::github::GitHubConfig;
use url::Url;

#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerConfig,
    pub github: GitHubConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Externally visible base URL used when building `next` links
    pub external_url: Option<String>,
}

impl ServerConfig {
    /// Base URL clients should use to reach this server
    pub fn public_base_url(&self) -> String {
        match &self.external_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("http://localhost:{}", self.port),
        }
    }
}

impl Settings {
    /// Load settings from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = var("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = var("PORT")
            .unwrap_or_else(|| "8080".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid PORT value".to_string()))?;

        let external_url = var("PUBLIC_BASE_URL").filter(|u| !u.trim().is_empty());

        let github = GitHubConfig::from_vars(&var)?;

        Ok(Settings {
            server: ServerConfig {
                host,
                port,
                external_url,
            },
            github,
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(Error::Config("Port must be non-zero".to_string()));
        }

        if self.github.timeout_seconds == 0 {
            return Err(Error::Config(
                "GitHub timeout must be non-zero".to_string(),
            ));
        }

        validate_base_url("GITHUB_API_URL", self.github.api_base_url())?;

        if let Some(external_url) = &self.server.external_url {
            validate_base_url("PUBLIC_BASE_URL", external_url)?;
        }

        Ok(())
    }
}

fn validate_base_url(name: &str, value: &str) -> Result<()> {
    let url = Url::parse(value).map_err(|e| Error::Config(format!("Invalid {name}: {e}")))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(Error::Config(format!(
            "{name} must use http or https, got {scheme}"
        ))),
    }
}
