use crate::github::{
    config::GitHubConfig,
    link,
    models::{GitHubRepository, GitHubUser, GitHubUserProfile, UserListing},
};
use crate::{Error, Result};
use reqwest::{header, Client, Response, StatusCode};
use tracing::{debug, error};

/// GitHub API client
#[derive(Clone)]
pub struct GitHubClient {
    client: Client,
    config: GitHubConfig,
}

impl GitHubClient {
    /// Create a new GitHub client
    pub fn new(config: GitHubConfig) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_str(&config.user_agent)
                .map_err(|e| Error::Config(format!("Invalid user agent: {e}")))?,
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github+json"),
        );

        if let Some(token) = &config.token {
            let auth_value = format!("Bearer {token}");
            let mut auth_header = header::HeaderValue::from_str(&auth_value)
                .map_err(|e| Error::Config(format!("Invalid GitHub token: {e}")))?;
            auth_header.set_sensitive(true);
            headers.insert(header::AUTHORIZATION, auth_header);
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout())
            .build()
            .map_err(|e| Error::Internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Send a GET request and check the status
    async fn send(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.config.api_base_url(), path);
        debug!("GitHub API request: GET {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                Error::UpstreamTimeout(format!("GET {path}"))
            } else {
                Error::UpstreamUnavailable(format!("GitHub API request failed: {e}"))
            }
        })?;

        let status = response.status();

        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error response".to_string());
            error!("GitHub API error: {} - {}", status, error_body);

            return Err(match status {
                StatusCode::NOT_FOUND => {
                    Error::UpstreamNotFound(format!("GitHub resource not found: {path}"))
                }
                _ => Error::UpstreamUnavailable(format!("GitHub API error: {status}")),
            });
        }

        Ok(response)
    }

    async fn decode<T>(response: Response) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let body = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                Error::UpstreamTimeout("reading response body".to_string())
            } else {
                Error::UpstreamUnavailable(format!("Failed to read GitHub API response: {e}"))
            }
        })?;

        serde_json::from_slice(&body).map_err(|e| {
            Error::UpstreamMalformedResponse(format!("Failed to parse GitHub API response: {e}"))
        })
    }

    /// Make a GET request to GitHub API
    async fn get<T>(&self, path: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self.send(path).await?;
        Self::decode(response).await
    }

    /// List users with an id greater than `since`
    pub async fn list_users(&self, since: u64) -> Result<UserListing> {
        let path = format!("/users?since={since}");
        let response = self.send(&path).await?;

        let next_link = response
            .headers()
            .get(header::LINK)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| link::find_rel(v, "next"));

        let users: Vec<GitHubUser> = Self::decode(response).await?;
        debug!("GitHub returned {} users since {}", users.len(), since);

        Ok(UserListing { users, next_link })
    }

    /// Get a user's public profile
    pub async fn get_user(&self, username: &str) -> Result<GitHubUserProfile> {
        let path = format!("/users/{}", urlencoding::encode(username));
        self.get(&path).await
    }

    /// List a user's public repositories
    pub async fn list_user_repositories(&self, username: &str) -> Result<Vec<GitHubRepository>> {
        let path = format!("/users/{}/repos", urlencoding::encode(username));
        self.get(&path).await
    }
}
