use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User listing query parameters
#[derive(Debug, Clone, Deserialize)]
pub struct UserListParams {
    #[serde(default)]
    pub since: u64,
}

/// One entry of a user listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: u64,
    pub login: String,
    pub avatar_url: String,
}

/// Page of users with a link to the following page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPage {
    pub content: Vec<UserSummary>,
    pub next: Option<String>,
}

/// Full user profile
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDetails {
    pub login: String,
    pub id: u64,
    pub avatar_url: String,
    pub html_url: String,
    pub name: Option<String>,
    pub company: Option<String>,
    pub blog: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub bio: Option<String>,
    pub public_repos: u32,
    pub followers: u32,
    pub following: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Repository entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositorySummary {
    pub id: u64,
    pub node_id: String,
    pub name: String,
    pub full_name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub fork: bool,
    pub language: Option<String>,
    pub stargazers_count: u32,
    pub forks_count: u32,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// A user's repositories
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryPage {
    pub content: Vec<RepositorySummary>,
}

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
}
