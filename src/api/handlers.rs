use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use tracing::debug;

use crate::{api::models::*, config::Settings, github::GitHubClient, service::UserService, Result};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub service: UserService,
}

impl AppState {
    /// Wire the GitHub client and user service from settings
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let client = GitHubClient::new(settings.github.clone())?;
        let service = UserService::new(client, settings.server.public_base_url());
        Ok(Self { service })
    }
}

/// GET /api/users - List users after the `since` cursor
pub async fn list_users(
    State(state): State<AppState>,
    params: std::result::Result<Query<UserListParams>, QueryRejection>,
) -> Result<Json<UserPage>> {
    let Query(params) = params?;
    debug!("List users request: {:?}", params);

    let page = state.service.get_users_page(params.since).await?;
    Ok(Json(page))
}

/// GET /api/users/:username/details - Get a user's profile
pub async fn get_user_details(
    State(state): State<AppState>,
    username: std::result::Result<Path<String>, PathRejection>,
) -> Result<Json<UserDetails>> {
    let Path(username) = username?;
    debug!("User details request: {}", username);

    let details = state.service.get_user_details(&username).await?;
    Ok(Json(details))
}

/// GET /api/users/:username/repos - List a user's repositories
pub async fn get_user_repositories(
    State(state): State<AppState>,
    username: std::result::Result<Path<String>, PathRejection>,
) -> Result<Json<RepositoryPage>> {
    let Path(username) = username?;
    debug!("User repositories request: {}", username);

    let repositories = state.service.get_user_repositories_page(&username).await?;
    Ok(Json(repositories))
}

/// GET /health - Health check endpoint
pub async fn health_check() -> Result<Json<HealthResponse>> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
    }))
}
