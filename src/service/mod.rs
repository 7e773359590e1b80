pub mod mapper;

use crate::api::models::{RepositoryPage, UserDetails, UserPage};
use crate::github::{link, GitHubClient};
use crate::utils::validation::validate_username;
use crate::Result;
use tracing::{debug, warn};

/// Fetches users and repositories from GitHub and reshapes them into API responses
#[derive(Clone)]
pub struct UserService {
    client: GitHubClient,
    public_base_url: String,
}

impl UserService {
    pub fn new(client: GitHubClient, public_base_url: impl Into<String>) -> Self {
        Self {
            client,
            public_base_url: public_base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// One page of users with an id greater than `since`
    pub async fn get_users_page(&self, since: u64) -> Result<UserPage> {
        let listing = self.client.list_users(since).await?;

        let next = listing.next_link.as_deref().and_then(|next_link| {
            let cursor = link::since_cursor(next_link);
            if cursor.is_none() {
                warn!("GitHub next link without a since cursor: {}", next_link);
            }
            cursor.map(|cursor| self.users_page_url(cursor))
        });

        debug!(
            "Users page since {}: {} users, next: {:?}",
            since,
            listing.users.len(),
            next
        );

        Ok(UserPage {
            content: mapper::map_all(listing.users),
            next,
        })
    }

    pub async fn get_user_details(&self, username: &str) -> Result<UserDetails> {
        let username = validate_username(username)?;
        let profile = self.client.get_user(username).await?;
        Ok(profile.into())
    }

    pub async fn get_user_repositories_page(&self, username: &str) -> Result<RepositoryPage> {
        let username = validate_username(username)?;
        let repositories = self.client.list_user_repositories(username).await?;

        debug!("{} repositories for {}", repositories.len(), username);

        Ok(RepositoryPage {
            content: mapper::map_all(repositories),
        })
    }

    /// Local URL of the user listing starting after `since`
    pub fn users_page_url(&self, since: u64) -> String {
        format!("{}/api/users?since={since}", self.public_base_url)
    }
}
