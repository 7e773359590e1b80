use crate::api::models::{RepositorySummary, UserDetails, UserSummary};
use crate::github::models::{GitHubRepository, GitHubUser, GitHubUserProfile};

impl From<GitHubUser> for UserSummary {
    fn from(user: GitHubUser) -> Self {
        Self {
            id: user.id,
            login: user.login,
            avatar_url: user.avatar_url,
        }
    }
}

impl From<GitHubUserProfile> for UserDetails {
    fn from(profile: GitHubUserProfile) -> Self {
        Self {
            login: profile.login,
            id: profile.id,
            avatar_url: profile.avatar_url,
            html_url: profile.html_url,
            name: profile.name,
            company: profile.company,
            // GitHub reports a missing blog as ""
            blog: profile.blog.filter(|b| !b.is_empty()),
            location: profile.location,
            email: profile.email,
            bio: profile.bio,
            public_repos: profile.public_repos,
            followers: profile.followers,
            following: profile.following,
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}

impl From<GitHubRepository> for RepositorySummary {
    fn from(repo: GitHubRepository) -> Self {
        Self {
            id: repo.id,
            node_id: repo.node_id,
            name: repo.name,
            full_name: repo.full_name,
            description: repo.description,
            html_url: repo.html_url,
            fork: repo.fork,
            language: repo.language,
            stargazers_count: repo.stargazers_count,
            forks_count: repo.forks_count,
            created_at: repo.created_at,
            updated_at: repo.updated_at,
        }
    }
}

/// Map upstream items in order
pub fn map_all<S, T>(items: Vec<S>) -> Vec<T>
where
    T: From<S>,
{
    items.into_iter().map(T::from).collect()
}
