use crate::api::models::{RepositoryPage, UserDetails, UserPage};
use crate::{Error, Result};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

/// Fetch a JSON resource from the server
async fn fetch<T: DeserializeOwned>(url: &str) -> Result<T> {
    let client = Client::new();
    let response = client.get(url).send().await?;

    match response.status() {
        status if status.is_success() => Ok(response.json().await?),
        StatusCode::NOT_FOUND => Err(Error::UpstreamNotFound(url.to_string())),
        StatusCode::BAD_REQUEST => {
            let message = response.text().await.unwrap_or_default();
            Err(Error::Validation(message))
        }
        status => match response.error_for_status() {
            Err(e) => Err(Error::Http(e)),
            Ok(_) => Err(Error::Internal(format!("Unexpected response status: {status}"))),
        },
    }
}

/// List users after a cursor
pub async fn users(server_url: &str, since: u64) -> Result<()> {
    let url = format!("{server_url}/api/users?since={since}");
    let page: UserPage = fetch(&url).await?;

    print_user_page(&page);
    Ok(())
}

/// Show one user's profile
pub async fn details(server_url: &str, username: &str) -> Result<()> {
    let url = format!(
        "{server_url}/api/users/{}/details",
        urlencoding::encode(username)
    );
    let user: UserDetails = fetch(&url).await?;

    println!("{} (#{})", user.login, user.id);
    if let Some(name) = &user.name {
        println!("  Name: {name}");
    }
    if let Some(bio) = &user.bio {
        println!("  Bio: {bio}");
    }
    if let Some(location) = &user.location {
        println!("  Location: {location}");
    }
    println!("  Profile: {}", user.html_url);
    println!("  Avatar: {}", user.avatar_url);
    println!(
        "  Repos: {}  Followers: {}  Following: {}",
        user.public_repos, user.followers, user.following
    );
    println!("  Joined: {}", user.created_at.format("%Y-%m-%d"));

    Ok(())
}

/// List a user's repositories
pub async fn repos(server_url: &str, username: &str) -> Result<()> {
    let url = format!(
        "{server_url}/api/users/{}/repos",
        urlencoding::encode(username)
    );
    let page: RepositoryPage = fetch(&url).await?;

    print_repository_page(&page);
    Ok(())
}

fn print_user_page(page: &UserPage) {
    if page.content.is_empty() {
        println!("No users found");
    } else {
        println!("{:<12} {:<40}", "ID", "Login");
        println!("{}", "-".repeat(52));
        for user in &page.content {
            println!("{:<12} {:<40}", user.id, truncate(&user.login, 40));
        }
    }

    if let Some(next) = &page.next {
        println!("\nNext page: {next}");
    }
}

fn print_repository_page(page: &RepositoryPage) {
    if page.content.is_empty() {
        println!("No repositories found");
        return;
    }

    println!("{:<40} {:<15} {:>6}", "Name", "Language", "Stars");
    println!("{}", "-".repeat(63));
    for repo in &page.content {
        println!(
            "{:<40} {:<15} {:>6}",
            truncate(&repo.name, 40),
            truncate(repo.language.as_deref().unwrap_or("-"), 15),
            repo.stargazers_count
        );
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{cut}...")
    }
}
