pub mod client;
pub mod config;
pub mod link;
pub mod models;

pub use client::GitHubClient;
pub use config::GitHubConfig;
