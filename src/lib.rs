pub mod config;
pub mod error;

// Upstream GitHub client
pub mod github;

// DTO mapping and orchestration
pub mod service;

// HTTP surface
pub mod api;

pub mod cli;

// Utilities
pub mod utils;

// Re-exports
pub use config::Settings;
pub use error::{Error, Result};
