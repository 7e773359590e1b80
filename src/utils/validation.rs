// Validation utilities
use crate::error::{Error, Result};
use tracing::warn;

/// GitHub caps logins at 39 characters
const MAX_USERNAME_LENGTH: usize = 39;

/// Validate a GitHub login before it is placed in an upstream URL
/// Logins are ASCII alphanumerics and hyphens. Legacy accounts may carry doubled or
/// trailing hyphens, so only the leading hyphen is rejected.
pub fn validate_username(username: &str) -> Result<&str> {
    if username.is_empty() {
        return Err(Error::Validation("Username must not be empty".to_string()));
    }

    if username.len() > MAX_USERNAME_LENGTH {
        return Err(Error::Validation(format!(
            "Username must be at most {MAX_USERNAME_LENGTH} characters"
        )));
    }

    let valid_chars = username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-');

    if !valid_chars || username.starts_with('-') {
        warn!("Rejected invalid username: {:?}", username);
        return Err(Error::Validation(format!("Invalid username: {username}")));
    }

    Ok(username)
}
