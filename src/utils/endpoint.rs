use crate::utils::error::{FestError, Result};
use url::Url;

pub fn with_trailing_slash(url: &str) -> String {
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{}/", url)
    }
}

/// Parses a portal base URL so that relative joins keep its path.
pub fn portal_base(base_url: &str) -> Result<Url> {
    Url::parse(&with_trailing_slash(base_url)).map_err(|e| FestError::InvalidConfigValueError {
        field: "base_url".to_string(),
        value: base_url.to_string(),
        reason: format!("Invalid URL format: {}", e),
    })
}
