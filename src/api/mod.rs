mod client;
mod types;

pub use client::{rank_candidates, AniListClient};
pub use types::{ApiConfig, ApiError, Candidate};

use std::env;

/// Environment variable names for search client configuration
pub const ENV_ANILIST_ENDPOINT: &str = "ANILIST_ENDPOINT";
pub const ENV_ANILIST_TIMEOUT_SECS: &str = "ANILIST_TIMEOUT_SECS";

/// Load search configuration from environment variables.
///
/// Both are optional and can be set in a `.env` file in the working directory:
/// - `ANILIST_ENDPOINT`: alternative GraphQL endpoint
/// - `ANILIST_TIMEOUT_SECS`: request timeout in seconds
pub fn config_from_env() -> ApiConfig {
    let mut config = ApiConfig::default();

    if let Ok(endpoint) = env::var(ENV_ANILIST_ENDPOINT) {
        if !endpoint.is_empty() {
            config.endpoint = endpoint;
        }
    }

    if let Some(timeout) = env::var(ENV_ANILIST_TIMEOUT_SECS)
        .ok()
        .and_then(|v| v.parse().ok())
    {
        config.timeout_secs = timeout;
    }

    config
}
