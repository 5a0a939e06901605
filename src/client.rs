//! Shared HTTP client construction
//!
//! One `reqwest::Client` is built per planner and cloned into each service
//! client, so all outbound calls share a connection pool. Cloning is cheap;
//! the client is reference-counted internally.

use std::time::Duration;

use reqwest::{
    header,
    header::{HeaderMap, HeaderValue},
    Client,
};

use crate::{Result, TourismError};

/// Default timeout for services without a configured one
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!("TourismAI/", env!("CARGO_PKG_VERSION"), " (Rust)");

/// Build the shared HTTP client
pub fn build_client() -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(header::USER_AGENT, HeaderValue::from_static(USER_AGENT));
    Client::builder()
        .default_headers(headers)
        .timeout(DEFAULT_TIMEOUT)
        .pool_idle_timeout(Some(Duration::from_secs(600)))
        .build()
        .map_err(|e| TourismError::transport(format!("failed to build HTTP client: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_client() {
        assert!(build_client().is_ok());
    }

    #[test]
    fn test_user_agent_names_the_service() {
        assert!(USER_AGENT.starts_with("TourismAI/"));
    }
}
