//! GitHub API client
//!
//! Minimal GitHub REST client for the enterprise Copilot endpoints.

use super::FetchError;
use chrono::{DateTime, Utc};
use core::time::Duration;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;

const LOG_TARGET: &str = "    github";
const USER_AGENT: &str = "copilot-pulse";
const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";
const API_VERSION_HEADER: &str = "x-github-api-version";

/// Rate limit information from response headers
#[derive(Debug, Clone, Copy)]
pub struct RateLimitInfo {
    pub remaining: usize,
    pub reset_at: DateTime<Utc>,
}

/// Authenticated GitHub API client
#[derive(Debug, Clone)]
#[expect(clippy::struct_field_names, reason = "client field stores the underlying HTTP client")]
pub struct Client {
    client: reqwest::Client,
    base_url: String,
}

impl Client {
    /// Create a client that sends the bearer token and API version with every request
    pub fn new(token: &str, base_url: &str, api_version: &str, timeout: Duration) -> Result<Self, FetchError> {
        let mut auth_val =
            HeaderValue::from_str(&format!("Bearer {token}")).map_err(|source| FetchError::InvalidHeader { name: "authorization", source })?;
        auth_val.set_sensitive(true);

        let version_val =
            HeaderValue::from_str(api_version).map_err(|source| FetchError::InvalidHeader { name: API_VERSION_HEADER, source })?;

        let mut headers = HeaderMap::new();
        let _ = headers.insert(AUTHORIZATION, auth_val);
        let _ = headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_MEDIA_TYPE));
        let _ = headers.insert(HeaderName::from_static(API_VERSION_HEADER), version_val);

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Get the base URL for this client
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET a path relative to the base URL and decode its JSON body
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, u32)]) -> Result<T, FetchError> {
        let url = format!("{}{path}", self.base_url);
        log::debug!(target: LOG_TARGET, "GET {url} {query:?}");

        let resp = match self.client.get(&url).query(query).send().await {
            Ok(r) => r,
            Err(source) => return Err(FetchError::Transport { url, source }),
        };

        if let Some(rate_limit) = extract_rate_limit_from_headers(resp.headers()) {
            log::debug!(
                target: LOG_TARGET,
                "{} API requests remaining until {}",
                rate_limit.remaining,
                rate_limit.reset_at
            );
        }

        let status = resp.status();
        if !status.is_success() {
            log::debug!(target: LOG_TARGET, "GET {url} returned {status}");
            return Err(FetchError::Http { status: status.as_u16(), url });
        }

        resp.json::<T>().await.map_err(|source| FetchError::Decode { url, source })
    }
}

/// Extract rate limit information from API response headers
fn extract_rate_limit_from_headers(headers: &HeaderMap) -> Option<RateLimitInfo> {
    let remaining = headers.get("x-ratelimit-remaining")?.to_str().ok()?.parse::<usize>().ok()?;

    let reset_timestamp = headers.get("x-ratelimit-reset")?.to_str().ok()?.parse::<i64>().ok()?;

    let reset_at = DateTime::from_timestamp(reset_timestamp, 0)?;

    Some(RateLimitInfo { remaining, reset_at })
}
