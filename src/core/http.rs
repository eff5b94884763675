//! HTTP utilities shared by the stats service and language model clients

use crate::error::{Boundary, ChatError, Result};
use reqwest::header::{
    HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, ORIGIN, REFERER, USER_AGENT,
};
use reqwest::StatusCode;
use std::time::Duration;

const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

/// Headers the NBA stats service expects; requests without them tend to hang.
pub fn stats_headers() -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json, text/plain, */*"));
    h.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
    h.insert(REFERER, HeaderValue::from_static("https://www.nba.com/"));
    h.insert(ORIGIN, HeaderValue::from_static("https://www.nba.com"));
    h.insert(
        HeaderName::from_static("x-nba-stats-origin"),
        HeaderValue::from_static("stats"),
    );
    h.insert(
        HeaderName::from_static("x-nba-stats-token"),
        HeaderValue::from_static("true"),
    );
    Ok(h)
}

/// Bearer-token headers for the language model API.
pub fn bearer_headers(api_key: &str) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    let mut auth = HeaderValue::from_str(&format!("Bearer {}", api_key))?;
    auth.set_sensitive(true);
    h.insert(AUTHORIZATION, auth);
    Ok(h)
}

/// True for statuses worth retrying: rate limiting and server errors.
pub fn is_retryable_status(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
}

/// Error for a non-success HTTP status.
pub fn status_error(status: StatusCode, boundary: Boundary, context: &str) -> ChatError {
    ChatError::ExternalService {
        boundary,
        context: context.to_string(),
        message: format!("HTTP {}", status),
        retryable: is_retryable_status(status),
    }
}

/// Classify a transport error into the crate's taxonomy.
pub fn transport_error(
    err: reqwest::Error,
    boundary: Boundary,
    context: &str,
    timeout: Duration,
) -> ChatError {
    if err.is_timeout() {
        return ChatError::Timeout {
            boundary,
            context: context.to_string(),
            secs: timeout.as_secs(),
        };
    }
    let retryable = err.is_connect()
        || err.is_request()
        || err.status().map(is_retryable_status).unwrap_or(false);
    ChatError::ExternalService {
        boundary,
        context: context.to_string(),
        message: err.to_string(),
        retryable,
    }
}
