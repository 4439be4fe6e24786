//! Admin API HTTP client

use log::{debug, warn};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::{api, retry};
use crate::error::{AdminError, Result};

use super::pagination::{collect_pages, ListPage};

/// Transport retry policy (exponential backoff)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt
    pub max_retries: u32,
    /// Backoff before the first retry
    pub min_backoff: Duration,
    /// Backoff ceiling
    pub max_backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: retry::MAX_RETRIES,
            min_backoff: Duration::from_millis(retry::MIN_BACKOFF_MS),
            max_backoff: Duration::from_millis(retry::MAX_BACKOFF_MS),
        }
    }
}

impl RetryPolicy {
    /// Policy that never retries
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            min_backoff: Duration::ZERO,
            max_backoff: Duration::ZERO,
        }
    }

    /// Backoff before retry number `attempt` (0-based)
    pub fn backoff(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt);
        self.min_backoff
            .saturating_mul(factor)
            .min(self.max_backoff)
    }
}

/// True for statuses worth retrying: 429 and 5xx other than 501
fn is_retryable_status(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS
        || (status.is_server_error() && status != StatusCode::NOT_IMPLEMENTED)
}

/// Admin API client
pub struct AdminClient {
    client: Client,
    api_key: String,
    base_url: String,
    retry: RetryPolicy,
    max_pages: usize,
}

impl AdminClient {
    /// Create a new client with pooled connections and the default retry policy
    pub fn new(api_key: String, base_url: String) -> Self {
        let client = Client::builder()
            // Connection pool settings - reuse connections
            .pool_max_idle_per_host(20)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            // Timeouts
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(60))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            retry: RetryPolicy::default(),
            max_pages: api::MAX_PAGES,
        }
    }

    /// Replace the retry policy
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Replace the page ceiling for list operations
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// API endpoint this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the full URL for a path below `/v1/organizations`
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, api::ORGANIZATIONS_PATH, path)
    }

    /// Add standard headers to a request builder
    fn with_headers(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header(api::API_KEY_HEADER, &self.api_key)
            .header(api::VERSION_HEADER, api::VERSION)
            .header("Content-Type", "application/json")
    }

    /// Create a GET request builder with standard headers
    pub(crate) fn get(&self, path: &str) -> RequestBuilder {
        self.with_headers(self.client.get(self.url(path)))
    }

    /// Create a POST request builder with standard headers
    pub(crate) fn post(&self, path: &str) -> RequestBuilder {
        self.with_headers(self.client.post(self.url(path)))
    }

    /// Create a DELETE request builder with standard headers
    pub(crate) fn delete(&self, path: &str) -> RequestBuilder {
        self.with_headers(self.client.delete(self.url(path)))
    }

    /// Send a request, retrying transport failures, 429 and 5xx
    ///
    /// The last response is returned as-is once retries are exhausted, so
    /// callers still see the real status code and body.
    pub(crate) async fn send(&self, builder: RequestBuilder) -> Result<Response> {
        let mut attempt = 0;

        loop {
            let request = builder.try_clone().ok_or_else(|| {
                AdminError::Config("request body cannot be replayed for retries".to_string())
            })?;

            let wait = match request.send().await {
                Ok(response)
                    if is_retryable_status(response.status())
                        && attempt < self.retry.max_retries =>
                {
                    let wait = retry_after(&response)
                        .map(|d| d.min(self.retry.max_backoff))
                        .unwrap_or_else(|| self.retry.backoff(attempt));
                    warn!(
                        "{} returned {}, retrying in {:?} ({}/{})",
                        response.url(),
                        response.status(),
                        wait,
                        attempt + 1,
                        self.retry.max_retries
                    );
                    wait
                }
                Ok(response) => return Ok(response),
                Err(e) if (e.is_connect() || e.is_timeout()) && attempt < self.retry.max_retries => {
                    let wait = self.retry.backoff(attempt);
                    warn!(
                        "Request failed ({}), retrying in {:?} ({}/{})",
                        e,
                        wait,
                        attempt + 1,
                        self.retry.max_retries
                    );
                    wait
                }
                Err(e) => return Err(e.into()),
            };

            attempt += 1;
            tokio::time::sleep(wait).await;
        }
    }

    /// Send a request and parse a JSON body from a success response
    ///
    /// `context` reads as "Unable to {context}" in diagnostics,
    /// e.g. "create workspace".
    pub(crate) async fn send_json<T>(&self, builder: RequestBuilder, context: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = self.send(builder).await?;
        parse_json_response(response, context).await
    }

    /// Send a request whose success is signalled by the status alone (deletes)
    pub(crate) async fn send_expect_ok(&self, builder: RequestBuilder, context: &str) -> Result<()> {
        let response = self.send(builder).await?;
        match response.status() {
            StatusCode::OK | StatusCode::NO_CONTENT => Ok(()),
            _ => Err(status_error(response, context).await),
        }
    }

    /// Fetch a single entity by path, returning `None` on 404
    pub(crate) async fn find_resource<T>(&self, path: &str, context: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        debug!("Fetching {} from {}", context, path);
        let response = self.send(self.get(path)).await?;

        if response.status() == StatusCode::NOT_FOUND {
            debug!("{} not found", context);
            return Ok(None);
        }

        parse_json_response(response, context).await.map(Some)
    }

    /// Fetch a single entity by path, treating 404 as an error
    pub(crate) async fn get_resource<T>(&self, path: &str, context: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        debug!("Fetching {} from {}", context, path);
        self.send_json(self.get(path), context).await
    }

    /// Fetch every page of a list endpoint
    ///
    /// `path` may already carry query parameters; `limit` and `after_id` are
    /// appended.
    pub async fn fetch_all_pages<T>(&self, path: &str, context: &str) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        collect_pages(context, self.max_pages, move |after_id| {
            self.fetch_page::<T>(path, after_id, context)
        })
        .await
    }

    /// Fetch one page of a list endpoint
    async fn fetch_page<T>(
        &self,
        path: &str,
        after_id: Option<String>,
        context: &str,
    ) -> Result<ListPage<T>>
    where
        T: DeserializeOwned,
    {
        let separator = if path.contains('?') { "&" } else { "?" };
        let mut page_path = format!("{}{}limit={}", path, separator, api::DEFAULT_PAGE_SIZE);
        if let Some(after_id) = &after_id {
            page_path.push_str("&after_id=");
            page_path.push_str(&urlencoding::encode(after_id));
        }

        debug!("Fetching page of {} from {}", context, page_path);
        self.send_json(self.get(&page_path), &format!("list {}", context))
            .await
    }
}

/// Parse `Retry-After` given in whole seconds
fn retry_after(response: &Response) -> Option<Duration> {
    response
        .headers()
        .get(reqwest::header::RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
        .map(Duration::from_secs)
}

/// Build a status error carrying the raw response body
async fn status_error(response: Response, context: &str) -> AdminError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    AdminError::Api {
        status,
        message: format!("Unable to {}, got status code {}: {}", context, status, body),
    }
}

/// Check the status and parse the JSON body of a response
async fn parse_json_response<T>(response: Response, context: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    if !response.status().is_success() {
        return Err(status_error(response, context).await);
    }

    let body = response.text().await?;
    let trimmed = body.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Err(AdminError::EmptyBody(context.to_string()));
    }

    serde_json::from_str(trimmed).map_err(|e| {
        AdminError::Json(format!("Unable to {}, could not parse response: {}", context, e))
    })
}

#[cfg(test)]
impl AdminClient {
    /// Create a test client pointed at a mock server, without retries
    pub fn test_client(base_url: &str) -> Self {
        Self::new("test-key".to_string(), base_url.to_string())
            .with_retry_policy(RetryPolicy::none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_building() {
        let client = AdminClient::new("key".to_string(), "https://api.example.com/".to_string());
        assert_eq!(client.base_url(), "https://api.example.com");
        assert_eq!(
            client.url("/workspaces"),
            "https://api.example.com/v1/organizations/workspaces"
        );
    }

    #[test]
    fn test_default_retry_policy() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_retries, retry::MAX_RETRIES);
        assert_eq!(policy.backoff(0), Duration::from_millis(retry::MIN_BACKOFF_MS));
        assert_eq!(policy.backoff(1), Duration::from_millis(retry::MIN_BACKOFF_MS * 2));
    }

    #[test]
    fn test_backoff_is_capped() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.backoff(30), Duration::from_millis(retry::MAX_BACKOFF_MS));
        assert_eq!(policy.backoff(u32::MAX), Duration::from_millis(retry::MAX_BACKOFF_MS));
    }

    #[test]
    fn test_retryable_statuses() {
        assert!(is_retryable_status(StatusCode::TOO_MANY_REQUESTS));
        assert!(is_retryable_status(StatusCode::INTERNAL_SERVER_ERROR));
        assert!(is_retryable_status(StatusCode::SERVICE_UNAVAILABLE));
        assert!(!is_retryable_status(StatusCode::NOT_IMPLEMENTED));
        assert!(!is_retryable_status(StatusCode::NOT_FOUND));
        assert!(!is_retryable_status(StatusCode::BAD_REQUEST));
    }
}
