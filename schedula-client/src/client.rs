use crate::error::{ClientError, Result};
use crate::reply::Reply;
use reqwest::Client;
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};
use url::Url;

/// Settings applied when the underlying HTTP client is built.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub user_agent: String,
    /// `None` waits for the server indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            user_agent: format!("Schedula/{}", env!("CARGO_PKG_VERSION")),
            timeout: Some(Duration::from_secs(10)),
        }
    }
}

pub struct AjaxClient {
    client: Client,
    base_url: Url,
}

impl AjaxClient {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_options(base_url, ClientOptions::default())
    }

    pub fn with_options(base_url: &str, options: ClientOptions) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", base_url, e)))?;

        let mut builder = Client::builder()
            .user_agent(options.user_agent)
            .cookie_store(true) // Login session must survive into later calls
            .redirect(reqwest::redirect::Policy::limited(5));
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve an endpoint path against the base URL
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", path, e)))
    }

    /// POST `fields` form-encoded to `path` and wait for the full reply.
    ///
    /// Never returns an error: transport failures and non-2xx statuses come
    /// back as a failed [`Reply`] carrying the status code and description.
    pub async fn post<F>(&self, path: &str, fields: &F) -> Reply
    where
        F: Serialize + ?Sized,
    {
        let url = match self.endpoint(path) {
            Ok(url) => url,
            Err(e) => {
                warn!("Refusing to send request: {}", e);
                return Reply::with_error(path.to_string(), 0, e.to_string());
            }
        };

        debug!("POST {}", url);

        let start = Instant::now();
        let response = match self.client.post(url.clone()).form(fields).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Request to {} failed: {}", url, e);
                let status_code = e.status().map(|s| s.as_u16()).unwrap_or(0);
                let mut reply = Reply::with_error(url.to_string(), status_code, e.to_string());
                reply.response_time = start.elapsed();
                return reply;
            }
        };

        let status = response.status();
        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());

        if !status.is_success() {
            warn!("{} answered with status {}", url, status);
            let description = status.canonical_reason().unwrap_or("Unknown status");
            let mut reply =
                Reply::with_error(url.to_string(), status.as_u16(), description.to_string());
            reply.content_type = content_type;
            reply.response_time = start.elapsed();
            return reply;
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                warn!("Failed to read reply body from {}: {}", url, e);
                let mut reply = Reply::with_error(url.to_string(), 0, e.to_string());
                reply.response_time = start.elapsed();
                return reply;
            }
        };

        let mut reply = Reply::new(url.to_string(), status.as_u16(), body);
        reply.content_type = content_type;
        reply.response_time = start.elapsed();

        info!(
            "{} answered {} ({} bytes in {:?})",
            url,
            reply.status_code,
            reply.body.len(),
            reply.response_time
        );

        reply
    }
}
