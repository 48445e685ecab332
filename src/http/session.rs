use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

use super::throttle::Throttle;
use crate::config::ClientConfig;

const MAX_URL_LEN: usize = 2000;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Request failed with status {status}: {url}")]
    Status { status: StatusCode, url: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Throttled HTTP session.
///
/// Every call waits on the gate before going out, so a session shared by
/// application code never exceeds the site's tolerated request rate. A
/// failing status aborts the caller; there is no retry.
pub struct Session {
    client: Client,
    throttle: Throttle,
}

impl Session {
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            throttle: Throttle::new(config.request_interval()),
        }
    }

    /// Issue a GET through the gate.
    pub fn get(&self, url: &str) -> Result<Response, ApiError> {
        self.validate_url(url)?;
        self.throttle.wait();

        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send()?;
        self.check_status(url, response)
    }

    /// Issue a GET with query parameters through the gate.
    pub fn get_query<T: Serialize + ?Sized>(
        &self,
        url: &str,
        query: &T,
    ) -> Result<Response, ApiError> {
        self.validate_url(url)?;
        self.throttle.wait();

        tracing::debug!("GET {} (with query)", url);
        let response = self.client.get(url).query(query).send()?;
        self.check_status(url, response)
    }

    /// Issue a form-encoded POST through the gate.
    pub fn post_form<T: Serialize + ?Sized>(
        &self,
        url: &str,
        form: &T,
    ) -> Result<Response, ApiError> {
        self.validate_url(url)?;
        self.throttle.wait();

        tracing::debug!("POST {}", url);
        let response = self.client.post(url).form(form).send()?;
        self.check_status(url, response)
    }

    pub fn throttle(&self) -> &Throttle {
        &self.throttle
    }

    fn validate_url(&self, url: &str) -> Result<(), ApiError> {
        if url.is_empty() || url.len() > MAX_URL_LEN {
            return Err(ApiError::InvalidUrl(url.to_string()));
        }
        Ok(())
    }

    // Redirects are followed by the client, so anything left in the 3xx
    // range passes through untouched; 4xx/5xx aborts the caller.
    fn check_status(&self, url: &str, response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            tracing::warn!("Request to {} failed with status {}", url, status);
            return Err(ApiError::Status {
                status,
                url: url.to_string(),
            });
        }
        Ok(response)
    }
}
