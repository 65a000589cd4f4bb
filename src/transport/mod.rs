//! Authenticated JSON transport for the v4 API.

pub mod request;


use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;

use crate::auth::credentials::Credentials;
use crate::config::Config;
use crate::error::{Error, Result};
pub use request::{ApiRequest, HttpMethod};

/// Executes one [`ApiRequest`] and returns the decoded JSON body.
///
/// Implementations return the body whatever the HTTP status; inspecting the
/// API envelope is left to the caller.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: ApiRequest) -> Result<Value>;
}

pub struct HttpTransport {
    client: Client,
    credentials: Credentials,
    api_url: String,
}

impl HttpTransport {
    pub fn new(config: &Config) -> Result<Self> {
        if config.danger_accept_invalid_certs {
            warn!("TLS certificate verification is disabled");
        }
        let client = Client::builder()
            .timeout(config.timeout)
            .danger_accept_invalid_certs(config.danger_accept_invalid_certs)
            .build()?;

        Ok(Self {
            client,
            credentials: config.credentials.clone(),
            api_url: format!("{}/", config.api_url.trim_end_matches('/')),
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path.trim_start_matches('/'))
    }

    fn build(&self, request: &ApiRequest) -> Result<reqwest::Request> {
        let url = self.url(&request.path);
        let mut builder = self
            .credentials
            .apply(self.client.request(request.method.into(), url))
            .header(CONTENT_TYPE, "application/json");

        if let Some(body) = &request.body {
            builder = builder.body(serde_json::to_vec(body).map_err(Error::Encode)?);
        }

        Ok(builder.build()?)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: ApiRequest) -> Result<Value> {
        let http_request = self.build(&request)?;
        debug!("{} {}", request.method, http_request.url());

        let response = self.client.execute(http_request).await?;
        let status = response.status();
        if !status.is_success() {
            warn!("{} {} returned {}", request.method, request.path, status);
        }

        // Decoded from raw bytes: JSON must be UTF-8, so a lossy text
        // conversion would hide malformed bodies.
        let bytes = response.bytes().await?;
        serde_json::from_slice::<Value>(&bytes).map_err(|source| Error::Decode {
            source,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        })
    }
}
