use std::env;
use std::time::Duration;

use crate::auth::credentials::Credentials;

pub const DEFAULT_API_URL: &str = "https://api.cloudflare.com/client/v4/";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, Debug)]
pub struct Config {
    pub credentials: Credentials,
    pub api_url: String,
    pub timeout: Duration,
    /// Disables TLS certificate verification. Only meant for tests against
    /// self-signed endpoints; never read from the environment.
    pub danger_accept_invalid_certs: bool,
}

impl Config {
    pub fn new(credentials: Credentials) -> Self {
        Config {
            credentials,
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            danger_accept_invalid_certs: false,
        }
    }

    pub fn from_env() -> Result<Self, env::VarError> {
        let credentials = Credentials::new(
            env::var("CLOUDFLARE_EMAIL")?,
            env::var("CLOUDFLARE_API_KEY")?,
        );
        Ok(Config {
            credentials,
            api_url: env::var("CLOUDFLARE_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            timeout: Duration::from_secs(
                env::var("CLOUDFLARE_TIMEOUT")
                    .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
                    .parse()
                    .unwrap_or(DEFAULT_TIMEOUT_SECS),
            ),
            danger_accept_invalid_certs: false,
        })
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
