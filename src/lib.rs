//! Client for the Cloudflare v4 REST API (zones, DNS records, page rules and
//! zone settings), authenticated with an account email and global API key.
//!
//! Every endpoint method returns the decoded JSON response as-is. Use
//! [`Envelope`] to check the API's own `success` flag.

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod transport;
pub mod types;

pub use auth::credentials::Credentials;
pub use client::CloudflareClient;
pub use config::Config;
pub use error::{Error, Result};
pub use transport::{ApiRequest, HttpMethod, HttpTransport, Transport};
pub use types::{DnsRecordParams, Envelope, PageRuleParams, ZoneSetting};
