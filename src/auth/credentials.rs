use std::fmt;

use reqwest::RequestBuilder;

pub const AUTH_EMAIL_HEADER: &str = "X-Auth-Email";
pub const AUTH_KEY_HEADER: &str = "X-Auth-Key";

/// Global API key credentials, fixed for the lifetime of a client.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    email: String,
    key: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            key: key.into(),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub(crate) fn apply(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header(AUTH_EMAIL_HEADER, &self.email)
            .header(AUTH_KEY_HEADER, &self.key)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("key", &"<redacted>")
            .finish()
    }
}
