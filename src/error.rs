use thiserror::Error;

use crate::types::ApiMessage;

#[derive(Error, Debug)]
pub enum Error {
    /// The HTTP exchange did not complete (DNS, connect, TLS, timeout) or the
    /// underlying client could not be built.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The exchange completed but the body is not JSON.
    #[error("Decode error: {source} (body: {body:?})")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    #[error("Encode error: {0}")]
    Encode(#[source] serde_json::Error),

    /// Raised by [`crate::types::Envelope::into_result`], never by the transport.
    #[error("API error: {}", format_messages(.errors))]
    Api { errors: Vec<ApiMessage> },
}

fn format_messages(errors: &[ApiMessage]) -> String {
    if errors.is_empty() {
        return "request was not successful".to_string();
    }
    errors
        .iter()
        .map(|e| match e.code {
            Some(code) => format!("[{code}] {}", e.message),
            None => e.message.clone(),
        })
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
