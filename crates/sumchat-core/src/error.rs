//! Error types for sumchat-core

use thiserror::Error;

/// Errors that can occur while talking to the chat backend
#[derive(Debug, Error)]
pub enum ClientError {
    /// Endpoint URL could not be built
    #[error("invalid endpoint url: {0}")]
    InvalidUrl(String),

    /// Request never produced a response (offline, refused, aborted)
    #[error("{0}")]
    Transport(String),

    /// Backend answered with a non-2xx status
    #[error("HTTP error! Status: {status}{}", detail_suffix(.detail))]
    Status {
        status: u16,
        /// `error` field of the JSON body, when the backend sent one
        detail: Option<String>,
    },

    /// Response body was not the JSON we expected
    #[error("invalid response body: {0}")]
    Decode(String),
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail.as_ref().map(|d| format!(" ({d})")).unwrap_or_default()
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ClientError::Decode(e.to_string())
        } else {
            ClientError::Transport(e.to_string())
        }
    }
}

/// Result type for backend operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors raised while assembling a configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Base URL is not an absolute http(s) URL
    #[error("invalid base url {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// Endpoint path does not start with '/'
    #[error("endpoint path must start with '/': {0:?}")]
    InvalidPath(String),

    /// Unrecognized send policy name
    #[error("unknown send policy {0:?} (expected \"concurrent\" or \"serialized\")")]
    UnknownSendPolicy(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display_without_detail() {
        let err = ClientError::Status { status: 500, detail: None };
        assert_eq!(err.to_string(), "HTTP error! Status: 500");
    }

    #[test]
    fn test_status_display_with_detail() {
        let err = ClientError::Status {
            status: 400,
            detail: Some("No message provided".to_string()),
        };
        assert_eq!(err.to_string(), "HTTP error! Status: 400 (No message provided)");
    }

    #[test]
    fn test_transport_display_is_bare() {
        let err = ClientError::Transport("Failed to fetch".to_string());
        assert_eq!(err.to_string(), "Failed to fetch");
    }
}
