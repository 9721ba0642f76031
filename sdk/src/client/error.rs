//! Client error types.
//!
//! Provides error types for broker client operations.

use reqwest::StatusCode;

use super::operation::Operation;

/// Client errors.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request never got a response.
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The broker answered with a status the operation does not accept.
    #[error("{operation} failed with status {status} and body {body}")]
    Protocol {
        /// Operation that failed.
        operation: Operation,
        /// Response status.
        status: StatusCode,
        /// Raw response body.
        body: String,
    },

    /// The response body did not have the expected shape.
    #[error("failed to decode {operation} response body {body}: {source}")]
    Decode {
        /// Operation whose response failed to decode.
        operation: Operation,
        /// Raw response body.
        body: String,
        /// Parse failure.
        #[source]
        source: serde_json::Error,
    },

    /// The request body could not be serialized.
    #[error("failed to encode {operation} request: {source}")]
    Encode {
        /// Operation whose request failed to encode.
        operation: Operation,
        /// Serialization failure.
        #[source]
        source: serde_json::Error,
    },

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The response arrived but its body could not be read.
    #[error("failed to read {operation} response body with status {status}: {source}")]
    Body {
        /// Operation whose response was cut short.
        operation: Operation,
        /// Response status.
        status: StatusCode,
        /// Read failure.
        #[source]
        source: reqwest::Error,
    },
}

impl ClientError {
    /// Returns the response status, if one was received.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Protocol { status, .. } | Self::Body { status, .. } => Some(*status),
            Self::Transport(e) => e.status(),
            _ => None,
        }
    }

    /// Returns true if the broker reported the resource as missing.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    /// Returns true if no response was received.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protocol_error_display() {
        let err = ClientError::Protocol {
            operation: Operation::GetBinding,
            status: StatusCode::NOT_FOUND,
            body: "{}".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "get binding failed with status 404 Not Found and body {}"
        );
        assert!(err.is_not_found());
        assert!(!err.is_transport());
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    }

    #[test]
    fn test_decode_error_display() {
        let source = serde_json::from_str::<serde_json::Value>("not json")
            .expect_err("invalid json");
        let err = ClientError::Decode {
            operation: Operation::Catalog,
            body: "not json".to_string(),
            source,
        };
        let text = err.to_string();
        assert!(text.starts_with("failed to decode catalog response body not json: "));
        assert!(std::error::Error::source(&err).is_some());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_invalid_config_display() {
        let err = ClientError::InvalidConfig("base_url cannot be empty".to_string());
        assert_eq!(
            err.to_string(),
            "invalid configuration: base_url cannot be empty"
        );
        assert!(!err.is_not_found());
    }
}
