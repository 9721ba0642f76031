//! HTTP transport.
//!
//! [`BrokerClient`](super::BrokerClient) hands fully-built requests to a
//! [`Transport`] and classifies whatever comes back. The default
//! [`HttpTransport`] is a blocking `reqwest` client owned by the broker
//! client; tests and embedders can supply their own.

use std::sync::Arc;

use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use url::Url;

use super::config::ClientConfig;
use super::error::ClientError;
use super::operation::Operation;

/// A request ready to be sent to the broker.
#[derive(Debug, Clone)]
pub struct BrokerRequest {
    /// Operation the request belongs to.
    pub operation: Operation,

    /// HTTP method.
    pub method: Method,

    /// Absolute request URL, including any query string.
    pub url: Url,

    /// Request headers.
    pub headers: HeaderMap,

    /// Serialized JSON body, if the operation carries one.
    pub body: Option<Vec<u8>>,
}

/// A broker response with its body fully read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrokerResponse {
    /// Response status.
    pub status: StatusCode,

    /// Response body as text.
    pub body: String,
}

impl BrokerResponse {
    /// Creates a response.
    #[must_use]
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Executes broker requests.
///
/// Implementations block until the response body has been read.
pub trait Transport: Send + Sync {
    /// Sends `request` and returns the response.
    ///
    /// # Errors
    ///
    /// Returns an error if no response could be obtained or its body could
    /// not be read. Non-success statuses are returned as responses.
    fn execute(&self, request: BrokerRequest) -> Result<BrokerResponse, ClientError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: BrokerRequest) -> Result<BrokerResponse, ClientError> {
        (**self).execute(request)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn execute(&self, request: BrokerRequest) -> Result<BrokerResponse, ClientError> {
        (**self).execute(request)
    }
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn execute(&self, request: BrokerRequest) -> Result<BrokerResponse, ClientError> {
        (**self).execute(request)
    }
}

/// Blocking `reqwest` transport.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::blocking::Client,
}

impl HttpTransport {
    /// Creates a transport configured from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(&config.user_agent)
            .build()
            .map_err(ClientError::Transport)?;

        Ok(Self { http })
    }

    /// Wraps an existing blocking client.
    #[must_use]
    pub fn with_client(http: reqwest::blocking::Client) -> Self {
        Self { http }
    }
}

impl Transport for HttpTransport {
    fn execute(&self, request: BrokerRequest) -> Result<BrokerResponse, ClientError> {
        let operation = request.operation;
        let mut builder = self
            .http
            .request(request.method, request.url)
            .headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let resp = builder.send()?;
        let status = resp.status();
        let body = resp.text().map_err(|source| ClientError::Body {
            operation,
            status,
            source,
        })?;

        Ok(BrokerResponse { status, body })
    }
}
