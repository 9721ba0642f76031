//! Broker client implementation.
//!
//! Provides the main client for interacting with an OSBAPI service broker.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

use super::config::ClientConfig;
use super::error::ClientError;
use super::operation::Operation;
use super::transport::{BrokerRequest, BrokerResponse, HttpTransport, Transport};
use crate::types::{
    BindingRequest, Catalog, DeprovisionRequest, ProvisionRequest, ProvisionResponse,
    ServiceBinding, ServiceInstance, UnbindingRequest,
};

/// Header carrying the broker API version.
pub const API_VERSION_HEADER: &str = "x-broker-api-version";

/// Client for a single OSBAPI service broker.
///
/// Every call is one blocking request/response exchange. Nothing is cached
/// between calls and nothing is retried.
#[derive(Debug, Clone)]
pub struct BrokerClient<T = HttpTransport> {
    config: ClientConfig,
    base_url: Url,
    headers: HeaderMap,
    transport: T,
}

impl BrokerClient<HttpTransport> {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        config.validate()?;
        let transport = HttpTransport::new(&config)?;
        Self::with_transport(config, transport)
    }

    /// Creates a new client for `base_url` with default credentials and
    /// API version.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::new(ClientConfig::new(base_url))
    }
}

impl<T: Transport> BrokerClient<T> {
    /// Creates a client that sends its requests through `transport`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the credentials
    /// or API version cannot be encoded as header values.
    pub fn with_transport(config: ClientConfig, transport: T) -> Result<Self, ClientError> {
        config.validate()?;

        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ClientError::InvalidConfig(format!("base_url is not a valid URL: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidConfig(
                "base_url cannot carry a path".to_string(),
            ));
        }
        let headers = common_headers(&config)?;

        Ok(Self {
            config,
            base_url,
            headers,
            transport,
        })
    }

    /// Returns the client configuration.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the transport.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetches the broker catalog.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Protocol`] unless the broker answers `200`, and
    /// [`ClientError::Decode`] if the body is not a catalog.
    pub fn catalog(&self) -> Result<Catalog, ClientError> {
        let url = self.endpoint(&["v2", "catalog"])?;
        let resp = self.send(Operation::Catalog, url, None)?;
        decode(Operation::Catalog, resp)
    }

    /// Provisions a service instance.
    ///
    /// Both `200 OK` (instance already exists) and `201 Created` count as
    /// success. An `operation` in the response is returned, not polled.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the broker rejects it, or the
    /// response body cannot be decoded.
    pub fn provision(
        &self,
        instance_id: &str,
        request: &ProvisionRequest,
    ) -> Result<ProvisionResponse, ClientError> {
        let op = Operation::Provision;
        let url = self.instance_url(instance_id)?;
        let body = encode(op, request)?;
        let resp = self.send(op, url, Some(body))?;
        decode(op, resp)
    }

    /// Fetches a service instance.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Protocol`] unless the broker answers `200`.
    pub fn get_instance(&self, instance_id: &str) -> Result<ServiceInstance, ClientError> {
        let op = Operation::GetInstance;
        let url = self.instance_url(instance_id)?;
        let resp = self.send(op, url, None)?;
        decode(op, resp)
    }

    /// Deprovisions a service instance.
    ///
    /// The service and plan IDs travel as query parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Protocol`] unless the broker answers `200`; a
    /// missing instance surfaces as `404 Not Found`.
    pub fn deprovision(
        &self,
        instance_id: &str,
        request: &DeprovisionRequest,
    ) -> Result<(), ClientError> {
        let mut url = self.instance_url(instance_id)?;
        url.query_pairs_mut().extend_pairs(request.query_pairs());
        self.send(Operation::Deprovision, url, None)?;
        Ok(())
    }

    /// Creates a binding for a service instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the broker answers anything but
    /// `200` or `201`, or the response body cannot be decoded.
    pub fn bind(
        &self,
        instance_id: &str,
        binding_id: &str,
        request: &BindingRequest,
    ) -> Result<ServiceBinding, ClientError> {
        let op = Operation::Bind;
        let url = self.binding_url(instance_id, binding_id)?;
        let body = encode(op, request)?;
        let resp = self.send(op, url, Some(body))?;
        decode(op, resp)
    }

    /// Fetches a binding.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the broker answers anything but
    /// `200` or `201`, or the response body cannot be decoded.
    pub fn get_binding(
        &self,
        instance_id: &str,
        binding_id: &str,
    ) -> Result<ServiceBinding, ClientError> {
        let op = Operation::GetBinding;
        let url = self.binding_url(instance_id, binding_id)?;
        let resp = self.send(op, url, None)?;
        decode(op, resp)
    }

    /// Deletes a binding.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Protocol`] unless the broker answers `200`.
    pub fn unbind(
        &self,
        instance_id: &str,
        binding_id: &str,
        request: &UnbindingRequest,
    ) -> Result<(), ClientError> {
        let mut url = self.binding_url(instance_id, binding_id)?;
        url.query_pairs_mut().extend_pairs(request.query_pairs());
        self.send(Operation::Unbind, url, None)?;
        Ok(())
    }

    fn instance_url(&self, instance_id: &str) -> Result<Url, ClientError> {
        self.endpoint(&["v2", "service_instances", instance_id])
    }

    fn binding_url(&self, instance_id: &str, binding_id: &str) -> Result<Url, ClientError> {
        self.endpoint(&[
            "v2",
            "service_instances",
            instance_id,
            "service_bindings",
            binding_id,
        ])
    }

    /// Appends percent-encoded path segments to the base URL.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ClientError::InvalidConfig("base_url cannot carry a path".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Sends one request and checks the status against the operation.
    fn send(
        &self,
        operation: Operation,
        url: Url,
        body: Option<Vec<u8>>,
    ) -> Result<BrokerResponse, ClientError> {
        let mut headers = self.headers.clone();
        if operation.has_body() {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }

        let request = BrokerRequest {
            operation,
            method: operation.method(),
            url,
            headers,
            body,
        };
        debug!(
            %operation,
            method = %request.method,
            url = %redacted(&request.url),
            "sending broker request"
        );

        let resp = self.transport.execute(request)?;
        if !operation.accepts(resp.status) {
            warn!(%operation, status = %resp.status, "broker rejected request");
            return Err(ClientError::Protocol {
                operation,
                status: resp.status,
                body: resp.body,
            });
        }

        debug!(%operation, status = %resp.status, "broker request succeeded");
        Ok(resp)
    }
}

/// Returns `url` with any embedded userinfo removed, for logging.
fn redacted(url: &Url) -> Url {
    let mut url = url.clone();
    // Only fails for URLs that cannot carry credentials in the first place.
    let _ = url.set_password(None);
    let _ = url.set_username("");
    url
}

/// Builds the headers every request carries.
fn common_headers(config: &ClientConfig) -> Result<HeaderMap, ClientError> {
    let credentials = BASE64.encode(format!("{}:{}", config.username, config.password));
    let mut auth = HeaderValue::from_str(&format!("Basic {credentials}"))
        .map_err(|e| ClientError::InvalidConfig(format!("invalid credentials: {e}")))?;
    auth.set_sensitive(true);

    let version = HeaderValue::from_str(&config.api_version)
        .map_err(|e| ClientError::InvalidConfig(format!("invalid api_version: {e}")))?;

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, auth);
    headers.insert(HeaderName::from_static(API_VERSION_HEADER), version);
    Ok(headers)
}

fn encode<B: Serialize>(operation: Operation, body: &B) -> Result<Vec<u8>, ClientError> {
    serde_json::to_vec(body).map_err(|source| ClientError::Encode { operation, source })
}

fn decode<R: DeserializeOwned>(
    operation: Operation,
    resp: BrokerResponse,
) -> Result<R, ClientError> {
    match serde_json::from_str(&resp.body) {
        Ok(value) => Ok(value),
        Err(source) => {
            warn!(%operation, error = %source, "failed to decode broker response");
            Err(ClientError::Decode {
                operation,
                body: resp.body,
                source,
            })
        }
    }
}
