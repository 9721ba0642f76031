//! Broker endpoints.
//!
//! Each [`Operation`] knows its HTTP method and which response statuses
//! count as success.

use std::fmt;

use reqwest::{Method, StatusCode};

/// Statuses accepted by read-only and delete calls.
const OK_ONLY: &[StatusCode] = &[StatusCode::OK];

/// Statuses accepted by calls that may create a resource.
const OK_OR_CREATED: &[StatusCode] = &[StatusCode::OK, StatusCode::CREATED];

/// A broker API operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `GET /v2/catalog`.
    Catalog,
    /// `PUT /v2/service_instances/{instance_id}`.
    Provision,
    /// `GET /v2/service_instances/{instance_id}`.
    GetInstance,
    /// `DELETE /v2/service_instances/{instance_id}`.
    Deprovision,
    /// `PUT /v2/service_instances/{instance_id}/service_bindings/{binding_id}`.
    Bind,
    /// `GET /v2/service_instances/{instance_id}/service_bindings/{binding_id}`.
    GetBinding,
    /// `DELETE /v2/service_instances/{instance_id}/service_bindings/{binding_id}`.
    Unbind,
}

impl Operation {
    /// Returns the HTTP method used by this operation.
    #[must_use]
    pub fn method(self) -> Method {
        match self {
            Self::Catalog | Self::GetInstance | Self::GetBinding => Method::GET,
            Self::Provision | Self::Bind => Method::PUT,
            Self::Deprovision | Self::Unbind => Method::DELETE,
        }
    }

    /// Returns the statuses treated as success.
    ///
    /// `201 Created` is only accepted where the broker may create a resource,
    /// plus `GetBinding`, which some brokers answer with the creation status.
    #[must_use]
    pub fn accepted_statuses(self) -> &'static [StatusCode] {
        match self {
            Self::Catalog | Self::GetInstance | Self::Deprovision | Self::Unbind => OK_ONLY,
            Self::Provision | Self::Bind | Self::GetBinding => OK_OR_CREATED,
        }
    }

    /// Returns true if `status` is a success for this operation.
    #[must_use]
    pub fn accepts(self, status: StatusCode) -> bool {
        self.accepted_statuses().contains(&status)
    }

    /// Returns true if the request carries a JSON body.
    #[must_use]
    pub fn has_body(self) -> bool {
        matches!(self, Self::Provision | Self::Bind)
    }

    /// Returns a short human-readable name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Catalog => "catalog",
            Self::Provision => "provision",
            Self::GetInstance => "get instance",
            Self::Deprovision => "deprovision",
            Self::Bind => "bind",
            Self::GetBinding => "get binding",
            Self::Unbind => "unbind",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
