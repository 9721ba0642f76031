//! Service instance types for the OSBAPI SDK.
//!
//! Provides the request and response bodies for provisioning, fetching and
//! deprovisioning service instances.

use serde::{Deserialize, Serialize};

use super::catalog::{Plan, Service};
use super::null_default;

/// Body of `PUT /v2/service_instances/{instance_id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvisionRequest {
    /// ID of the service to provision.
    pub service_id: String,

    /// ID of the plan to provision.
    pub plan_id: String,

    /// Platform organization the instance belongs to.
    pub organization_guid: String,

    /// Platform space the instance belongs to.
    pub space_guid: String,
}

impl ProvisionRequest {
    /// Creates a provision request.
    #[must_use]
    pub fn new(
        service_id: impl Into<String>,
        plan_id: impl Into<String>,
        organization_guid: impl Into<String>,
        space_guid: impl Into<String>,
    ) -> Self {
        Self {
            service_id: service_id.into(),
            plan_id: plan_id.into(),
            organization_guid: organization_guid.into(),
            space_guid: space_guid.into(),
        }
    }

    /// Creates a provision request for a plan taken from the catalog.
    #[must_use]
    pub fn from_plan(
        service: &Service,
        plan: &Plan,
        organization_guid: impl Into<String>,
        space_guid: impl Into<String>,
    ) -> Self {
        Self::new(&service.id, &plan.id, organization_guid, space_guid)
    }
}

/// Response to a successful provision.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProvisionResponse {
    /// URL of the instance's management dashboard.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dashboard_url: Option<String>,

    /// Broker operation token for asynchronous provisioning.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
}

impl ProvisionResponse {
    /// Returns true if the broker handed back an operation to poll.
    ///
    /// The client never polls; the token is surfaced for the caller.
    #[must_use]
    pub fn is_async(&self) -> bool {
        self.operation.as_deref().is_some_and(|op| !op.is_empty())
    }
}

/// A service instance as returned by `GET /v2/service_instances/{instance_id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceInstance {
    /// ID of the service the instance was provisioned from.
    #[serde(deserialize_with = "null_default")]
    pub service_id: String,

    /// ID of the plan the instance is on.
    #[serde(deserialize_with = "null_default")]
    pub plan_id: String,

    /// URL of the instance's management dashboard.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dashboard_url: Option<String>,
}

/// Query parameters of `DELETE /v2/service_instances/{instance_id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeprovisionRequest {
    /// ID of the service the instance was provisioned from.
    pub service_id: String,

    /// ID of the plan the instance is on.
    pub plan_id: String,
}

impl DeprovisionRequest {
    /// Creates a deprovision request.
    #[must_use]
    pub fn new(service_id: impl Into<String>, plan_id: impl Into<String>) -> Self {
        Self {
            service_id: service_id.into(),
            plan_id: plan_id.into(),
        }
    }

    /// Returns the request as URL query pairs.
    #[must_use]
    pub fn query_pairs(&self) -> [(&'static str, &str); 2] {
        [
            ("service_id", self.service_id.as_str()),
            ("plan_id", self.plan_id.as_str()),
        ]
    }
}

impl From<&ProvisionRequest> for DeprovisionRequest {
    fn from(req: &ProvisionRequest) -> Self {
        Self::new(&req.service_id, &req.plan_id)
    }
}
