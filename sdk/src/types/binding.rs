//! Service binding types for the OSBAPI SDK.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of `PUT /v2/service_instances/{instance_id}/service_bindings/{binding_id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingRequest {
    /// ID of the service the instance was provisioned from.
    pub service_id: String,

    /// ID of the plan the instance is on.
    pub plan_id: String,
}

impl BindingRequest {
    /// Creates a binding request.
    #[must_use]
    pub fn new(service_id: impl Into<String>, plan_id: impl Into<String>) -> Self {
        Self {
            service_id: service_id.into(),
            plan_id: plan_id.into(),
        }
    }
}

/// A service binding.
///
/// Credential schemas are broker-defined, so they are kept as raw JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceBinding {
    /// Credentials granting access to the instance.
    pub credentials: Value,
}

impl ServiceBinding {
    /// Returns the credentials if they are a JSON object.
    #[must_use]
    pub fn credentials_map(&self) -> Option<&Map<String, Value>> {
        self.credentials.as_object()
    }

    /// Returns a string credential by key.
    #[must_use]
    pub fn credential(&self, key: &str) -> Option<&str> {
        self.credentials.get(key).and_then(Value::as_str)
    }
}

/// Query parameters of
/// `DELETE /v2/service_instances/{instance_id}/service_bindings/{binding_id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnbindingRequest {
    /// ID of the service the instance was provisioned from.
    pub service_id: String,

    /// ID of the plan the instance is on.
    pub plan_id: String,
}

impl UnbindingRequest {
    /// Creates an unbinding request.
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

impl From<&BindingRequest> for UnbindingRequest {
    fn from(req: &BindingRequest) -> Self {
        Self::new(&req.service_id, &req.plan_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binding_credentials_object() {
        let binding: ServiceBinding = serde_json::from_str(
            r#"{"credentials": {"username": "admin", "password": "secret", "port": 5432}}"#,
        )
        .expect("deserialize");

        assert_eq!(binding.credential("username"), Some("admin"));
        assert_eq!(binding.credential("password"), Some("secret"));
        assert_eq!(binding.credential("port"), None);
        assert_eq!(binding.credentials_map().map(Map::len), Some(3));
    }

    #[test]
    fn test_binding_credentials_opaque() {
        let binding: ServiceBinding =
            serde_json::from_str(r#"{"credentials": "postgres://u:p@host/db"}"#)
                .expect("deserialize");
        assert!(binding.credentials_map().is_none());
        assert_eq!(binding.credentials.as_str(), Some("postgres://u:p@host/db"));

        let missing: ServiceBinding = serde_json::from_str("{}").expect("deserialize");
        assert!(missing.credentials.is_null());
        assert_eq!(missing.credential("username"), None);
    }

    #[test]
    fn test_unbinding_from_binding() {
        let bind = BindingRequest::new("svc", "plan");
        assert_eq!(
            serde_json::to_string(&bind).expect("serialize"),
            r#"{"service_id":"svc","plan_id":"plan"}"#
        );

        let unbind = UnbindingRequest::from(&bind);
        assert_eq!(
            unbind.query_pairs(),
            [("service_id", "svc"), ("plan_id", "plan")]
        );
    }
}
