//! Catalog types for the OSBAPI SDK.
//!
//! Provides the service offerings and plans a broker advertises.

use serde::{Deserialize, Deserializer, Serialize};

use super::null_default;

/// The services a broker offers, as returned by `GET /v2/catalog`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    /// Advertised services, in broker order.
    #[serde(deserialize_with = "null_default")]
    pub services: Vec<Service>,
}

impl Catalog {
    /// Returns the service with the given ID.
    #[must_use]
    pub fn service(&self, id: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.id == id)
    }

    /// Returns the first service with the given name.
    #[must_use]
    pub fn service_by_name(&self, name: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.name == name)
    }
}

/// A service offering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Service {
    /// Service name.
    #[serde(deserialize_with = "null_default")]
    pub name: String,

    /// Human-readable description.
    #[serde(deserialize_with = "null_default")]
    pub description: String,

    /// Service ID, unique within the broker.
    #[serde(deserialize_with = "null_default")]
    pub id: String,

    /// Tags for categorisation.
    #[serde(deserialize_with = "null_default")]
    pub tags: Vec<String>,

    /// Whether instances of this service can be bound.
    #[serde(deserialize_with = "null_default")]
    pub bindable: bool,

    /// Whether instances can change plan.
    #[serde(deserialize_with = "null_default")]
    pub plan_updateable: bool,

    /// Whether bindings can be fetched with `GET`.
    #[serde(deserialize_with = "null_default")]
    pub bindings_retrievable: bool,

    /// Whether instances can be fetched with `GET`.
    #[serde(deserialize_with = "null_default")]
    pub instances_retrievable: bool,

    /// Plans offered for this service, in broker order.
    #[serde(deserialize_with = "null_default")]
    pub plans: Vec<Plan>,

    /// Platform permissions the service requires (e.g. `syslog_drain`).
    #[serde(deserialize_with = "null_default")]
    pub requires: Vec<String>,

    /// Dashboard SSO clients.
    #[serde(deserialize_with = "one_or_many")]
    pub dashboard_client: Vec<DashboardClient>,
}

impl Service {
    /// Returns the plan with the given ID.
    #[must_use]
    pub fn plan(&self, id: &str) -> Option<&Plan> {
        self.plans.iter().find(|p| p.id == id)
    }

    /// Returns the first plan with the given name.
    #[must_use]
    pub fn plan_by_name(&self, name: &str) -> Option<&Plan> {
        self.plans.iter().find(|p| p.name == name)
    }
}

/// Dashboard SSO client registration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardClient {
    /// OAuth client ID.
    #[serde(deserialize_with = "null_default")]
    pub id: String,

    /// OAuth client secret.
    #[serde(deserialize_with = "null_default")]
    pub secret: String,

    /// Redirect URI for the dashboard.
    #[serde(deserialize_with = "null_default")]
    pub redirect_uri: String,
}

/// A service plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Plan {
    /// Plan name.
    #[serde(deserialize_with = "null_default")]
    pub name: String,

    /// Human-readable description.
    #[serde(deserialize_with = "null_default")]
    pub description: String,

    /// Plan ID, unique within the broker.
    #[serde(deserialize_with = "null_default")]
    pub id: String,

    /// Whether the plan is free of charge.
    #[serde(deserialize_with = "null_default")]
    pub free: bool,

    /// Whether instances on this plan can be bound.
    #[serde(deserialize_with = "null_default")]
    pub bindable: bool,
}

// Brokers send `dashboard_client` either as a single object or as a list.
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<DashboardClient>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        Many(Vec<DashboardClient>),
        One(DashboardClient),
    }

    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        Some(OneOrMany::Many(clients)) => clients,
        Some(OneOrMany::One(client)) => vec![client],
        None => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const OVERVIEW_CATALOG: &str = r#"{
        "services": [{
            "name": "overview-broker",
            "description": "Provides an overview of any service instances and bindings that have been created by a platform.",
            "id": "5d6a3a4c-3c2f-4d4a-8a57-8f0e1d3c2b1a",
            "tags": ["overview-broker"],
            "bindable": true,
            "plan_updateable": true,
            "bindings_retrievable": true,
            "instances_retrievable": true,
            "requires": [],
            "plans": [
                {
                    "name": "simple",
                    "description": "A plan with no configuration parameters.",
                    "id": "9f0b1a3e-1b7c-4e2a-9d3b-6a2f4c8d0e11",
                    "free": true
                },
                {
                    "name": "complex",
                    "description": "A plan with lots of configuration parameters.",
                    "id": "2b1e7d4c-5a6f-4b3e-8c9d-0e1f2a3b4c5d",
                    "free": false,
                    "bindable": true
                }
            ],
            "dashboard_client": {
                "id": "dashboard-id",
                "secret": "dashboard-secret",
                "redirect_uri": "http://localhost:3000/dashboard"
            }
        }]
    }"#;

    #[test]
    fn test_catalog_parses_overview_broker() {
        let catalog: Catalog = serde_json::from_str(OVERVIEW_CATALOG).expect("catalog");
        assert_eq!(catalog.services.len(), 1);

        let service = &catalog.services[0];
        assert_eq!(service.name, "overview-broker");
        assert!(service.bindable);
        assert!(service.instances_retrievable);
        assert_eq!(service.tags, vec!["overview-broker".to_string()]);
        assert_eq!(service.plans[0].name, "simple");
        assert!(service.plans[0].free);
        assert!(!service.plans[0].bindable);
        assert_eq!(service.dashboard_client.len(), 1);
        assert_eq!(service.dashboard_client[0].secret, "dashboard-secret");
    }

    #[test]
    fn test_catalog_missing_fields_default() {
        let catalog: Catalog =
            serde_json::from_str(r#"{"services": [{"name": "bare", "id": "s1"}]}"#)
                .expect("catalog");
        let service = &catalog.services[0];
        assert!(service.plans.is_empty());
        assert!(service.dashboard_client.is_empty());
        assert!(!service.plan_updateable);
        assert_eq!(service.description, "");

        let empty: Catalog = serde_json::from_str("{}").expect("empty catalog");
        assert!(empty.services.is_empty());
    }

    #[test]
    fn test_dashboard_client_list_and_null() {
        let listed: Service = serde_json::from_str(
            r#"{"dashboard_client": [{"id": "a"}, {"id": "b", "redirect_uri": "http://b"}]}"#,
        )
        .expect("service");
        assert_eq!(listed.dashboard_client.len(), 2);
        assert_eq!(listed.dashboard_client[1].redirect_uri, "http://b");

        let null: Service =
            serde_json::from_str(r#"{"dashboard_client": null}"#).expect("service");
        assert!(null.dashboard_client.is_empty());
    }

    #[test]
    fn test_catalog_null_fields_default() {
        let catalog: Catalog = serde_json::from_str(
            r#"{"services": [{
                "name": "s",
                "id": "1",
                "description": null,
                "tags": null,
                "requires": null,
                "bindable": null,
                "plans": [{"name": "p", "id": "2", "description": null, "free": null}]
            }]}"#,
        )
        .expect("catalog with nulls");
        let service = &catalog.services[0];
        assert_eq!(service.description, "");
        assert!(service.tags.is_empty());
        assert!(service.requires.is_empty());
        assert!(!service.bindable);
        assert_eq!(service.plans[0].description, "");
        assert!(!service.plans[0].free);

        let null_services: Catalog =
            serde_json::from_str(r#"{"services": null}"#).expect("null services");
        assert!(null_services.services.is_empty());

        let null_plans: Service =
            serde_json::from_str(r#"{"name": "s", "plans": null}"#).expect("null plans");
        assert!(null_plans.plans.is_empty());
    }

    #[test]
    fn test_catalog_lookups() {
        let catalog: Catalog = serde_json::from_str(OVERVIEW_CATALOG).expect("catalog");

        let service = catalog.service_by_name("overview-broker").expect("by name");
        assert_eq!(
            catalog.service(&service.id).map(|s| s.name.as_str()),
            Some("overview-broker")
        );
        assert!(catalog.service("missing").is_none());

        let plan = service.plan_by_name("complex").expect("plan by name");
        assert_eq!(service.plan(&plan.id), Some(plan));
        assert!(service.plan_by_name("missing").is_none());
    }
}
