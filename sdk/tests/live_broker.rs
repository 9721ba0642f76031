//! Tests against a running broker, such as the overview broker.
//!
//! Ignored by default. Run with:
//!
//! ```text
//! OSBAPI_BROKER_URL=http://127.0.0.1:3000 OSBAPI_USERNAME=admin \
//! OSBAPI_PASSWORD=password OSBAPI_API_VERSION=2.13 \
//! cargo test -p osbapi-sdk --test live_broker -- --ignored --test-threads=1
//! ```

use osbapi_sdk::{
    BindingRequest, BrokerClient, ClientConfig, DeprovisionRequest, ProvisionRequest,
    UnbindingRequest,
};

const INSTANCE_ID: &str = "my-instance";
const BINDING_ID: &str = "my-binding";

fn client() -> BrokerClient {
    let config = ClientConfig::from_env().expect("OSBAPI_BROKER_URL must be set");
    BrokerClient::new(config).expect("broker client")
}

fn first_plan(client: &BrokerClient) -> (String, String) {
    let catalog = client.catalog().expect("catalog");
    let service = &catalog.services[0];
    (service.id.clone(), service.plans[0].id.clone())
}

#[test]
#[ignore = "requires a running broker"]
fn live_catalog() {
    let catalog = client().catalog().expect("catalog");
    assert_eq!(catalog.services[0].name, "overview-broker");
    assert_eq!(catalog.services[0].plans[0].name, "simple");
}

#[test]
#[ignore = "requires a running broker"]
fn live_instance_lifecycle() {
    let client = client();
    let (service_id, plan_id) = first_plan(&client);

    client
        .provision(
            INSTANCE_ID,
            &ProvisionRequest::new(&service_id, &plan_id, "org-id", "space-id"),
        )
        .expect("provision");

    let instance = client.get_instance(INSTANCE_ID).expect("get instance");
    assert_eq!(instance.service_id, service_id);
    assert_eq!(instance.plan_id, plan_id);

    client
        .deprovision(INSTANCE_ID, &DeprovisionRequest::new(&service_id, &plan_id))
        .expect("deprovision");

    let err = client.get_instance(INSTANCE_ID).expect_err("instance is gone");
    assert!(err.to_string().contains("Not Found"));
}

#[test]
#[ignore = "requires a running broker"]
fn live_binding_lifecycle() {
    let client = client();
    let (service_id, plan_id) = first_plan(&client);

    client
        .provision(
            INSTANCE_ID,
            &ProvisionRequest::new(&service_id, &plan_id, "org-id", "space-id"),
        )
        .expect("provision");

    let bind = BindingRequest::new(&service_id, &plan_id);
    client.bind(INSTANCE_ID, BINDING_ID, &bind).expect("bind");

    let binding = client
        .get_binding(INSTANCE_ID, BINDING_ID)
        .expect("get binding");
    assert!(binding.credentials_map().is_some());
    assert!(!binding.credential("username").unwrap_or_default().is_empty());
    assert!(!binding.credential("password").unwrap_or_default().is_empty());

    client
        .unbind(INSTANCE_ID, BINDING_ID, &UnbindingRequest::from(&bind))
        .expect("unbind");
    let err = client
        .get_binding(INSTANCE_ID, BINDING_ID)
        .expect_err("binding is gone");
    assert!(err.to_string().contains("Not Found"));

    client
        .deprovision(INSTANCE_ID, &DeprovisionRequest::new(&service_id, &plan_id))
        .expect("deprovision");
}
