//! Client for the Open Service Broker API.
//!
//! This module provides a type-safe, blocking client for talking to a single
//! service broker.
//!
//! # Example
//!
//! ```rust,no_run
//! use osbapi_sdk::client::{BrokerClient, ClientConfig};
//! use osbapi_sdk::types::ProvisionRequest;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::new("http://127.0.0.1:3000")
//!         .with_api_version("2.13")
//!         .with_basic_auth("admin", "password");
//!     let client = BrokerClient::new(config)?;
//!
//!     let catalog = client.catalog()?;
//!     let service = &catalog.services[0];
//!     let plan = &service.plans[0];
//!
//!     let request = ProvisionRequest::from_plan(service, plan, "org-id", "space-id");
//!     client.provision("my-instance", &request)?;
//!
//!     let instance = client.get_instance("my-instance")?;
//!     println!("{} is on plan {}", instance.service_id, instance.plan_id);
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod http;
pub mod operation;
pub mod transport;

pub use config::ClientConfig;
pub use error::ClientError;
pub use http::BrokerClient;
pub use operation::Operation;
pub use transport::{BrokerRequest, BrokerResponse, HttpTransport, Transport};
