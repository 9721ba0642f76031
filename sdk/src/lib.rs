//! OSBAPI SDK - Rust client library for the Open Service Broker API.
//!
//! This crate provides typed access to a service broker's catalog, service
//! instances and service bindings.
//!
//! # Wire Types
//!
//! - [`Catalog`], [`Service`], [`Plan`] — What the broker offers
//! - [`ProvisionRequest`], [`ProvisionResponse`], [`ServiceInstance`],
//!   [`DeprovisionRequest`] — Instance lifecycle
//! - [`BindingRequest`], [`ServiceBinding`], [`UnbindingRequest`] — Binding
//!   lifecycle
//!
//! # Client
//!
//! - [`BrokerClient`] — Blocking client bound to one broker
//! - [`ClientConfig`] — Base URL, credentials and API version
//! - [`ClientError`] — Transport, protocol and decode failures
//!
//! # Example
//!
//! ```rust
//! use osbapi_sdk::{BindingRequest, ClientConfig, UnbindingRequest};
//!
//! let config = ClientConfig::new("http://127.0.0.1:3000").with_basic_auth("admin", "password");
//! assert_eq!(config.api_version, "2.10");
//!
//! let bind = BindingRequest::new("service-id", "plan-id");
//! let unbind = UnbindingRequest::from(&bind);
//! assert_eq!(unbind.plan_id, "plan-id");
//! ```

pub mod client;
pub mod types;

pub use client::{BrokerClient, ClientConfig, ClientError, Operation, Transport};
pub use types::{
    BindingRequest, Catalog, DashboardClient, DeprovisionRequest, Plan, ProvisionRequest,
    ProvisionResponse, Service, ServiceBinding, ServiceInstance, UnbindingRequest,
};
