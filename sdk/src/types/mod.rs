//! Wire types for the OSBAPI SDK.
//!
//! This module provides the request and response bodies exchanged with a
//! service broker. Field names match the snake_case wire format.

use serde::{Deserialize, Deserializer};

pub mod binding;
pub mod catalog;
pub mod instance;

pub use binding::{BindingRequest, ServiceBinding, UnbindingRequest};
pub use catalog::{Catalog, DashboardClient, Plan, Service};
pub use instance::{DeprovisionRequest, ProvisionRequest, ProvisionResponse, ServiceInstance};

/// Decodes `null` as the field's empty value.
///
/// Brokers written in Go serialize nil slices and unset fields as `null`.
pub(crate) fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
