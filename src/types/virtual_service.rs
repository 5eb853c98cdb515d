// SPDX-License-Identifier: Apache-2.0
use kube::CustomResource;
use serde::{Deserialize, Serialize};

#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, Default, schemars::JsonSchema)]
#[kube(group = "networking.istio.io", version = "v1beta1", kind = "VirtualService")]
#[kube(namespaced)]
#[serde(rename_all = "camelCase")]
pub struct VirtualServiceSpec {
    #[serde(default)]
    pub hosts: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub gateways: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub http: Vec<HttpRoute>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HttpRoute {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub route: Vec<HttpRouteDestination>,
}

#[derive(Serialize, Deserialize, Clone, Debug, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HttpRouteDestination {
    pub destination: Destination,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub host: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<PortSelector>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, schemars::JsonSchema)]
pub struct PortSelector {
    pub number: u32,
}

impl VirtualService {
    /// All destinations across http routes, in declaration order
    pub fn destinations(&self) -> impl Iterator<Item = &Destination> {
        self.spec
            .http
            .iter()
            .flat_map(|r| r.route.iter())
            .map(|d| &d.destination)
    }

    /// Check if any route sends traffic to the given subset
    pub fn routes_to_subset(&self, subset: &str) -> bool {
        self.destinations()
            .any(|d| d.subset.as_deref() == Some(subset))
    }

    /// Check if this VirtualService applies to sidecars through the mesh gateway
    pub fn is_mesh_bound(&self) -> bool {
        self.spec.gateways.is_empty()
            || self
                .spec
                .gateways
                .iter()
                .any(|g| g == crate::constants::istio::MESH_GATEWAY)
    }
}
