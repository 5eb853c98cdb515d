// SPDX-License-Identifier: Apache-2.0

//! Istio VirtualService access, typed and unstructured

use crate::constants::istio::{GROUP, MESH_GATEWAY, VERSION, VIRTUAL_SERVICES, VIRTUAL_SERVICE_KIND};
use crate::types::{GroupVersionResource, VirtualService};
use kube::api::DynamicObject;
use kube::{Api, Client};

pub fn virtual_services_gvr() -> GroupVersionResource {
    GroupVersionResource::new(GROUP, VERSION, VIRTUAL_SERVICES)
}

/// Typed client for Istio networking resources
#[derive(Clone)]
pub struct IstioClient {
    client: Client,
}

impl IstioClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    /// VirtualServices in `namespace`; the empty namespace spans all namespaces
    pub fn virtual_services(&self, namespace: &str) -> Api<VirtualService> {
        if namespace.is_empty() {
            Api::all(self.client.clone())
        } else {
            Api::namespaced(self.client.clone(), namespace)
        }
    }
}

/// Unstructured VirtualService bound to the mesh that routes `host` to the
/// `subset` of `service_host`. The single http route is named `<name>-<subset>`.
pub fn canary_virtual_service(
    name: &str,
    namespace: &str,
    host: &str,
    service_host: &str,
    subset: &str,
) -> DynamicObject {
    let ar = virtual_services_gvr().api_resource_with_kind(VIRTUAL_SERVICE_KIND);

    let mut obj = DynamicObject::new(name, &ar).within(namespace);
    obj.data = serde_json::json!({
        "spec": {
            "gateways": [MESH_GATEWAY],
            "hosts": [host],
            "http": [{
                "name": format!("{}-{}", name, subset),
                "route": [{
                    "destination": {
                        "host": service_host,
                        "subset": subset
                    }
                }]
            }]
        }
    });
    obj
}

/// Top-level fields of an object's `spec`, if it has one
pub fn spec_entries(obj: &DynamicObject) -> Option<&serde_json::Map<String, serde_json::Value>> {
    obj.data.get("spec").and_then(|s| s.as_object())
}
