// SPDX-License-Identifier: Apache-2.0

//! Untyped access to any resource addressed by group, version and resource

use crate::types::GroupVersionResource;
use kube::api::{ApiResource, DynamicObject};
use kube::{Api, Client};

/// Client for resources that have no Rust type, handled as [`DynamicObject`]s
#[derive(Clone)]
pub struct DynamicClient {
    client: Client,
}

impl DynamicClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Select a resource collection
    pub fn resource(&self, gvr: &GroupVersionResource) -> DynamicResource {
        DynamicResource {
            client: self.client.clone(),
            ar: gvr.api_resource(),
        }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}

/// A resource collection selected from a [`DynamicClient`]
pub struct DynamicResource {
    client: Client,
    ar: ApiResource,
}

impl DynamicResource {
    /// Api scoped to `namespace`; the empty namespace spans all namespaces
    pub fn namespace(&self, namespace: &str) -> Api<DynamicObject> {
        if namespace.is_empty() {
            self.all()
        } else {
            Api::namespaced_with(self.client.clone(), namespace, &self.ar)
        }
    }

    /// Api across all namespaces, or for a cluster-scoped resource
    pub fn all(&self) -> Api<DynamicObject> {
        Api::all_with(self.client.clone(), &self.ar)
    }

    pub fn api_resource(&self) -> &ApiResource {
        &self.ar
    }
}
