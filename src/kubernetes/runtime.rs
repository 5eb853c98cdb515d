// SPDX-License-Identifier: Apache-2.0

//! Typed access to any resource that has a Rust type

use crate::error::Result;
use k8s_openapi::NamespaceResourceScope;
use kube::api::{ListParams, ObjectList};
use kube::{Api, Client, Resource};
use serde::de::DeserializeOwned;
use std::fmt::Debug;
use tracing::instrument;

/// Client addressing resources through their Rust types, both built-in
/// (`k8s-openapi`) and custom (`#[derive(CustomResource)]`)
#[derive(Clone)]
pub struct RuntimeClient {
    client: Client,
}

impl RuntimeClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Api for `K` in `namespace`; the empty namespace spans all namespaces
    pub fn namespaced<K>(&self, namespace: &str) -> Api<K>
    where
        K: Resource<Scope = NamespaceResourceScope>,
        K::DynamicType: Default,
    {
        if namespace.is_empty() {
            Api::all(self.client.clone())
        } else {
            Api::namespaced(self.client.clone(), namespace)
        }
    }

    pub fn all<K>(&self) -> Api<K>
    where
        K: Resource,
        K::DynamicType: Default,
    {
        Api::all(self.client.clone())
    }

    #[instrument(skip(self, lp), fields(kind = %K::kind(&Default::default())))]
    pub async fn list<K>(&self, namespace: &str, lp: &ListParams) -> Result<ObjectList<K>>
    where
        K: Resource<Scope = NamespaceResourceScope> + Clone + DeserializeOwned + Debug,
        K::DynamicType: Default,
    {
        Ok(self.namespaced::<K>(namespace).list(lp).await?)
    }

    #[instrument(skip(self), fields(kind = %K::kind(&Default::default())))]
    pub async fn get<K>(&self, namespace: &str, name: &str) -> Result<K>
    where
        K: Resource<Scope = NamespaceResourceScope> + Clone + DeserializeOwned + Debug,
        K::DynamicType: Default,
    {
        Ok(self.namespaced::<K>(namespace).get(name).await?)
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}
