// SPDX-License-Identifier: Apache-2.0

//! CRUD helper bound to one resource collection and namespace

use crate::error::{K8sCrdError, Result};
use crate::kubernetes::DynamicClient;
use crate::types::GroupVersionResource;
use futures::Stream;
use kube::api::{
    DeleteParams, DynamicObject, GetParams, ListParams, ObjectList, Patch, PatchParams,
    PostParams,
};
use kube::Api;
use kube_runtime::watcher::{self, Config as WatcherConfig};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Wire format of a patch body
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PatchType {
    /// RFC 6902 JSON patch
    Json,
    /// RFC 7386 JSON merge patch
    Merge,
    /// Kubernetes strategic merge patch
    Strategic,
    /// Server-side apply, needs a field manager in the patch params
    Apply,
}

/// Untyped client for `gvr` in `namespace`
#[derive(Clone)]
pub struct CrdClient {
    pub client: DynamicClient,
    pub namespace: String,
    pub gvr: GroupVersionResource,
}

impl CrdClient {
    pub fn new(client: DynamicClient, namespace: &str, gvr: GroupVersionResource) -> Self {
        Self {
            client,
            namespace: namespace.to_string(),
            gvr,
        }
    }

    fn api(&self) -> Api<DynamicObject> {
        self.client.resource(&self.gvr).namespace(&self.namespace)
    }

    #[instrument(skip(self, gp), fields(gvr = %self.gvr, namespace = %self.namespace))]
    pub async fn get(&self, name: &str, gp: &GetParams) -> Result<DynamicObject> {
        Ok(self.api().get_with(name, gp).await?)
    }

    #[instrument(skip(self, lp), fields(gvr = %self.gvr, namespace = %self.namespace))]
    pub async fn list(&self, lp: &ListParams) -> Result<ObjectList<DynamicObject>> {
        let list = self.api().list(lp).await?;
        debug!("Listed {} objects", list.items.len());
        Ok(list)
    }

    /// Create an object from anything that serializes to a full Kubernetes object
    #[instrument(skip(self, data, pp), fields(gvr = %self.gvr, namespace = %self.namespace))]
    pub async fn create<T: Serialize>(&self, data: &T, pp: &PostParams) -> Result<DynamicObject> {
        let obj = to_dynamic_object(data)?;
        let created = self.api().create(pp, &obj).await?;
        info!(
            "Created {} {}/{}",
            self.gvr,
            self.namespace,
            created.metadata.name.as_deref().unwrap_or_default()
        );
        Ok(created)
    }

    /// Replace an object; the name is taken from its metadata
    #[instrument(skip(self, data, pp), fields(gvr = %self.gvr, namespace = %self.namespace))]
    pub async fn update<T: Serialize>(&self, data: &T, pp: &PostParams) -> Result<DynamicObject> {
        let obj = to_dynamic_object(data)?;
        let Some(name) = obj.metadata.name.clone() else {
            return Err(K8sCrdError::InvalidObject(
                "can not update an object without metadata.name".to_string(),
            ));
        };
        Ok(self.api().replace(&name, pp, &obj).await?)
    }

    #[instrument(skip(self, dp), fields(gvr = %self.gvr, namespace = %self.namespace))]
    pub async fn delete(&self, name: &str, dp: &DeleteParams) -> Result<()> {
        self.api().delete(name, dp).await?;
        info!("Deleted {} {}/{}", self.gvr, self.namespace, name);
        Ok(())
    }

    /// Patch `name` with a raw JSON body interpreted according to `pt`
    #[instrument(skip(self, data, pp), fields(gvr = %self.gvr, namespace = %self.namespace))]
    pub async fn patch(
        &self,
        name: &str,
        pt: PatchType,
        data: &[u8],
        pp: &PatchParams,
    ) -> Result<DynamicObject> {
        let patch = to_patch(pt, data)?;
        Ok(self.api().patch(name, pp, &patch).await?)
    }

    /// Watch the collection; the stream starts with the current state and
    /// follows changes, relisting when the server expires the watch.
    pub fn watch(
        &self,
        config: WatcherConfig,
    ) -> impl Stream<Item = std::result::Result<watcher::Event<DynamicObject>, watcher::Error>> + Send
    {
        debug!("Watching {} in '{}'", self.gvr, self.namespace);
        watcher::watcher(self.api(), config)
    }
}

fn to_dynamic_object<T: Serialize>(data: &T) -> Result<DynamicObject> {
    let value = serde_json::to_value(data)?;
    let invalid = |reason: &str| {
        K8sCrdError::InvalidObject(format!(
            "can not parse data = {} to DynamicObject: {}",
            value, reason
        ))
    };

    if !value.is_object() {
        return Err(invalid("not an object"));
    }

    let obj: DynamicObject =
        serde_json::from_value(value.clone()).map_err(|e| invalid(&e.to_string()))?;
    if obj.types.is_none() {
        return Err(invalid("missing apiVersion or kind"));
    }

    Ok(obj)
}

fn to_patch(pt: PatchType, data: &[u8]) -> Result<Patch<serde_json::Value>> {
    let invalid = |e: serde_json::Error| {
        K8sCrdError::InvalidObject(format!("can not decode {:?} patch: {}", pt, e))
    };

    Ok(match pt {
        PatchType::Json => Patch::Json(serde_json::from_slice(data).map_err(invalid)?),
        PatchType::Merge => Patch::Merge(serde_json::from_slice(data).map_err(invalid)?),
        PatchType::Strategic => Patch::Strategic(serde_json::from_slice(data).map_err(invalid)?),
        PatchType::Apply => Patch::Apply(serde_json::from_slice(data).map_err(invalid)?),
    })
}
