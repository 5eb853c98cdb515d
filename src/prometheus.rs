// SPDX-License-Identifier: Apache-2.0

//! PrometheusRule listing through the typed and the dynamic clients

use crate::constants::prometheus::{GROUP, RULES, VERSION};
use crate::error::Result;
use crate::kubernetes::{DynamicClient, RuntimeClient};
use crate::types::{GroupVersionResource, PrometheusRule};
use kube::api::ListParams;
use kube::ResourceExt;
use tracing::{info, instrument};

pub fn rules_gvr() -> GroupVersionResource {
    GroupVersionResource::new(GROUP, VERSION, RULES)
}

/// List PrometheusRules in `namespace` as typed objects
#[instrument(skip(client))]
pub async fn list_rules(client: &RuntimeClient, namespace: &str) -> Result<Vec<PrometheusRule>> {
    let list = client
        .list::<PrometheusRule>(namespace, &ListParams::default())
        .await?;
    Ok(list.items)
}

/// List PrometheusRule names in `namespace` through the dynamic client.
///
/// An empty `namespace` spans all namespaces, a non-empty `name` narrows the
/// list to that single rule.
#[instrument(skip(client))]
pub async fn rule_names(client: &DynamicClient, name: &str, namespace: &str) -> Result<Vec<String>> {
    let mut lp = ListParams::default();
    if !name.is_empty() {
        lp = lp.fields(&format!("metadata.name={}", name));
    }

    let list = client.resource(&rules_gvr()).namespace(namespace).list(&lp).await?;

    Ok(list
        .items
        .iter()
        .map(|rule| {
            let rule_name = rule.name_any();
            info!("Found PrometheusRule {}", rule_name);
            rule_name
        })
        .collect())
}
