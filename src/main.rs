// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use kube::api::{GetParams, PostParams};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use k8scrd::config::Config;
use k8scrd::crd::CrdClient;
use k8scrd::istio::{canary_virtual_service, spec_entries, virtual_services_gvr};
use k8scrd::kubernetes::ClientSet;
use k8scrd::prometheus::{list_rules, rule_names};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Running k8scrd demo");

    let config = Config::from_env()?;

    let clients = match &config.kubeconfig {
        Some(path) => ClientSet::from_path(path).await,
        None => ClientSet::new().await,
    }
    .context("Failed to create Kubernetes clients")?;

    // Every client below talks to the same context
    let clients = clients
        .with_context(&config.context)
        .await
        .with_context(|| format!("Failed to switch to context '{}'", config.context))?;
    let dynamic = clients.dynamic_client();

    // PrometheusRules through the typed client
    match list_rules(&clients.runtime_client(), &config.prometheus_namespace).await {
        Ok(rules) => {
            for rule in &rules {
                println!("{}", rule.metadata.name.as_deref().unwrap_or_default());
            }
        }
        Err(e) => error!("Failed to list PrometheusRules: {}", e),
    }

    // Same rules through the dynamic client
    info!("Listing PrometheusRules with the dynamic client");
    if let Err(e) = rule_names(&dynamic, "", &config.prometheus_namespace).await {
        error!("Failed to list PrometheusRules: {}", e);
    }

    // Istio VirtualService through the dynamic client
    info!("Getting VirtualService with the dynamic client");
    let vs = CrdClient::new(dynamic, &config.vs_namespace, virtual_services_gvr());

    let obj = match vs.get(&config.vs_name, &GetParams::default()).await {
        Ok(obj) => obj,
        Err(e) => {
            error!("Failed to get VirtualService {}/{}: {}", vs.namespace, config.vs_name, e);
            return Ok(());
        }
    };
    info!(
        "Got VirtualService {}/{}",
        vs.namespace,
        obj.metadata.name.as_deref().unwrap_or_default()
    );

    if let Some(spec) = spec_entries(&obj) {
        println!("VirtualService spec:");
        for (key, value) in spec {
            println!("{}: {}", key, value);
        }
    }

    // Unstructured create through the dynamic client
    let new_vs = canary_virtual_service(
        "test-crd-vs",
        &config.vs_namespace,
        "test.abc.com",
        &format!("test-crd-vs.{}.svc.cluster.local", config.vs_namespace),
        "stable",
    );
    if let Err(e) = vs.create(&new_vs, &PostParams::default()).await {
        error!("Failed to create VirtualService: {}", e);
        return Ok(());
    }

    // Read it back through the typed Istio client
    match clients
        .istio_client()
        .virtual_services(&config.vs_namespace)
        .get("test-crd-vs")
        .await
    {
        Ok(created) => info!(
            "VirtualService test-crd-vs serves hosts {:?}, stable subset routed: {}",
            created.spec.hosts,
            created.routes_to_subset("stable")
        ),
        Err(e) => error!("Failed to read back VirtualService: {}", e),
    }

    Ok(())
}
