// SPDX-License-Identifier: Apache-2.0

//! Client creation from a kubeconfig or the in-cluster environment

use crate::error::{K8sCrdError, Result};
use crate::istio::IstioClient;
use crate::kubernetes::dynamic::DynamicClient;
use crate::kubernetes::kubeconfig::{kubeconfig_path, rest_config, rest_config_with_context};
use crate::kubernetes::runtime::RuntimeClient;
use kube::{Client, Config as KConfig};
use std::path::{Path, PathBuf};
use tracing::{error, info, instrument};

/// Entry point holding the resolved kubeconfig, its REST config and a typed client.
///
/// Every other client is derived from the same REST config, optionally
/// switched to another context of the same kubeconfig file.
#[derive(Clone)]
pub struct ClientSet {
    kubeconfig: PathBuf,
    rest_config: KConfig,
    kube_client: Client,
}

impl ClientSet {
    /// Resolve the kubeconfig from `KUBECONFIG` or `$HOME/.kube/config`,
    /// falling back to the in-cluster config
    pub async fn new() -> Result<Self> {
        Self::from_kubeconfig(kubeconfig_path(None)).await
    }

    /// Same as [`new`](Self::new) with an explicit kubeconfig path
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_kubeconfig(kubeconfig_path(Some(path.as_ref()))).await
    }

    async fn from_kubeconfig(kubeconfig: PathBuf) -> Result<Self> {
        let rest_config = rest_config(&kubeconfig).await?;
        Self::from_config(kubeconfig, rest_config)
    }

    /// Wrap an already built REST config
    pub fn from_config(kubeconfig: PathBuf, rest_config: KConfig) -> Result<Self> {
        let kube_client = kube_client_from_config(rest_config.clone())?;
        info!(
            "Kubernetes client ready for {} (kubeconfig: '{}')",
            rest_config.cluster_url,
            kubeconfig.display()
        );

        Ok(Self {
            kubeconfig,
            rest_config,
            kube_client,
        })
    }

    /// Path of the kubeconfig in use, empty when running in-cluster without one
    pub fn kubeconfig(&self) -> &Path {
        &self.kubeconfig
    }

    /// REST config, for building clients not covered here
    pub fn rest_config(&self) -> &KConfig {
        &self.rest_config
    }

    pub fn kube_client(&self) -> Client {
        self.kube_client.clone()
    }

    /// Typed client for `context` of the same kubeconfig.
    ///
    /// Falls back to the base config when the kubeconfig file is missing or
    /// `context` is empty.
    #[instrument(skip(self))]
    pub async fn client_with_context(&self, context: &str) -> Result<Client> {
        let config = self.config_for_context(context).await?;
        kube_client_from_config(config)
    }

    pub fn dynamic_client(&self) -> DynamicClient {
        DynamicClient::new(self.kube_client())
    }

    /// Dynamic client for `context`, with the same fallback as
    /// [`client_with_context`](Self::client_with_context)
    #[instrument(skip(self))]
    pub async fn dynamic_client_with_context(&self, context: &str) -> Result<DynamicClient> {
        self.client_with_context(context).await.map(DynamicClient::new)
    }

    pub fn runtime_client(&self) -> RuntimeClient {
        RuntimeClient::new(self.kube_client())
    }

    #[instrument(skip(self))]
    pub async fn runtime_client_with_context(&self, context: &str) -> Result<RuntimeClient> {
        self.client_with_context(context).await.map(RuntimeClient::new)
    }

    pub fn istio_client(&self) -> IstioClient {
        IstioClient::new(self.kube_client())
    }

    #[instrument(skip(self))]
    pub async fn istio_client_with_context(&self, context: &str) -> Result<IstioClient> {
        self.client_with_context(context).await.map(IstioClient::new)
    }

    /// The same kubeconfig rebased onto `context`, so every client derived
    /// from the result talks to that context's cluster
    #[instrument(skip(self))]
    pub async fn with_context(&self, context: &str) -> Result<Self> {
        let rest_config = self.config_for_context(context).await?;
        Self::from_config(self.kubeconfig.clone(), rest_config)
    }

    pub(crate) async fn config_for_context(&self, context: &str) -> Result<KConfig> {
        Ok(rest_config_with_context(&self.kubeconfig, context)
            .await?
            .unwrap_or_else(|| self.rest_config.clone()))
    }
}

/// Build a typed client from a REST config
pub fn kube_client_from_config(config: KConfig) -> Result<Client> {
    Client::try_from(config).map_err(|e| {
        error!("Failed to create Kubernetes client: {}", e);
        K8sCrdError::KubeconfigError(format!("Failed to create client: {}", e))
    })
}
