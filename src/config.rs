// SPDX-License-Identifier: Apache-2.0
use crate::constants::{env as vars, istio, prometheus};
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// Demo configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Explicit kubeconfig path, resolved further by the client factory when absent
    pub kubeconfig: Option<PathBuf>,
    /// Context to switch to, empty means the kubeconfig's current context
    pub context: String,
    pub prometheus_namespace: String,
    pub vs_namespace: String,
    pub vs_name: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let kubeconfig = non_empty(vars::KUBECONFIG).map(PathBuf::from);
        let context = non_empty(vars::KUBE_CONTEXT).unwrap_or_default();
        let vs_name = non_empty(vars::VS_NAME).unwrap_or_else(|| istio::DEFAULT_VS_NAME.to_string());

        if vs_name.contains('/') {
            anyhow::bail!("{} must be a plain object name, got {}", vars::VS_NAME, vs_name);
        }

        let prometheus_namespace = non_empty(vars::PROMETHEUS_NAMESPACE)
            .unwrap_or_else(|| prometheus::DEFAULT_NAMESPACE.to_string());
        let vs_namespace = non_empty(vars::VS_NAMESPACE)
            .unwrap_or_else(|| istio::DEFAULT_NAMESPACE.to_string());

        let kubeconfig = kubeconfig
            .map(|p| {
                if p.is_relative() {
                    env::current_dir()
                        .context("Failed to read current directory for relative KUBECONFIG")
                        .map(|cwd| cwd.join(p))
                } else {
                    Ok(p)
                }
            })
            .transpose()?;

        Ok(Config {
            kubeconfig,
            context,
            prometheus_namespace,
            vs_namespace,
            vs_name,
        })
    }
}
