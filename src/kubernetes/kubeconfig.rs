// SPDX-License-Identifier: Apache-2.0

//! Kubeconfig path resolution and REST config loading

use crate::constants::{env as vars, KUBE_CONFIG_FILE, KUBE_DIR};
use crate::error::{K8sCrdError, Result};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::Config as KConfig;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, instrument};

/// Resolve the kubeconfig path for this process.
///
/// An explicit path wins, then `KUBECONFIG`, then `$HOME/.kube/config`.
/// Returns the empty path when none of them is available.
pub fn kubeconfig_path(explicit: Option<&Path>) -> PathBuf {
    let env = std::env::var_os(vars::KUBECONFIG).map(PathBuf::from);
    resolve_kubeconfig_path(explicit, env.as_deref(), home::home_dir().as_deref())
}

/// Priority logic behind [`kubeconfig_path`], free of process state
pub fn resolve_kubeconfig_path(
    explicit: Option<&Path>,
    env: Option<&Path>,
    home: Option<&Path>,
) -> PathBuf {
    fn non_empty(p: Option<&Path>) -> Option<&Path> {
        p.filter(|p| !p.as_os_str().is_empty())
    }

    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    if let Some(path) = non_empty(env) {
        return path.to_path_buf();
    }
    match non_empty(home) {
        Some(home) => home.join(KUBE_DIR).join(KUBE_CONFIG_FILE),
        None => PathBuf::new(),
    }
}

/// Check if something exists at `path`, without following a final symlink.
///
/// Only a NotFound error counts as missing, so an unreadable file still exists.
pub fn file_exists(path: &Path) -> bool {
    if path.as_os_str().is_empty() {
        return false;
    }
    match std::fs::symlink_metadata(path) {
        Ok(_) => true,
        Err(e) => e.kind() != std::io::ErrorKind::NotFound,
    }
}

/// Build a REST config from the kubeconfig at `path`, or the in-cluster config
/// when no file is there.
#[instrument]
pub async fn rest_config(path: &Path) -> Result<KConfig> {
    if file_exists(path) {
        debug!("Loading kubeconfig from {}", path.display());
        load_kubeconfig(path, &KubeConfigOptions::default()).await
    } else {
        info!(
            "No kubeconfig found at '{}', using in-cluster configuration",
            path.display()
        );
        KConfig::incluster().map_err(|e| {
            error!("Failed to load in-cluster configuration: {}", e);
            K8sCrdError::KubeconfigError(format!("Failed to load in-cluster config: {}", e))
        })
    }
}

/// Build a REST config for `context` from the kubeconfig at `path`.
///
/// Returns `None` when the file does not exist or `context` is empty, leaving
/// the caller to fall back to its base config.
#[instrument]
pub async fn rest_config_with_context(path: &Path, context: &str) -> Result<Option<KConfig>> {
    if context.is_empty() || !file_exists(path) {
        return Ok(None);
    }

    let options = KubeConfigOptions {
        context: Some(context.to_string()),
        ..Default::default()
    };

    load_kubeconfig(path, &options).await.map(Some).map_err(|e| {
        error!("Switch kubeconfig context error: {}", e);
        e
    })
}

/// Build a REST config from kubeconfig YAML, e.g. one fetched from a secret
pub async fn rest_config_from_yaml(kubeconfig: &str, context: Option<&str>) -> Result<KConfig> {
    let parsed: Kubeconfig = serde_yaml::from_str(kubeconfig)
        .map_err(|e| K8sCrdError::KubeconfigError(format!("Failed to parse kubeconfig: {}", e)))?;

    let options = KubeConfigOptions {
        context: context.map(str::to_string),
        ..Default::default()
    };

    KConfig::from_custom_kubeconfig(parsed, &options)
        .await
        .map_err(|e| K8sCrdError::KubeconfigError(format!("Failed to create config: {}", e)))
}

async fn load_kubeconfig(path: &Path, options: &KubeConfigOptions) -> Result<KConfig> {
    let kubeconfig = Kubeconfig::read_from(path).map_err(|e| {
        error!("Failed to read kubeconfig {}: {}", path.display(), e);
        K8sCrdError::KubeconfigError(format!(
            "Failed to read kubeconfig {}: {}",
            path.display(),
            e
        ))
    })?;

    KConfig::from_custom_kubeconfig(kubeconfig, options)
        .await
        .map_err(|e| {
            error!("Failed to build config from {}: {}", path.display(), e);
            K8sCrdError::KubeconfigError(format!("Failed to create config: {}", e))
        })
}
