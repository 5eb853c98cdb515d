// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for kubeconfig resolution and client creation.

pub mod client;
pub mod dynamic;
pub mod kubeconfig;
pub mod runtime;

pub use client::{kube_client_from_config, ClientSet};
pub use dynamic::{DynamicClient, DynamicResource};
pub use kubeconfig::{file_exists, kubeconfig_path, rest_config};
pub use runtime::RuntimeClient;
