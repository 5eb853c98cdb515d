// SPDX-License-Identifier: Apache-2.0

/// Environment variables read while resolving clients and demo settings
pub mod env {
    /// Path to the kubeconfig file, used verbatim when set
    pub const KUBECONFIG: &str = "KUBECONFIG";
    /// Optional kubeconfig context for the demo
    pub const KUBE_CONTEXT: &str = "KUBE_CONTEXT";
    pub const PROMETHEUS_NAMESPACE: &str = "PROMETHEUS_NAMESPACE";
    pub const VS_NAMESPACE: &str = "VS_NAMESPACE";
    pub const VS_NAME: &str = "VS_NAME";
}

/// Location of the kubeconfig relative to the home directory
pub const KUBE_DIR: &str = ".kube";
pub const KUBE_CONFIG_FILE: &str = "config";

/// Prometheus operator API
pub mod prometheus {
    pub const GROUP: &str = "monitoring.coreos.com";
    pub const VERSION: &str = "v1";
    pub const RULES: &str = "prometheusrules";
    pub const DEFAULT_NAMESPACE: &str = "prometheus";
}

/// Istio networking API
pub mod istio {
    pub const GROUP: &str = "networking.istio.io";
    pub const VERSION: &str = "v1beta1";
    pub const VIRTUAL_SERVICES: &str = "virtualservices";
    pub const VIRTUAL_SERVICE_KIND: &str = "VirtualService";
    /// Gateway name that binds a VirtualService to sidecars
    pub const MESH_GATEWAY: &str = "mesh";
    pub const DEFAULT_NAMESPACE: &str = "shencq";
    pub const DEFAULT_VS_NAME: &str = "nginx-vs";
}
