// SPDX-License-Identifier: Apache-2.0
use crate::error::{K8sCrdError, Result};
use kube::api::ApiResource;
use std::fmt;
use std::str::FromStr;

/// Address of a Kubernetes resource collection.
///
/// The core API group is the empty string.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GroupVersionResource {
    pub group: String,
    pub version: String,
    pub resource: String,
}

impl GroupVersionResource {
    pub fn new(group: &str, version: &str, resource: &str) -> Self {
        Self {
            group: group.to_string(),
            version: version.to_string(),
            resource: resource.to_string(),
        }
    }

    /// `group/version`, or just `version` for the core group
    pub fn api_version(&self) -> String {
        if self.group.is_empty() {
            self.version.clone()
        } else {
            format!("{}/{}", self.group, self.version)
        }
    }

    /// The `ApiResource` used for URL construction.
    ///
    /// The kind is unknown from a GVR alone and left empty; objects sent to the
    /// server carry their own `apiVersion` and `kind`.
    pub fn api_resource(&self) -> ApiResource {
        ApiResource {
            group: self.group.clone(),
            version: self.version.clone(),
            api_version: self.api_version(),
            kind: String::new(),
            plural: self.resource.clone(),
        }
    }

    /// Same as [`api_resource`](Self::api_resource) with a known kind
    pub fn api_resource_with_kind(&self, kind: &str) -> ApiResource {
        ApiResource {
            kind: kind.to_string(),
            ..self.api_resource()
        }
    }
}

/// Formats as `resource.version.group`, the way kubectl prints fully qualified resources
impl fmt::Display for GroupVersionResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.group.is_empty() {
            write!(f, "{}.{}", self.resource, self.version)
        } else {
            write!(f, "{}.{}.{}", self.resource, self.version, self.group)
        }
    }
}

/// Accepts `group/version/resource`, `version/resource` (core group) or
/// `resource.version.group`.
impl FromStr for GroupVersionResource {
    type Err = K8sCrdError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || K8sCrdError::InvalidGvr(s.to_string());

        if s.contains('/') {
            let parts: Vec<&str> = s.split('/').collect();
            let gvr = match parts.as_slice() {
                [version, resource] => Self::new("", version, resource),
                [group, version, resource] if !group.is_empty() => {
                    Self::new(group, version, resource)
                }
                _ => return Err(invalid()),
            };
            if gvr.version.is_empty() || gvr.resource.is_empty() {
                return Err(invalid());
            }
            return Ok(gvr);
        }

        let Some((resource, rest)) = s.split_once('.') else {
            return Err(invalid());
        };
        let (version, group) = rest.split_once('.').unwrap_or((rest, ""));
        if resource.is_empty() || version.is_empty() {
            return Err(invalid());
        }

        Ok(Self::new(group, version, resource))
    }
}
