// SPDX-License-Identifier: Apache-2.0

//! Resource addressing and typed custom resource definitions.

pub mod gvr;
pub mod prometheus_rule;
pub mod virtual_service;

pub use gvr::GroupVersionResource;
pub use prometheus_rule::PrometheusRule;
pub use virtual_service::VirtualService;
