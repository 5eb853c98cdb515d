// SPDX-License-Identifier: Apache-2.0
pub mod config;
pub mod constants;
pub mod crd;
pub mod error;
pub mod istio;
pub mod kubernetes;
pub mod prometheus;
pub mod types;

#[cfg(test)]
pub mod test_utils;
