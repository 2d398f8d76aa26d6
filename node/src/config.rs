// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use std::net::SocketAddr;
use std::path::Path;

use quorum_kernel::registry::{ValidatorList, ValidatorRegistry};
use quorum_kernel::ConfigError;

use crate::errors::NodeError;

pub const ENV_BIND_ADDR: &str = "QUORUM_BIND_ADDR";
pub const ENV_VALIDATORS: &str = "QUORUM_VALIDATORS";
pub const ENV_VALIDATORS_FILE: &str = "QUORUM_VALIDATORS_FILE";
pub const ENV_GATEWAY_URL: &str = "QUORUM_GATEWAY_URL";
pub const ENV_APP_TITLE: &str = "QUORUM_APP_TITLE";

#[derive(Debug, Clone)]
pub struct NodeConfig {
    pub bind_addr: SocketAddr,
    /// Hex-encoded validator keys in registry order.
    pub validators: Vec<String>,
    /// Base URL of the untrusted API gateway.
    pub gateway_url: String,
    pub app_title: String,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            validators: Vec::new(),
            gateway_url: "http://127.0.0.1:8200".to_string(),
            app_title: "Cryptocurrency".to_string(),
        }
    }
}

impl NodeConfig {
    pub fn from_env() -> Result<Self, NodeError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key/value source. A validators file wins
    /// over an inline list.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, NodeError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(addr) = lookup(ENV_BIND_ADDR) {
            cfg.bind_addr = addr
                .parse()
                .map_err(|e| NodeError::InvalidConfig(format!("{}={}: {}", ENV_BIND_ADDR, addr, e)))?;
        }

        if let Some(path) = lookup(ENV_VALIDATORS_FILE) {
            cfg.validators = load_validator_file(&path)?;
        } else if let Some(list) = lookup(ENV_VALIDATORS) {
            cfg.validators = list
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
        }

        if let Some(url) = lookup(ENV_GATEWAY_URL) {
            cfg.gateway_url = url.trim_end_matches('/').to_string();
        }
        if let Some(title) = lookup(ENV_APP_TITLE) {
            cfg.app_title = title;
        }

        Ok(cfg)
    }

    /// Builds the validator registry. Failure here means the node must not start.
    pub fn registry(&self) -> Result<ValidatorRegistry, ConfigError> {
        ValidatorRegistry::from_hex(&self.validators)
    }
}

/// Reads a JSON validator list: a bare array of hex keys or `{ "validators": [...] }`.
pub fn load_validator_file(path: impl AsRef<Path>) -> Result<Vec<String>, NodeError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let list: ValidatorList = serde_json::from_str(&text)
        .map_err(|e| NodeError::InvalidConfig(format!("{}: {}", path.display(), e)))?;
    Ok(list.into_keys())
}
