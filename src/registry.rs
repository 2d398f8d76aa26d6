// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Validator Registry.
//!
//! The registry is the client's copy of the network's genesis validator set.
//! It is built once at startup and never changes for the rest of the session:
//! there is no `&mut self` API, so a verification call can only ever read it.
//! Sharing it across threads needs no lock.

use ed25519_dalek::VerifyingKey;
use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::config::{KEY_LEN, MAX_VALIDATORS};
use crate::error::{ConfigError, ConfigResult};
use crate::types::{ValidatorIndex, ValidatorKey, ValidatorRef};

/// Ordered, duplicate-free set of validator keys.
#[derive(Debug, Clone)]
pub struct ValidatorRegistry {
    keys: Vec<ValidatorKey>,
    verifying: Vec<VerifyingKey>,
    positions: FxHashMap<ValidatorKey, ValidatorIndex>,
}

impl ValidatorRegistry {
    /// Builds the registry from an ordered key list.
    ///
    /// Fails when the list is empty, has a duplicate, holds a key that is not
    /// a usable Ed25519 point, or is too long to be addressed by a `u16` index.
    pub fn load<I>(keys: I) -> ConfigResult<Self>
    where
        I: IntoIterator<Item = ValidatorKey>,
    {
        let keys: Vec<ValidatorKey> = keys.into_iter().collect();

        if keys.is_empty() {
            return Err(ConfigError::Empty);
        }
        if keys.len() > MAX_VALIDATORS {
            return Err(ConfigError::TooMany {
                count: keys.len(),
                max: MAX_VALIDATORS,
            });
        }

        let mut positions: FxHashMap<ValidatorKey, ValidatorIndex> = FxHashMap::default();
        positions.reserve(keys.len());
        let mut verifying = Vec::with_capacity(keys.len());

        for (position, key) in keys.iter().enumerate() {
            if let Some(first) = positions.get(key) {
                return Err(ConfigError::DuplicateKey {
                    key: *key,
                    position,
                    first: first.as_usize(),
                });
            }
            // Small-order keys could never pass strict verification.
            let point = key
                .verifying_key()
                .filter(|vk| !vk.is_weak())
                .ok_or(ConfigError::InvalidKey { position })?;

            verifying.push(point);
            positions.insert(*key, ValidatorIndex(position as u16));
        }

        tracing::debug!(size = keys.len(), "validator registry loaded");

        Ok(Self {
            keys,
            verifying,
            positions,
        })
    }

    /// Builds the registry from hex-encoded keys, as found in configuration.
    pub fn from_hex<I, S>(keys: I) -> ConfigResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let parsed = keys
            .into_iter()
            .enumerate()
            .map(|(position, s)| {
                ValidatorKey::from_hex(s.as_ref().trim()).map_err(|e| ConfigError::InvalidEncoding {
                    position,
                    expected: KEY_LEN * 2,
                    detail: e.to_string(),
                })
            })
            .collect::<ConfigResult<Vec<_>>>()?;

        Self::load(parsed)
    }

    /// Number of validators `n`.
    pub fn size(&self) -> usize {
        self.keys.len()
    }

    pub fn contains(&self, key: &ValidatorKey) -> bool {
        self.positions.contains_key(key)
    }

    /// `floor(2n/3) + 1` distinct confirmations are needed to trust a claim.
    pub fn quorum_threshold(&self) -> usize {
        quorum_threshold(self.size())
    }

    /// `n - q`: how many validators may be faulty or silent while a quorum
    /// can still form.
    pub fn fault_tolerance(&self) -> usize {
        self.size() - self.quorum_threshold()
    }

    pub fn index_of(&self, key: &ValidatorKey) -> Option<ValidatorIndex> {
        self.positions.get(key).copied()
    }

    pub fn get(&self, index: ValidatorIndex) -> Option<&ValidatorKey> {
        self.keys.get(index.as_usize())
    }

    /// Maps a confirmation's signer reference to a registry slot.
    pub fn resolve(&self, reference: &ValidatorRef) -> Option<(ValidatorIndex, &VerifyingKey)> {
        let index = match reference {
            ValidatorRef::Index(index) => *index,
            ValidatorRef::Key(key) => self.index_of(key)?,
            ValidatorRef::Unresolvable(_) => return None,
        };
        self.verifying.get(index.as_usize()).map(|vk| (index, vk))
    }

    pub fn iter(&self) -> impl Iterator<Item = (ValidatorIndex, &ValidatorKey)> {
        self.keys
            .iter()
            .enumerate()
            .map(|(i, key)| (ValidatorIndex(i as u16), key))
    }

    pub fn keys(&self) -> &[ValidatorKey] {
        &self.keys
    }
}

/// Byzantine quorum size for `n` validators.
pub fn quorum_threshold(n: usize) -> usize {
    2 * n / 3 + 1
}

/// Validator list as written in a configuration file: either a bare array of
/// hex keys or an object with a `validators` array.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ValidatorList {
    Bare(Vec<String>),
    Wrapped { validators: Vec<String> },
}

impl ValidatorList {
    pub fn into_keys(self) -> Vec<String> {
        match self {
            ValidatorList::Bare(keys) => keys,
            ValidatorList::Wrapped { validators } => validators,
        }
    }

    pub fn into_registry(self) -> ConfigResult<ValidatorRegistry> {
        ValidatorRegistry::from_hex(self.into_keys())
    }
}
