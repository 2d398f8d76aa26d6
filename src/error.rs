// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Error types.

use thiserror::Error;

use crate::types::key::ValidatorKey;

/// Registry construction failures. Any of these means the client cannot
/// operate and startup must abort.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("validator registry is empty")]
    Empty,

    #[error("duplicate validator key {key} at position {position} (first seen at {first})")]
    DuplicateKey {
        key: ValidatorKey,
        position: usize,
        first: usize,
    },

    #[error("validator key at position {position} is not a valid ed25519 point")]
    InvalidKey { position: usize },

    #[error("validator key at position {position} is not {expected} hex characters: {detail}")]
    InvalidEncoding {
        position: usize,
        expected: usize,
        detail: String,
    },

    #[error("too many validators: {count} (max {max})")]
    TooMany { count: usize, max: usize },
}

/// A claimed state that has no canonical encoding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CanonicalError {
    #[error("field `{field}` is not valid hex")]
    InvalidHex { field: &'static str },

    #[error("field `{field}` has {found} hex characters, expected {expected}")]
    WrongLength {
        field: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("wallet owner is not a valid ed25519 public key")]
    InvalidOwnerKey,

    #[error("wallet name is empty")]
    EmptyName,

    #[error("wallet name is {len} bytes, max {max}")]
    NameTooLong { len: usize, max: usize },

    #[error("wallet name contains a control character")]
    ControlCharacter,

    #[error("genesis block must not reference a previous block")]
    GenesisWithParent,

    #[error("block at height {height} has no previous block hash")]
    MissingParent { height: u64 },

    #[error("block without transactions has a non-empty transaction root")]
    TxRootWithoutTransactions,
}

pub type ConfigResult<T> = core::result::Result<T, ConfigError>;
pub type CanonicalResult<T> = core::result::Result<T, CanonicalError>;
