// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Canonical claim encoding.
//!
//! Every claim has exactly one byte encoding, and that encoding is what
//! validators sign. Layout:
//!
//! ```text
//! [format version: u8][kind tag: u8][fields...]
//! ```
//!
//! Integers are little-endian fixed width, digests and keys are raw 32-byte
//! values, strings are a `u16` little-endian byte length followed by UTF-8.

pub mod encode;

use crate::types::ClaimDigest;

/// Kind tags, second byte of every encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ClaimKind {
    Wallet = 1,
    Block = 2,
    Inclusion = 3,
}

/// A claim's signable bytes and their digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalClaim {
    bytes: Vec<u8>,
    digest: ClaimDigest,
}

impl CanonicalClaim {
    pub(crate) fn from_bytes(bytes: Vec<u8>) -> Self {
        let digest = ClaimDigest::of(&bytes);
        Self { bytes, digest }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn digest(&self) -> ClaimDigest {
        self.digest
    }

    pub fn kind(&self) -> Option<ClaimKind> {
        match self.bytes.get(1)? {
            1 => Some(ClaimKind::Wallet),
            2 => Some(ClaimKind::Block),
            3 => Some(ClaimKind::Inclusion),
            _ => None,
        }
    }
}
