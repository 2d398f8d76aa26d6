// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use core::fmt;

use serde::{Serialize, Serializer};

use crate::config::DIGEST_LEN;

/// BLAKE3 digest of a claim's canonical bytes. Two claims are the same claim
/// exactly when their digests are equal.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClaimDigest(pub [u8; DIGEST_LEN]);

impl ClaimDigest {
    pub fn of(canonical: &[u8]) -> Self {
        Self(blake3::hash(canonical).into())
    }

    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for ClaimDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for ClaimDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClaimDigest({}..)", hex::encode(&self.0[..8]))
    }
}

impl Serialize for ClaimDigest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}
