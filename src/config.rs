// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Configuration constants.

/// Length in bytes of a validator public key (Ed25519).
pub const KEY_LEN: usize = 32;

/// Length in bytes of a confirmation signature (Ed25519).
pub const SIGNATURE_LEN: usize = 64;

/// Length in bytes of every digest carried by a claim.
pub const DIGEST_LEN: usize = 32;

/// Version byte prefixed to every canonical encoding.
pub const CANONICAL_FORMAT_VERSION: u8 = 1;

/// Maximum size in bytes of a wallet name.
pub const MAX_NAME_LEN: usize = 64;

/// Validators are addressed by a `u16` index.
pub const MAX_VALIDATORS: usize = u16::MAX as usize + 1;
