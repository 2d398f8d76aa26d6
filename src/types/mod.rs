// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Wire-level value types shared by the registry and the verifier.

pub mod id;
pub mod key;
pub mod digest;
pub mod confirmation;

pub use confirmation::{Confirmation, SignatureBytes, ValidatorRef};
pub use digest::ClaimDigest;
pub use id::ValidatorIndex;
pub use key::ValidatorKey;
