// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.

//! quorum-kernel: decides whether ledger state served by an untrusted gateway
//! carries enough validator signatures to be trusted.

pub mod config;
pub mod error;
pub mod types;
pub mod registry;
pub mod state;
pub mod canonical;
pub mod outcome;
pub mod verify;
pub mod book;

pub use book::ClaimBook;
pub use error::{CanonicalError, ConfigError};
pub use outcome::{RejectReason, VerificationResult, VerifiedState};
pub use registry::ValidatorRegistry;
pub use state::{Bundle, ClaimedState};
pub use verify::{evaluate, verify, Discard, Verdict};

#[cfg(test)]
pub mod tests;
