// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Verification outcomes.
//!
//! A rejection is an expected answer ("not trustworthy yet"), not a failure,
//! so it is returned as data and never as an `Err`.

use crate::error::CanonicalError;
use crate::state::ClaimedState;
use crate::types::{ClaimDigest, ValidatorIndex};

/// A state that reached quorum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedState {
    pub state: ClaimedState,
    pub digest: ClaimDigest,
    /// Registry indices of the validators whose confirmation counted, ascending.
    pub signers: Vec<ValidatorIndex>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    /// The state has no canonical encoding; no signature was checked.
    MalformedState(CanonicalError),
    EmptyConfirmationSet,
    InsufficientQuorum { valid_count: usize, required: usize },
}

impl RejectReason {
    /// Short machine-readable name.
    pub fn code(&self) -> &'static str {
        match self {
            RejectReason::MalformedState(_) => "malformed_state",
            RejectReason::EmptyConfirmationSet => "empty_confirmation_set",
            RejectReason::InsufficientQuorum { .. } => "insufficient_quorum",
        }
    }
}

impl core::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RejectReason::MalformedState(e) => write!(f, "malformed state: {}", e),
            RejectReason::EmptyConfirmationSet => f.write_str("no confirmations"),
            RejectReason::InsufficientQuorum {
                valid_count,
                required,
            } => write!(f, "{} of {} required confirmations", valid_count, required),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationResult {
    Verified(VerifiedState),
    Rejected(RejectReason),
}

impl VerificationResult {
    pub fn is_verified(&self) -> bool {
        matches!(self, VerificationResult::Verified(_))
    }

    pub fn verified(&self) -> Option<&VerifiedState> {
        match self {
            VerificationResult::Verified(v) => Some(v),
            VerificationResult::Rejected(_) => None,
        }
    }

    pub fn rejection(&self) -> Option<&RejectReason> {
        match self {
            VerificationResult::Verified(_) => None,
            VerificationResult::Rejected(reason) => Some(reason),
        }
    }

    pub fn into_verified(self) -> Option<VerifiedState> {
        match self {
            VerificationResult::Verified(v) => Some(v),
            VerificationResult::Rejected(_) => None,
        }
    }
}
