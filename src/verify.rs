// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Quorum verification.

use std::collections::BTreeSet;

use ed25519_dalek::Signature;

use crate::canonical::CanonicalClaim;
use crate::outcome::{RejectReason, VerificationResult, VerifiedState};
use crate::registry::ValidatorRegistry;
use crate::state::ClaimedState;
use crate::types::{Confirmation, ValidatorIndex};

/// Why a confirmation did not count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Discard {
    /// The signer is not in the registry. Not probative either way.
    UnknownSigner,
    /// Wrong length, not a signature, or does not verify.
    BadSignature,
    /// The signer already counted.
    Duplicate,
}

impl Discard {
    pub fn as_str(&self) -> &'static str {
        match self {
            Discard::UnknownSigner => "unknown-signer",
            Discard::BadSignature => "bad-signature",
            Discard::Duplicate => "duplicate",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscardedConfirmation {
    /// Position in the confirmation list as given.
    pub position: usize,
    pub kind: Discard,
}

/// The result plus per-confirmation diagnostics. Diagnostics are for logs
/// and tooling only and never change the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub result: VerificationResult,
    pub discarded: Vec<DiscardedConfirmation>,
}

impl Verdict {
    fn rejected(reason: RejectReason) -> Self {
        Self {
            result: VerificationResult::Rejected(reason),
            discarded: Vec::new(),
        }
    }

    pub fn count(&self, kind: Discard) -> usize {
        self.discarded.iter().filter(|d| d.kind == kind).count()
    }
}

/// Decides whether `state` is trustworthy given `confirmations`.
///
/// Pure: reads only its arguments and the immutable registry, so concurrent
/// calls need no coordination.
pub fn verify(
    state: ClaimedState,
    confirmations: &[Confirmation],
    registry: &ValidatorRegistry,
) -> VerificationResult {
    evaluate(state, confirmations, registry).result
}

/// Same decision as [`verify`], keeping the diagnostics.
pub fn evaluate(
    state: ClaimedState,
    confirmations: &[Confirmation],
    registry: &ValidatorRegistry,
) -> Verdict {
    // Never check signatures against bytes that are not canonical.
    let claim = match state.canonicalize() {
        Ok(claim) => claim,
        Err(e) => {
            tracing::debug!(kind = state.kind(), error = %e, "rejecting malformed state");
            return Verdict::rejected(RejectReason::MalformedState(e));
        }
    };
    evaluate_canonical(state, &claim, confirmations, registry)
}

/// Verification against an already computed canonical encoding of `state`.
pub(crate) fn evaluate_canonical(
    state: ClaimedState,
    claim: &CanonicalClaim,
    confirmations: &[Confirmation],
    registry: &ValidatorRegistry,
) -> Verdict {
    if confirmations.is_empty() {
        return Verdict::rejected(RejectReason::EmptyConfirmationSet);
    }

    let mut signers: BTreeSet<ValidatorIndex> = BTreeSet::new();
    let mut discarded = Vec::new();

    for (position, confirmation) in confirmations.iter().enumerate() {
        let kind = match check_confirmation(claim, confirmation, registry, &signers) {
            Ok(index) => {
                signers.insert(index);
                continue;
            }
            Err(kind) => kind,
        };

        tracing::debug!(
            claim = %claim.digest(),
            position,
            validator = %confirmation.validator,
            reason = kind.as_str(),
            "discarding confirmation"
        );
        discarded.push(DiscardedConfirmation { position, kind });
    }

    let valid_count = signers.len();
    let required = registry.quorum_threshold();

    let result = if valid_count >= required {
        VerificationResult::Verified(VerifiedState {
            state,
            digest: claim.digest(),
            signers: signers.into_iter().collect(),
        })
    } else {
        VerificationResult::Rejected(RejectReason::InsufficientQuorum {
            valid_count,
            required,
        })
    };

    Verdict { result, discarded }
}

fn check_confirmation(
    claim: &CanonicalClaim,
    confirmation: &Confirmation,
    registry: &ValidatorRegistry,
    counted: &BTreeSet<ValidatorIndex>,
) -> Result<ValidatorIndex, Discard> {
    let (index, key) = registry
        .resolve(&confirmation.validator)
        .ok_or(Discard::UnknownSigner)?;

    if counted.contains(&index) {
        return Err(Discard::Duplicate);
    }

    let signature =
        Signature::from_slice(confirmation.signature.as_slice()).map_err(|_| Discard::BadSignature)?;
    key.verify_strict(claim.bytes(), &signature)
        .map_err(|_| Discard::BadSignature)?;

    Ok(index)
}
