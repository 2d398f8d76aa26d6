// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Claim book: confirmations collected per claim.
//!
//! A gateway may return several copies of "the same" state, each with its own
//! confirmations. Copies are grouped by canonical digest, never by structure,
//! so claims that merely look alike are kept apart and hex-case variants of
//! one claim land together.

use rustc_hash::FxHashMap;

use crate::canonical::CanonicalClaim;
use crate::error::CanonicalResult;
use crate::registry::ValidatorRegistry;
use crate::state::{Bundle, ClaimedState};
use crate::types::{ClaimDigest, Confirmation};
use crate::verify::{evaluate_canonical, Verdict};

#[derive(Debug, Clone)]
struct ClaimGroup {
    claim: CanonicalClaim,
    /// First copy seen; any copy encodes to the same bytes.
    state: ClaimedState,
    confirmations: Vec<Confirmation>,
}

#[derive(Debug, Clone, Default)]
pub struct ClaimBook {
    groups: Vec<ClaimGroup>,
    by_digest: FxHashMap<ClaimDigest, usize>,
}

impl ClaimBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Files one confirmation under its claim. A malformed state is refused
    /// and nothing is stored.
    pub fn insert(&mut self, state: ClaimedState, confirmation: Confirmation) -> CanonicalResult<ClaimDigest> {
        let slot = self.group_for(state)?;
        let group = &mut self.groups[slot];
        group.confirmations.push(confirmation);
        Ok(group.claim.digest())
    }

    /// Files a whole bundle; a bundle with no confirmations still registers
    /// its claim.
    pub fn insert_bundle(&mut self, bundle: Bundle) -> CanonicalResult<ClaimDigest> {
        let slot = self.group_for(bundle.state)?;
        let group = &mut self.groups[slot];
        group.confirmations.extend(bundle.confirmations);
        Ok(group.claim.digest())
    }

    fn group_for(&mut self, state: ClaimedState) -> CanonicalResult<usize> {
        let claim = state.canonicalize()?;
        if let Some(&slot) = self.by_digest.get(&claim.digest()) {
            return Ok(slot);
        }
        let slot = self.groups.len();
        self.by_digest.insert(claim.digest(), slot);
        self.groups.push(ClaimGroup {
            claim,
            state,
            confirmations: Vec::new(),
        });
        Ok(slot)
    }

    /// Number of distinct claims.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn confirmations(&self, digest: &ClaimDigest) -> Option<&[Confirmation]> {
        let slot = *self.by_digest.get(digest)?;
        Some(&self.groups[slot].confirmations)
    }

    /// Verifies every claim independently, in first-seen order.
    pub fn verify_all(&self, registry: &ValidatorRegistry) -> Vec<(ClaimDigest, Verdict)> {
        self.groups
            .iter()
            .map(|group| {
                let verdict = evaluate_canonical(
                    group.state.clone(),
                    &group.claim,
                    &group.confirmations,
                    registry,
                );
                (group.claim.digest(), verdict)
            })
            .collect()
    }
}
