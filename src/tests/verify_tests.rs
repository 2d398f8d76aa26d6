// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use super::fixtures::{block, confirm, confirm_by_key, inclusion, public_key, registry_of, sign, signing_key, validator_keys, wallet};
use crate::error::CanonicalError;
use crate::outcome::{RejectReason, VerificationResult};
use crate::state::ClaimedState;
use crate::types::{Confirmation, SignatureBytes, ValidatorIndex};
use crate::verify::{evaluate, verify, Discard};

fn insufficient(valid_count: usize, required: usize) -> VerificationResult {
    VerificationResult::Rejected(RejectReason::InsufficientQuorum { valid_count, required })
}

#[test]
fn test_empty_confirmations_rejected() {
    let registry = registry_of(&validator_keys(4));
    for state in [wallet(), block(3), inclusion()] {
        assert_eq!(
            verify(state, &[], &registry),
            VerificationResult::Rejected(RejectReason::EmptyConfirmationSet)
        );
    }
}

#[test]
fn test_two_of_four_is_not_enough() {
    let keys = validator_keys(4);
    let registry = registry_of(&keys);
    let state = wallet();
    let confs = vec![confirm(&keys, 0, &state), confirm(&keys, 1, &state)];

    assert_eq!(verify(state, &confs, &registry), insufficient(2, 3));
}

#[test]
fn test_three_of_four_verifies() {
    let keys = validator_keys(4);
    let registry = registry_of(&keys);
    let state = wallet();
    let confs = vec![
        confirm(&keys, 0, &state),
        confirm(&keys, 2, &state),
        confirm(&keys, 3, &state),
    ];

    match verify(state.clone(), &confs, &registry) {
        VerificationResult::Verified(v) => {
            assert_eq!(v.state, state);
            assert_eq!(v.digest, state.canonicalize().unwrap().digest());
            assert_eq!(v.signers, vec![ValidatorIndex(0), ValidatorIndex(2), ValidatorIndex(3)]);
        }
        other => panic!("expected verified, got {:?}", other),
    }
}

#[test]
fn test_all_four_verify() {
    let keys = validator_keys(4);
    let registry = registry_of(&keys);
    let state = block(10);
    let confs: Vec<_> = (0..4).map(|i| confirm(&keys, i, &state)).collect();

    let verdict = evaluate(state, &confs, &registry);
    assert!(verdict.result.is_verified());
    assert!(verdict.discarded.is_empty());
    assert_eq!(verdict.result.verified().unwrap().signers.len(), 4);
}

#[test]
fn test_replayed_confirmation_counts_once() {
    let keys = validator_keys(4);
    let registry = registry_of(&keys);
    let state = wallet();
    let replay = confirm(&keys, 0, &state);
    let confs = vec![replay.clone(), replay, confirm(&keys, 1, &state)];

    let verdict = evaluate(state, &confs, &registry);
    assert_eq!(verdict.result, insufficient(2, 3));
    assert_eq!(verdict.count(Discard::Duplicate), 1);
    assert_eq!(verdict.discarded[0].position, 1);
}

#[test]
fn test_duplicate_with_different_signature_bytes_counts_once() {
    let keys = validator_keys(4);
    let registry = registry_of(&keys);
    let state = wallet();
    let mut tampered = confirm(&keys, 1, &state);
    tampered.signature.0[0] ^= 0xff;

    let confs = vec![confirm(&keys, 1, &state), tampered, confirm(&keys, 2, &state)];
    let verdict = evaluate(state, &confs, &registry);

    assert_eq!(verdict.result, insufficient(2, 3));
    assert_eq!(verdict.count(Discard::Duplicate), 1);
}

#[test]
fn test_index_and_key_references_deduplicate() {
    let keys = validator_keys(4);
    let registry = registry_of(&keys);
    let state = inclusion();
    let confs = vec![
        confirm(&keys, 0, &state),
        confirm_by_key(&keys, 0, &state),
        confirm_by_key(&keys, 1, &state),
    ];

    let verdict = evaluate(state, &confs, &registry);
    assert_eq!(verdict.result, insufficient(2, 3));
    assert_eq!(verdict.count(Discard::Duplicate), 1);
}

#[test]
fn test_unknown_signer_is_ignored() {
    let keys = validator_keys(4);
    let registry = registry_of(&keys);
    let outsider = signing_key(99);
    let state = wallet();

    let confs = vec![
        Confirmation::new(public_key(&outsider), sign(&outsider, &state)),
        Confirmation::new(ValidatorIndex(17), sign(&outsider, &state)),
        confirm(&keys, 0, &state),
        confirm(&keys, 1, &state),
        confirm(&keys, 2, &state),
    ];

    let verdict = evaluate(state, &confs, &registry);
    assert!(verdict.result.is_verified());
    assert_eq!(verdict.count(Discard::UnknownSigner), 2);
    assert_eq!(verdict.result.verified().unwrap().signers.len(), 3);
}

#[test]
fn test_unknown_signers_never_reach_quorum() {
    let keys = validator_keys(4);
    let registry = registry_of(&keys);
    let state = wallet();
    let outsiders: Vec<_> = (90..96).map(signing_key).collect();
    let confs: Vec<_> = outsiders
        .iter()
        .map(|k| Confirmation::new(public_key(k), sign(k, &state)))
        .collect();

    assert_eq!(verify(state, &confs, &registry), insufficient(0, 3));
}

#[test]
fn test_bad_signatures_do_not_abort() {
    let keys = validator_keys(4);
    let registry = registry_of(&keys);
    let state = block(8);

    let wrong_signer = Confirmation::new(ValidatorIndex(3), sign(&keys[0], &state));
    let wrong_length = Confirmation::new(ValidatorIndex(3), SignatureBytes(vec![1, 2, 3]));
    let wrong_state = Confirmation::new(ValidatorIndex(3), sign(&keys[3], &block(9)));

    let confs = vec![
        wrong_signer,
        confirm(&keys, 0, &state),
        wrong_length,
        confirm(&keys, 1, &state),
        wrong_state,
        confirm(&keys, 2, &state),
    ];

    let verdict = evaluate(state, &confs, &registry);
    assert!(verdict.result.is_verified());
    assert_eq!(verdict.count(Discard::BadSignature), 3);
    let positions: Vec<_> = verdict.discarded.iter().map(|d| d.position).collect();
    assert_eq!(positions, vec![0, 2, 4]);
}

#[test]
fn test_valid_signature_after_bad_one_counts() {
    let keys = validator_keys(4);
    let registry = registry_of(&keys);
    let state = wallet();
    let mut bad = confirm(&keys, 0, &state);
    bad.signature.0[10] ^= 0x01;

    let confs = vec![
        bad,
        confirm(&keys, 0, &state),
        confirm(&keys, 1, &state),
        confirm(&keys, 2, &state),
    ];

    let verdict = evaluate(state, &confs, &registry);
    assert!(verdict.result.is_verified());
    assert_eq!(verdict.count(Discard::BadSignature), 1);
    assert_eq!(verdict.count(Discard::Duplicate), 0);
}

#[test]
fn test_signatures_bind_to_canonical_bytes() {
    let keys = validator_keys(4);
    let registry = registry_of(&keys);
    let signed = wallet();
    let mut other = signed.clone();
    if let ClaimedState::Wallet(w) = &mut other {
        w.balance = 1_000_000;
    }

    // Confirmations for `signed` presented next to a richer balance.
    let confs: Vec<_> = (0..4).map(|i| confirm(&keys, i, &signed)).collect();
    let verdict = evaluate(other, &confs, &registry);

    assert_eq!(verdict.result, insufficient(0, 3));
    assert_eq!(verdict.count(Discard::BadSignature), 4);
}

#[test]
fn test_hex_case_variant_accepts_same_signatures() {
    let keys = validator_keys(4);
    let registry = registry_of(&keys);
    let mut signed = block(5);
    if let ClaimedState::Block(b) = &mut signed {
        b.state_hash = "ab".repeat(32);
    }
    let mut shouted = signed.clone();
    if let ClaimedState::Block(b) = &mut shouted {
        b.state_hash = b.state_hash.to_uppercase();
    }

    let confs: Vec<_> = (0..3).map(|i| confirm(&keys, i, &signed)).collect();
    assert!(verify(shouted, &confs, &registry).is_verified());
}

#[test]
fn test_malformed_state_rejected_before_signatures() {
    let keys = validator_keys(4);
    let registry = registry_of(&keys);
    let good = wallet();
    let confs: Vec<_> = (0..4).map(|i| confirm(&keys, i, &good)).collect();

    let mut broken = good;
    if let ClaimedState::Wallet(w) = &mut broken {
        w.history_hash.push('0');
    }

    let verdict = evaluate(broken.clone(), &confs, &registry);
    assert!(matches!(
        verdict.result,
        VerificationResult::Rejected(RejectReason::MalformedState(CanonicalError::WrongLength { .. }))
    ));
    assert!(verdict.discarded.is_empty(), "no confirmation may be inspected");

    // Malformed wins over an empty confirmation set.
    assert!(matches!(
        verify(broken, &[], &registry),
        VerificationResult::Rejected(RejectReason::MalformedState(_))
    ));
}

#[test]
fn test_verify_is_idempotent() {
    let keys = validator_keys(7);
    let registry = registry_of(&keys);
    let state = block(21);
    let mut confs: Vec<_> = (0..5).map(|i| confirm(&keys, i, &state)).collect();
    confs.push(confirm(&keys, 0, &state));

    let first = evaluate(state.clone(), &confs, &registry);
    let second = evaluate(state, &confs, &registry);
    assert_eq!(first, second);
    assert!(first.result.is_verified());
}

#[test]
fn test_single_validator_network() {
    let keys = validator_keys(1);
    let registry = registry_of(&keys);
    let state = wallet();
    let confs = vec![confirm(&keys, 0, &state)];
    assert!(verify(state, &confs, &registry).is_verified());
}

#[test]
fn test_concurrent_verification_shares_registry() {
    let keys = validator_keys(4);
    let registry = registry_of(&keys);
    let states: Vec<_> = (1..=8).map(block).collect();

    let results: Vec<bool> = std::thread::scope(|scope| {
        let handles: Vec<_> = states
            .iter()
            .enumerate()
            .map(|(i, state)| {
                let registry = &registry;
                let keys = &keys;
                scope.spawn(move || {
                    // Even heights get a quorum, odd ones only two signatures.
                    let signers = if i % 2 == 0 { 3 } else { 2 };
                    let confs: Vec<_> = (0..signers).map(|v| confirm(keys, v, state)).collect();
                    verify(state.clone(), &confs, registry).is_verified()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(results, vec![true, false, true, false, true, false, true, false]);
}
