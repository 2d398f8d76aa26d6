// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use super::fixtures::{block, confirm, registry_of, validator_keys, wallet};
use crate::book::ClaimBook;
use crate::outcome::{RejectReason, VerificationResult};
use crate::state::{Bundle, ClaimedState};

#[test]
fn test_lookalike_claims_stay_apart() {
    let keys = validator_keys(4);
    let registry = registry_of(&keys);

    let honest = wallet();
    let mut forged = honest.clone();
    if let ClaimedState::Wallet(w) = &mut forged {
        // Same owner, name and height; only the balance differs.
        w.balance = 9_999;
    }

    let mut book = ClaimBook::new();
    let honest_digest = book.insert(honest.clone(), confirm(&keys, 0, &honest)).unwrap();
    book.insert(honest.clone(), confirm(&keys, 1, &honest)).unwrap();
    let forged_digest = book.insert(forged.clone(), confirm(&keys, 2, &forged)).unwrap();
    book.insert(forged.clone(), confirm(&keys, 3, &forged)).unwrap();

    assert_ne!(honest_digest, forged_digest);
    assert_eq!(book.len(), 2);

    // Four validators signed something, but no single claim has three.
    let verdicts = book.verify_all(&registry);
    assert_eq!(verdicts.len(), 2);
    for (_, verdict) in verdicts {
        assert_eq!(
            verdict.result,
            VerificationResult::Rejected(RejectReason::InsufficientQuorum { valid_count: 2, required: 3 })
        );
    }
}

#[test]
fn test_hex_case_variants_merge() {
    let keys = validator_keys(4);
    let registry = registry_of(&keys);

    let lower = wallet();
    let mut upper = lower.clone();
    if let ClaimedState::Wallet(w) = &mut upper {
        w.owner = w.owner.to_uppercase();
        w.history_hash = w.history_hash.to_uppercase();
    }

    let mut book = ClaimBook::new();
    let a = book.insert(lower.clone(), confirm(&keys, 0, &lower)).unwrap();
    let b = book.insert(upper.clone(), confirm(&keys, 1, &upper)).unwrap();
    let c = book.insert(lower.clone(), confirm(&keys, 2, &lower)).unwrap();

    assert_eq!(a, b);
    assert_eq!(b, c);
    assert_eq!(book.len(), 1);
    assert_eq!(book.confirmations(&a).map(|c| c.len()), Some(3));

    let verdicts = book.verify_all(&registry);
    assert!(verdicts[0].1.result.is_verified());
}

#[test]
fn test_malformed_state_not_stored() {
    let keys = validator_keys(4);
    let mut broken = block(2);
    if let ClaimedState::Block(b) = &mut broken {
        b.prev_hash = "00".repeat(32);
    }

    let mut book = ClaimBook::new();
    let good = block(2);
    assert!(book.insert(broken, confirm(&keys, 0, &good)).is_err());
    assert!(book.is_empty());
}

#[test]
fn test_bundles_and_order() {
    let keys = validator_keys(4);
    let registry = registry_of(&keys);

    let first = block(1);
    let second = block(2);

    let mut book = ClaimBook::new();
    let d1 = book
        .insert_bundle(Bundle {
            state: first.clone(),
            confirmations: (0..3).map(|i| confirm(&keys, i, &first)).collect(),
        })
        .unwrap();
    let d2 = book
        .insert_bundle(Bundle {
            state: second.clone(),
            confirmations: Vec::new(),
        })
        .unwrap();

    let verdicts = book.verify_all(&registry);
    assert_eq!(verdicts[0].0, d1);
    assert_eq!(verdicts[1].0, d2);
    assert!(verdicts[0].1.result.is_verified());
    assert_eq!(
        verdicts[1].1.result,
        VerificationResult::Rejected(RejectReason::EmptyConfirmationSet)
    );

    // Late confirmations for the second block complete it.
    for i in 1..4 {
        book.insert(second.clone(), confirm(&keys, i, &second)).unwrap();
    }
    assert!(book.verify_all(&registry)[1].1.result.is_verified());
}
