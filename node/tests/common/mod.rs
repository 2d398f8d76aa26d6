// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
#![allow(dead_code)]

use ed25519_dalek::{Signer, SigningKey};
use quorum_kernel::state::WalletSnapshot;
use quorum_kernel::types::{Confirmation, ValidatorIndex, ValidatorKey};
use quorum_kernel::{ClaimedState, ValidatorRegistry};

pub fn validator_keys(n: usize) -> Vec<SigningKey> {
    (0..n).map(|i| SigningKey::from_bytes(&[i as u8 + 1; 32])).collect()
}

pub fn hex_keys(keys: &[SigningKey]) -> Vec<String> {
    keys.iter()
        .map(|k| ValidatorKey::from(k.verifying_key()).to_hex())
        .collect()
}

pub fn registry_of(keys: &[SigningKey]) -> ValidatorRegistry {
    ValidatorRegistry::from_hex(hex_keys(keys)).unwrap()
}

pub fn wallet(balance: u64) -> ClaimedState {
    let owner = SigningKey::from_bytes(&[200; 32]);
    ClaimedState::Wallet(WalletSnapshot {
        owner: ValidatorKey::from(owner.verifying_key()).to_hex(),
        name: "Alice".to_string(),
        balance,
        history_len: 1,
        history_hash: "ab".repeat(32),
        height: 3,
    })
}

pub fn confirm(keys: &[SigningKey], index: usize, state: &ClaimedState) -> Confirmation {
    let claim = state.canonicalize().unwrap();
    let signature = keys[index].sign(claim.bytes()).to_bytes();
    Confirmation::new(ValidatorIndex(index as u16), signature)
}
