// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Claim encoding.

use byteorder::{ByteOrder, LittleEndian};

use super::{CanonicalClaim, ClaimKind};
use crate::config::{CANONICAL_FORMAT_VERSION, DIGEST_LEN, MAX_NAME_LEN};
use crate::error::{CanonicalError, CanonicalResult};
use crate::state::{BlockHeader, ClaimedState, TransactionInclusion, WalletSnapshot};
use crate::types::ValidatorKey;

const ZERO_DIGEST: [u8; DIGEST_LEN] = [0u8; DIGEST_LEN];

/// Append-only buffer for one canonical encoding.
struct CanonicalWriter {
    buf: Vec<u8>,
}

impl CanonicalWriter {
    fn new(kind: ClaimKind) -> Self {
        let mut buf = Vec::with_capacity(128);
        buf.push(CANONICAL_FORMAT_VERSION);
        buf.push(kind as u8);
        Self { buf }
    }

    fn write_u16(&mut self, val: u16) {
        let mut bytes = [0u8; 2];
        LittleEndian::write_u16(&mut bytes, val);
        self.buf.extend_from_slice(&bytes);
    }

    fn write_u32(&mut self, val: u32) {
        let mut bytes = [0u8; 4];
        LittleEndian::write_u32(&mut bytes, val);
        self.buf.extend_from_slice(&bytes);
    }

    fn write_u64(&mut self, val: u64) {
        let mut bytes = [0u8; 8];
        LittleEndian::write_u64(&mut bytes, val);
        self.buf.extend_from_slice(&bytes);
    }

    fn write_digest(&mut self, digest: &[u8; DIGEST_LEN]) {
        self.buf.extend_from_slice(digest);
    }

    /// Caller guarantees `s.len() <= u16::MAX`.
    fn write_str(&mut self, s: &str) {
        self.write_u16(s.len() as u16);
        self.buf.extend_from_slice(s.as_bytes());
    }

    fn finish(self) -> CanonicalClaim {
        CanonicalClaim::from_bytes(self.buf)
    }
}

/// Decodes a 32-byte hex field. Case does not matter, length does.
fn decode_digest(field: &'static str, s: &str) -> CanonicalResult<[u8; DIGEST_LEN]> {
    if s.len() != DIGEST_LEN * 2 {
        return Err(CanonicalError::WrongLength {
            field,
            expected: DIGEST_LEN * 2,
            found: s.len(),
        });
    }
    let mut out = [0u8; DIGEST_LEN];
    hex::decode_to_slice(s, &mut out).map_err(|_| CanonicalError::InvalidHex { field })?;
    Ok(out)
}

fn check_name(name: &str) -> CanonicalResult<()> {
    if name.is_empty() {
        return Err(CanonicalError::EmptyName);
    }
    if name.len() > MAX_NAME_LEN {
        return Err(CanonicalError::NameTooLong {
            len: name.len(),
            max: MAX_NAME_LEN,
        });
    }
    if name.chars().any(char::is_control) {
        return Err(CanonicalError::ControlCharacter);
    }
    Ok(())
}

pub fn encode_claim(state: &ClaimedState) -> CanonicalResult<CanonicalClaim> {
    match state {
        ClaimedState::Wallet(wallet) => encode_wallet(wallet),
        ClaimedState::Block(block) => encode_block(block),
        ClaimedState::Inclusion(inclusion) => encode_inclusion(inclusion),
    }
}

fn encode_wallet(wallet: &WalletSnapshot) -> CanonicalResult<CanonicalClaim> {
    let owner = decode_digest("owner", &wallet.owner)?;
    if ValidatorKey::from_bytes(owner).verifying_key().is_none() {
        return Err(CanonicalError::InvalidOwnerKey);
    }
    check_name(&wallet.name)?;
    let history_hash = decode_digest("history_hash", &wallet.history_hash)?;

    let mut w = CanonicalWriter::new(ClaimKind::Wallet);
    w.write_digest(&owner);
    w.write_str(&wallet.name);
    w.write_u64(wallet.balance);
    w.write_u64(wallet.history_len);
    w.write_digest(&history_hash);
    w.write_u64(wallet.height);
    Ok(w.finish())
}

fn encode_block(block: &BlockHeader) -> CanonicalResult<CanonicalClaim> {
    let prev_hash = decode_digest("prev_hash", &block.prev_hash)?;
    let tx_hash = decode_digest("tx_hash", &block.tx_hash)?;
    let state_hash = decode_digest("state_hash", &block.state_hash)?;

    match (block.height, prev_hash == ZERO_DIGEST) {
        (0, false) => return Err(CanonicalError::GenesisWithParent),
        (height, true) if height > 0 => return Err(CanonicalError::MissingParent { height }),
        _ => {}
    }
    if block.tx_count == 0 && tx_hash != ZERO_DIGEST {
        return Err(CanonicalError::TxRootWithoutTransactions);
    }

    let mut w = CanonicalWriter::new(ClaimKind::Block);
    w.write_u16(block.proposer_id);
    w.write_u64(block.height);
    w.write_u32(block.tx_count);
    w.write_digest(&prev_hash);
    w.write_digest(&tx_hash);
    w.write_digest(&state_hash);
    Ok(w.finish())
}

fn encode_inclusion(inclusion: &TransactionInclusion) -> CanonicalResult<CanonicalClaim> {
    let tx_hash = decode_digest("tx_hash", &inclusion.tx_hash)?;
    let block_hash = decode_digest("block_hash", &inclusion.block_hash)?;

    let mut w = CanonicalWriter::new(ClaimKind::Inclusion);
    w.write_digest(&tx_hash);
    w.write_u64(inclusion.block_height);
    w.write_digest(&block_hash);
    w.write_u32(inclusion.position);
    Ok(w.finish())
}
