// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Claim types.
//!
//! Fields hold exactly what the gateway sent: digests and keys stay hex
//! strings until canonicalization decodes them. Structural equality of two
//! claims therefore means nothing for trust; compare canonical digests.

use serde::{Deserialize, Serialize};

use crate::canonical::{self, CanonicalClaim};
use crate::error::CanonicalResult;

/// A wallet as read from the ledger at a given height.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletSnapshot {
    /// Owner public key, hex.
    pub owner: String,
    pub name: String,
    pub balance: u64,
    pub history_len: u64,
    /// Root of the wallet's transaction history, hex.
    pub history_hash: String,
    /// Block height the snapshot was taken at.
    pub height: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHeader {
    /// Registry index of the validator that proposed the block.
    pub proposer_id: u16,
    pub height: u64,
    pub tx_count: u32,
    pub prev_hash: String,
    pub tx_hash: String,
    pub state_hash: String,
}

/// Claim that a transaction sits at `position` in the block at `block_height`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionInclusion {
    pub tx_hash: String,
    pub block_height: u64,
    pub block_hash: String,
    pub position: u32,
}

/// The subject of a verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClaimedState {
    Wallet(WalletSnapshot),
    Block(BlockHeader),
    Inclusion(TransactionInclusion),
}

impl ClaimedState {
    /// Computes the bytes validators sign over.
    pub fn canonicalize(&self) -> CanonicalResult<CanonicalClaim> {
        canonical::encode::encode_claim(self)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ClaimedState::Wallet(_) => "wallet",
            ClaimedState::Block(_) => "block",
            ClaimedState::Inclusion(_) => "inclusion",
        }
    }
}

impl From<WalletSnapshot> for ClaimedState {
    fn from(wallet: WalletSnapshot) -> Self {
        ClaimedState::Wallet(wallet)
    }
}

impl From<BlockHeader> for ClaimedState {
    fn from(block: BlockHeader) -> Self {
        ClaimedState::Block(block)
    }
}

impl From<TransactionInclusion> for ClaimedState {
    fn from(inclusion: TransactionInclusion) -> Self {
        ClaimedState::Inclusion(inclusion)
    }
}
