// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Claimed ledger state as served by the API gateway.

pub mod claim;
pub mod bundle;

pub use bundle::Bundle;
pub use claim::{BlockHeader, ClaimedState, TransactionInclusion, WalletSnapshot};
