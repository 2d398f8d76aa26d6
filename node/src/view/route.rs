// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Route dispatch: client path → component.

use quorum_kernel::ClaimedState;
use serde::Serialize;

use super::ViewContext;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Route {
    Welcome,
    Register,
    UserWallet { public_key: String },
    UserTransfer { public_key: String },
    UserAddFunds { public_key: String },
    BlockchainList,
    BlockDetail { height: u64 },
    TransactionDetail { hash: String },
}

fn is_hex32(s: &str) -> bool {
    s.len() == 64 && s.bytes().all(|b| b.is_ascii_hexdigit())
}

fn is_decimal(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

impl Route {
    /// Matches a client path such as `/block/12`. Query and fragment are
    /// ignored; a trailing slash is not significant.
    pub fn parse(path: &str) -> Option<Route> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let route = match segments.as_slice() {
            [] => Route::Welcome,
            ["register"] => Route::Register,
            ["user", key] if is_hex32(key) => Route::UserWallet {
                public_key: key.to_ascii_lowercase(),
            },
            ["user", key, "transfer"] if is_hex32(key) => Route::UserTransfer {
                public_key: key.to_ascii_lowercase(),
            },
            ["user", key, "add-funds"] if is_hex32(key) => Route::UserAddFunds {
                public_key: key.to_ascii_lowercase(),
            },
            ["blockchain"] => Route::BlockchainList,
            ["block", height] if is_decimal(height) => Route::BlockDetail {
                height: height.parse().ok()?,
            },
            ["transaction", hash] if is_hex32(hash) => Route::TransactionDetail {
                hash: hash.to_ascii_lowercase(),
            },
            _ => return None,
        };
        Some(route)
    }

    pub fn path(&self) -> String {
        match self {
            Route::Welcome => "/".to_string(),
            Route::Register => "/register".to_string(),
            Route::UserWallet { public_key } => format!("/user/{}", public_key),
            Route::UserTransfer { public_key } => format!("/user/{}/transfer", public_key),
            Route::UserAddFunds { public_key } => format!("/user/{}/add-funds", public_key),
            Route::BlockchainList => "/blockchain".to_string(),
            Route::BlockDetail { height } => format!("/block/{}", height),
            Route::TransactionDetail { hash } => format!("/transaction/{}", hash),
        }
    }

    /// Gateway endpoint the component reads its (unverified) data from.
    /// Forms that only build transactions have none.
    pub fn data_endpoint(&self, ctx: &ViewContext) -> Option<String> {
        let base = &ctx.gateway_url;
        match self {
            Route::UserWallet { public_key } => Some(format!(
                "{}/api/services/cryptocurrency/v1/wallets/info?pub_key={}",
                base, public_key
            )),
            Route::BlockchainList => Some(format!("{}/api/explorer/v1/blocks?count=10", base)),
            Route::BlockDetail { height } => Some(format!("{}/api/explorer/v1/block?height={}", base, height)),
            Route::TransactionDetail { hash } => {
                Some(format!("{}/api/explorer/v1/transactions?hash={}", base, hash))
            }
            Route::Welcome | Route::Register | Route::UserTransfer { .. } | Route::UserAddFunds { .. } => None,
        }
    }

    /// The detail page that shows a given claim.
    pub fn for_state(state: &ClaimedState) -> Route {
        match state {
            ClaimedState::Wallet(w) => Route::UserWallet {
                public_key: w.owner.to_ascii_lowercase(),
            },
            ClaimedState::Block(b) => Route::BlockDetail { height: b.height },
            ClaimedState::Inclusion(i) => Route::TransactionDetail {
                hash: i.tx_hash.to_ascii_lowercase(),
            },
        }
    }
}
