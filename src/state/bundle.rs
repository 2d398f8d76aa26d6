// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use serde::{Deserialize, Serialize};

use super::claim::ClaimedState;
use crate::types::Confirmation;

/// A claimed state together with the confirmations that came with it, in the
/// shape the transport hands over after decoding a gateway response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bundle {
    pub state: ClaimedState,
    #[serde(default)]
    pub confirmations: Vec<Confirmation>,
}
