// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Verdict-gated view model.
//!
//! Ledger data only reaches a panel through [`VerifiedState`], so a rejected
//! claim cannot be rendered with its balances or hashes.

use quorum_kernel::outcome::VerifiedState;
use quorum_kernel::{ClaimedState, RejectReason, VerificationResult};
use serde::Serialize;

use super::route::Route;
use super::title::Titled;
use super::ViewContext;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Panel {
    /// Trusted: quorum reached.
    Verified {
        route: Route,
        title: String,
        digest: String,
        signers: Vec<u16>,
        state: ClaimedState,
    },
    /// Not trustworthy yet (no or too few confirmations).
    Pending {
        route: Route,
        title: String,
        reason: String,
        valid_count: usize,
        required: usize,
    },
    /// The gateway sent something that cannot be a ledger claim.
    Invalid { title: String, reason: String },
}

impl Panel {
    /// Renders a verification outcome for the page `route`. `quorum` is the
    /// registry's threshold, shown while a claim is pending.
    pub fn render(result: &VerificationResult, route: Route, quorum: usize, ctx: &ViewContext) -> Panel {
        match result {
            VerificationResult::Verified(verified) => Self::verified(verified, route, ctx),
            VerificationResult::Rejected(reason) => Self::rejected(reason, route, quorum, ctx),
        }
    }

    fn verified(verified: &VerifiedState, route: Route, ctx: &ViewContext) -> Panel {
        Panel::Verified {
            title: route.title(ctx),
            route,
            digest: verified.digest.to_hex(),
            signers: verified.signers.iter().map(|i| i.0).collect(),
            state: verified.state.clone(),
        }
    }

    fn rejected(reason: &RejectReason, route: Route, quorum: usize, ctx: &ViewContext) -> Panel {
        let (valid_count, required) = match reason {
            RejectReason::MalformedState(_) => {
                return Panel::Invalid {
                    title: format!("Invalid response | {}", ctx.app_title),
                    reason: reason.to_string(),
                }
            }
            RejectReason::EmptyConfirmationSet => (0, quorum),
            RejectReason::InsufficientQuorum {
                valid_count,
                required,
            } => (*valid_count, *required),
        };
        Panel::Pending {
            title: route.title(ctx),
            route,
            reason: reason.to_string(),
            valid_count,
            required,
        }
    }

    pub fn is_trusted(&self) -> bool {
        matches!(self, Panel::Verified { .. })
    }

    pub fn title(&self) -> &str {
        match self {
            Panel::Verified { title, .. } | Panel::Pending { title, .. } | Panel::Invalid { title, .. } => title,
        }
    }
}
