// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use quorum_kernel::registry::ValidatorList;
use quorum_kernel::{evaluate, Bundle, RejectReason, ValidatorRegistry, Verdict, VerificationResult};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(author, version, about = "Check a claimed ledger state against a validator set", long_about = None)]
struct Args {
    /// Validator list: a JSON array of hex keys or `{ "validators": [...] }`
    validators: PathBuf,

    /// Bundle: `{ "state": ..., "confirmations": [...] }`
    bundle: PathBuf,
}

#[derive(Serialize, Debug)]
struct Discarded {
    position: usize,
    reason: &'static str,
}

#[derive(Serialize, Debug)]
struct Report {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    digest: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    signers: Vec<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    valid_count: Option<usize>,
    required: usize,
    discarded: Vec<Discarded>,
}

impl Report {
    fn new(verdict: &Verdict, required: usize) -> Self {
        let discarded = verdict
            .discarded
            .iter()
            .map(|d| Discarded {
                position: d.position,
                reason: d.kind.as_str(),
            })
            .collect();

        match &verdict.result {
            VerificationResult::Verified(verified) => Report {
                status: "verified",
                digest: Some(verified.digest.to_hex()),
                signers: verified.signers.iter().map(|i| i.0).collect(),
                reason: None,
                valid_count: Some(verified.signers.len()),
                required,
                discarded,
            },
            VerificationResult::Rejected(reason) => Report {
                status: reason.code(),
                digest: None,
                signers: Vec::new(),
                reason: Some(reason.to_string()),
                valid_count: match reason {
                    RejectReason::InsufficientQuorum { valid_count, .. } => Some(*valid_count),
                    RejectReason::EmptyConfirmationSet => Some(0),
                    RejectReason::MalformedState(_) => None,
                },
                required,
                discarded,
            },
        }
    }
}

fn load_registry(path: &Path) -> Result<ValidatorRegistry> {
    let text = fs::read_to_string(path).context("Failed to read validators file")?;
    let list: ValidatorList = serde_json::from_str(&text).context("Failed to parse validators JSON")?;
    list.into_registry().context("Invalid validator set")
}

fn load_bundle(path: &Path) -> Result<Bundle> {
    let text = fs::read_to_string(path).context("Failed to read bundle file")?;
    serde_json::from_str(&text).context("Failed to parse bundle JSON")
}

/// Exit status for a verdict: 0 when verified, 2 when rejected. Errors
/// before a verdict exists exit with 1 through `anyhow`.
fn exit_status(result: &VerificationResult) -> u8 {
    if result.is_verified() {
        0
    } else {
        2
    }
}

/// Loads both files and evaluates the bundle.
fn check(validators: &Path, bundle: &Path) -> Result<(Report, u8)> {
    let registry = load_registry(validators)?;
    eprintln!(
        "Validators: n={}, quorum={}, tolerates {} faulty",
        registry.size(),
        registry.quorum_threshold(),
        registry.fault_tolerance()
    );

    let bundle = load_bundle(bundle)?;
    let verdict = evaluate(bundle.state, &bundle.confirmations, &registry);

    let report = Report::new(&verdict, registry.quorum_threshold());
    Ok((report, exit_status(&verdict.result)))
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let (report, status) = check(&args.validators, &args.bundle)?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(ExitCode::from(status))
}
