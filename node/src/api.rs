// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use quorum_kernel::Verdict;
use serde::{Deserialize, Serialize};

use crate::view::{Panel, Route};

#[derive(Debug, Serialize)]
pub struct DiscardView {
    pub position: usize,
    pub reason: &'static str,
}

#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    #[serde(flatten)]
    pub panel: Panel,
    pub discarded: Vec<DiscardView>,
}

impl VerifyResponse {
    pub fn new(panel: Panel, verdict: &Verdict) -> Self {
        let discarded = verdict
            .discarded
            .iter()
            .map(|d| DiscardView {
                position: d.position,
                reason: d.kind.as_str(),
            })
            .collect();
        Self { panel, discarded }
    }
}

#[derive(Debug, Serialize)]
pub struct ValidatorsResponse {
    pub size: usize,
    pub quorum_threshold: usize,
    pub fault_tolerance: usize,
    pub validators: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct RouteQuery {
    pub path: String,
}

#[derive(Debug, Serialize)]
pub struct RouteResponse {
    pub route: Route,
    pub path: String,
    pub title: String,
    pub data_endpoint: Option<String>,
}
