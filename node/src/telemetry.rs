// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use std::sync::OnceLock;
use std::time::Duration;

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use quorum_kernel::{ValidatorRegistry, Verdict, VerificationResult};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

static PROM_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Initialize telemetry (logs + metrics)
pub fn init_telemetry() {
    // 1. Tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "quorum_node=debug,quorum_kernel=info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 2. Metrics (Prometheus)
    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => {
            if PROM_HANDLE.set(handle).is_err() {
                tracing::warn!("Prometheus handle already set. Telemetry re-initialized?");
            }
        }
        Err(e) => tracing::warn!("Prometheus recorder not installed: {}", e),
    }

    metrics::describe_counter!("quorum_verifications_total", "Verification calls by outcome");
    metrics::describe_counter!(
        "quorum_confirmations_discarded_total",
        "Confirmations that did not count, by reason"
    );
    metrics::describe_histogram!("quorum_verify_duration_seconds", "Time spent in one verification");
    metrics::describe_gauge!("quorum_registry_size", "Number of validators in the registry");

    metrics::gauge!("quorum_node_up", 1.0);
}

/// Get the Prometheus handle to render metrics
pub fn get_metrics() -> String {
    if let Some(handle) = PROM_HANDLE.get() {
        handle.render()
    } else {
        "# metrics not initialized".to_string()
    }
}

pub fn record_registry(registry: &ValidatorRegistry) {
    metrics::gauge!("quorum_registry_size", registry.size() as f64);
}

pub fn record_verdict(verdict: &Verdict, elapsed: Duration) {
    let outcome = match &verdict.result {
        VerificationResult::Verified(_) => "verified",
        VerificationResult::Rejected(reason) => reason.code(),
    };
    metrics::increment_counter!("quorum_verifications_total", "outcome" => outcome);
    for discarded in &verdict.discarded {
        metrics::increment_counter!(
            "quorum_confirmations_discarded_total",
            "kind" => discarded.kind.as_str()
        );
    }
    metrics::histogram!("quorum_verify_duration_seconds", elapsed.as_secs_f64());
}
