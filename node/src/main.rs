// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use quorum_node::config::NodeConfig;
use quorum_node::errors::NodeError;
use quorum_node::server::{build_router, AppState};
use quorum_node::telemetry;
use quorum_node::view::ViewContext;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), NodeError> {
    telemetry::init_telemetry();

    if let Err(e) = run().await {
        tracing::error!("Node stopped: {}", e);
        return Err(e);
    }
    Ok(())
}

async fn run() -> Result<(), NodeError> {
    let cfg = NodeConfig::from_env()?;
    tracing::info!("Initializing quorum node with config: {:?}", cfg);

    // A client that cannot match the network's validator set must not start.
    let registry = cfg.registry()?;
    tracing::info!(
        validators = registry.size(),
        quorum = registry.quorum_threshold(),
        tolerated_faults = registry.fault_tolerance(),
        "Validator registry loaded"
    );
    telemetry::record_registry(&registry);

    let state = AppState::new(registry, ViewContext::from(&cfg));

    let mut titles = state.titles.subscribe();
    tokio::spawn(async move {
        while titles.changed().await.is_ok() {
            let title = titles.borrow_and_update().clone();
            tracing::debug!(%title, "Title changed");
        }
    });

    let app = build_router(state);

    let addr = cfg.bind_addr;
    tracing::info!("Listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
