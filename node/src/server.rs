// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    routing::{get, post},
    Json, Router,
};
use quorum_kernel::{evaluate, Bundle, ValidatorRegistry};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::*;
use crate::errors::NodeError;
use crate::telemetry;
use crate::view::{Panel, Route, TitleChannel, ViewContext};

/// Shared by every handler. Nothing in here is mutated after startup except
/// the title channel, which does its own synchronization.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<ValidatorRegistry>,
    pub view: Arc<ViewContext>,
    pub titles: TitleChannel,
}

impl AppState {
    pub fn new(registry: ValidatorRegistry, view: ViewContext) -> Self {
        let titles = TitleChannel::new(view.app_title.clone());
        Self {
            registry: Arc::new(registry),
            view: Arc::new(view),
            titles,
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/v1/verify", post(verify_bundle))
        .route("/v1/validators", get(list_validators))
        .route("/v1/route", get(resolve_route))
        // Observability
        .route("/metrics", get(metrics_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn verify_bundle(
    State(app): State<AppState>,
    payload: Result<Json<Bundle>, JsonRejection>,
) -> Result<Json<VerifyResponse>, NodeError> {
    let Json(bundle) = payload?;
    let route = Route::for_state(&bundle.state);
    let kind = bundle.state.kind();

    let started = Instant::now();
    let verdict = evaluate(bundle.state, &bundle.confirmations, &app.registry);
    telemetry::record_verdict(&verdict, started.elapsed());

    tracing::info!(
        kind,
        confirmations = bundle.confirmations.len(),
        discarded = verdict.discarded.len(),
        verified = verdict.result.is_verified(),
        "claim evaluated"
    );

    let panel = Panel::render(&verdict.result, route, app.registry.quorum_threshold(), &app.view);
    Ok(Json(VerifyResponse::new(panel, &verdict)))
}

async fn list_validators(State(app): State<AppState>) -> Json<ValidatorsResponse> {
    let registry = &app.registry;
    Json(ValidatorsResponse {
        size: registry.size(),
        quorum_threshold: registry.quorum_threshold(),
        fault_tolerance: registry.fault_tolerance(),
        validators: registry.keys().iter().map(|k| k.to_hex()).collect(),
    })
}

async fn resolve_route(
    State(app): State<AppState>,
    Query(query): Query<RouteQuery>,
) -> Result<Json<RouteResponse>, NodeError> {
    let route = Route::parse(&query.path).ok_or(NodeError::UnknownRoute(query.path))?;
    let title = app.titles.show(&route, &app.view);

    Ok(Json(RouteResponse {
        path: route.path(),
        data_endpoint: route.data_endpoint(&app.view),
        title,
        route,
    }))
}

async fn metrics_handler() -> String {
    telemetry::get_metrics()
}
