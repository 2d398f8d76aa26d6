// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use quorum_kernel::ConfigError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NodeError {
    #[error("Registry error: {0}")]
    Registry(#[from] ConfigError),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Unknown route: {0}")]
    UnknownRoute(String),
    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] JsonRejection),
}

impl IntoResponse for NodeError {
    fn into_response(self) -> Response {
        let status = match &self {
            NodeError::UnknownRoute(_) => StatusCode::NOT_FOUND,
            NodeError::InvalidRequest(rejection) => rejection.status(),
            NodeError::Registry(_) | NodeError::InvalidConfig(_) | NodeError::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}
