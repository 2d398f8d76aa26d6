// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Headless view layer.
//!
//! Components never reach for global state: each one gets a [`ViewContext`]
//! and, when it changes the page title, a [`TitleChannel`] handle.

pub mod route;
pub mod title;
pub mod panel;

pub use panel::Panel;
pub use route::Route;
pub use title::{TitleChannel, Titled};

use crate::config::NodeConfig;

/// Explicit configuration handed to every component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewContext {
    pub gateway_url: String,
    pub app_title: String,
}

impl From<&NodeConfig> for ViewContext {
    fn from(cfg: &NodeConfig) -> Self {
        Self {
            gateway_url: cfg.gateway_url.clone(),
            app_title: cfg.app_title.clone(),
        }
    }
}
