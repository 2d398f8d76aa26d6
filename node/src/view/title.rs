// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Page titles.
//!
//! Components that own a title implement [`Titled`]; whoever mounts them
//! publishes the title on a [`TitleChannel`] and anyone interested subscribes.

use std::sync::Arc;

use tokio::sync::watch;

use super::route::Route;
use super::ViewContext;

pub trait Titled {
    /// Page-specific part of the title.
    fn heading(&self) -> String;

    fn title(&self, ctx: &ViewContext) -> String {
        format!("{} | {}", self.heading(), ctx.app_title)
    }
}

impl Titled for Route {
    fn heading(&self) -> String {
        match self {
            Route::Welcome => "Welcome".to_string(),
            Route::Register => "Register".to_string(),
            Route::UserWallet { .. } => "Wallet".to_string(),
            Route::UserTransfer { .. } => "Transfer".to_string(),
            Route::UserAddFunds { .. } => "Add funds".to_string(),
            Route::BlockchainList => "Blockchain".to_string(),
            Route::BlockDetail { height } => format!("Block {}", height),
            Route::TransactionDetail { .. } => "Transaction".to_string(),
        }
    }
}

/// Latest-value broadcast of the current page title.
#[derive(Debug, Clone)]
pub struct TitleChannel {
    sender: Arc<watch::Sender<String>>,
}

impl TitleChannel {
    pub fn new(initial: impl Into<String>) -> Self {
        let (sender, _) = watch::channel(initial.into());
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Replaces the title. Works with or without subscribers.
    pub fn publish(&self, title: impl Into<String>) {
        self.sender.send_replace(title.into());
    }

    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.sender.subscribe()
    }

    pub fn current(&self) -> String {
        self.sender.borrow().clone()
    }

    /// Publishes `component`'s title and returns it.
    pub fn show(&self, component: &impl Titled, ctx: &ViewContext) -> String {
        let title = component.title(ctx);
        self.publish(title.clone());
        title
    }
}
