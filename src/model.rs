//! This module defines the shared data structures used throughout the application.
//! `AppState` is stored as a `TypeMapKey` in Serenity's global context.

use crate::api::ProfileSource;
use crate::config::Config;
use crate::sessions::SessionManager;
use serenity::prelude::TypeMapKey;
use std::sync::Arc;
use tokio::sync::RwLock;

/// The central, shared state of the application.
/// An `Arc<AppState>` is stored in the global context for easy and safe access
/// from any command or event handler.
pub struct AppState {
    pub config: Arc<Config>,
    /// Where player profiles come from; the live bot uses `BrawlClient`.
    pub api: Arc<dyn ProfileSource>,
    /// Live profile views keyed by the message that shows them.
    pub sessions: Arc<RwLock<SessionManager>>,
}

impl AppState {
    pub fn new(config: Arc<Config>, api: Arc<dyn ProfileSource>, sessions: SessionManager) -> Self {
        Self {
            config,
            api,
            sessions: Arc::new(RwLock::new(sessions)),
        }
    }

    pub async fn from_ctx(ctx: &serenity::prelude::Context) -> Option<Arc<Self>> {
        ctx.data.read().await.get::<AppState>().cloned()
    }
}

impl TypeMapKey for AppState {
    type Value = Arc<AppState>;
}
