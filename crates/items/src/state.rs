//! Application state shared by all request handlers.
//!
//! Holds the process-wide session factory. It is created once at startup
//! and cloned into every handler; each request derives its own session
//! from it.

use std::sync::Arc;

use items_core::storage::{ItemRepository, Result, SessionFactory};

use crate::config::Config;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Session factory for the active storage backend.
    pub sessions: Arc<dyn SessionFactory>,
}

impl AppState {
    pub fn with_sessions(sessions: Arc<dyn SessionFactory>) -> Self {
        Self { sessions }
    }

    /// Opens a storage session scoped to the caller.
    pub async fn open_session(&self) -> Result<Box<dyn ItemRepository>> {
        self.sessions.open_session().await
    }
}

// ============================================================================
// Factory functions for each storage backend
// ============================================================================

#[cfg(feature = "sqlite")]
mod sqlite_backend {
    use super::*;
    use crate::storage::SqliteGateway;

    impl AppState {
        /// Creates AppState backed by the SQLite file named in `config`.
        ///
        /// Creates the file and the items table when missing.
        pub async fn new(config: &Config) -> anyhow::Result<Self> {
            let gateway = SqliteGateway::open(&config.database_path).await?;
            Ok(Self::with_sessions(Arc::new(gateway)))
        }
    }
}

#[cfg(feature = "inmemory")]
mod inmemory_backend {
    use super::*;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage.
        /// Useful for testing without any external dependencies.
        pub async fn new(_config: &Config) -> anyhow::Result<Self> {
            tracing::warn!("Using in-memory storage, items will not be persisted");
            Ok(Self::with_sessions(Arc::new(InMemoryRepository::new())))
        }
    }
}

// ============================================================================
// Test support
// ============================================================================
