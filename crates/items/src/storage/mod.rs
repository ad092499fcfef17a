//! Storage backend implementations.
//!
//! This module provides concrete implementations of the session traits
//! defined in `items_core::storage`. The implementation is selected at
//! compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `sqlite` (default): SQLite storage backend using `rusqlite` and `tokio-rusqlite`
//! - `inmemory`: process-local storage, nothing is persisted
//!
//! These features are mutually exclusive.
//!
//! # Examples
//!
//! Build with the in-memory backend:
//! ```bash
//! cargo build -p items --no-default-features --features inmemory
//! ```

#[cfg(all(feature = "sqlite", feature = "inmemory"))]
compile_error!(
    "Features 'sqlite' and 'inmemory' are mutually exclusive. \
    Enable only one storage backend at a time."
);

#[cfg(not(any(feature = "sqlite", feature = "inmemory")))]
compile_error!(
    "No storage backend selected. Enable 'sqlite' or 'inmemory' feature. \
    Example: cargo build -p items --features sqlite"
);

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "inmemory")]
pub mod inmemory;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteGateway;

#[cfg(feature = "inmemory")]
pub use inmemory::InMemoryRepository;
