//! In-memory storage backend for testing.
//!
//! Stores all rows in a `BTreeMap` wrapped in `Arc<RwLock<_>>`. Useful for
//! development scenarios where persistence is not required.

mod repository;

pub use repository::InMemoryRepository;
