//! Functional core for the items service.
//!
//! Holds the item data model and the storage contracts that backends
//! implement. Nothing in this crate performs I/O.

pub mod item;
pub mod storage;
