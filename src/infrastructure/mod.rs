//! Infrastructure layer: concrete adapters for the domain ports.

pub mod context;
pub mod ids;
pub mod in_memory;
#[cfg(feature = "storage-rocksdb")]
pub mod rocksdb;
