//! Application layer containing the lifecycle orchestration.
//!
//! This module defines the `LendingEngine`, the primary entry point for
//! the four lifecycle operations. It owns the storage backend and the
//! identifier generator, and invokes the lender policies, scheduler and
//! default monitor synchronously.

pub mod engine;
