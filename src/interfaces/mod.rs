//! Interface adapters between external request formats and the engine.

pub mod csv;
