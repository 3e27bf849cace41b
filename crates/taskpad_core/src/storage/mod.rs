//! Persistence adapter layer.
//!
//! # Responsibility
//! - Define the best-effort save/load contract consumed by the service.
//! - Isolate SQLite and JSON details from state logic.
//!
//! # Invariants
//! - Adapter entry points never surface errors to callers; failures are
//!   logged and degrade to no-op saves or empty loads.

pub mod task_storage;
