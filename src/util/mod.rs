//! Utility helpers shared across page controllers and bindings.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (timers, storage, DOM lookups)
//! behind small seams so state machines stay testable on the host.

#[cfg(feature = "hydrate")]
pub mod dom;
pub mod hooks;
pub mod schedule;
pub mod storage;
