//! Chunk generation machinery: validation, failure taxonomy, the
//! bounded-retry fetch state machine, and the progressive assembly.
//!
//! - [`validate`]: JSON extraction, schema parse, cardinality floor
//! - [`fault`]: rejection and service-fault taxonomy
//! - [`fetch::ChunkFetch`]: per-chunk retry state machine
//! - [`assembly::DeckAssembly`]: order-invariant progressive merge

pub mod assembly;
pub mod fault;
pub mod fetch;
pub mod validate;
