//! Track Metadata Store Module
//!
//! Owns every piece of track metadata the service has ingested, for the
//! lifetime of one server process.
//!
//! ## Core Concepts
//! - **Identity**: a `TrackId` is derived from the source URL with a stable
//!   32-bit hash, so re-registering the same URL always lands on the same id.
//! - **Dedup**: `append` inserts only if the derived id is absent; a second
//!   registration of the same URL is rejected, never overwritten.
//! - **Access**: one coarse reader/writer lock guards the whole map. Readers
//!   overlap with each other; writers are serialized. Callers always receive
//!   clones, never references into the map.

pub mod memory;
pub mod types;

pub use memory::{StoreError, TrackStore};
pub use types::{TrackId, TrackMeta};

#[cfg(test)]
mod tests;
