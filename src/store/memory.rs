use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::RwLock;

use thiserror::Error;

use super::types::{TrackId, TrackMeta};

/// Failures surfaced by the store.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("track with the same source url already exists (id {0})")]
    AlreadyExists(TrackId),
}

/// In-memory mapping from `TrackId` to `TrackMeta`, guarded by a single
/// reader/writer lock over the whole map.
///
/// The coarse lock is a deliberate simplicity trade-off: readers overlap
/// with each other, writers are serialized, and no operation is ever
/// observable partially applied. Every operation holds the lock only for
/// its critical section; the expensive part of ingestion (the network
/// fetch) happens long before `append` is called.
#[derive(Debug, Default)]
pub struct TrackStore {
    data: RwLock<HashMap<TrackId, TrackMeta>>,
}

impl TrackStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point lookup. Returns a clone of the record, if present.
    pub fn get(&self, id: TrackId) -> Option<TrackMeta> {
        let data = self.data.read().expect("track store lock poisoned");
        data.get(&id).cloned()
    }

    /// Inserts a record under the id derived from its source URL.
    ///
    /// The duplicate check is "does this derived id already exist", not a
    /// scan over stored URLs, so two distinct URLs with colliding hashes
    /// are also rejected as duplicates. That rare, uncorrected collision
    /// is an accepted trade-off of using the id as the dedup key.
    pub fn append(&self, meta: TrackMeta) -> Result<TrackId, StoreError> {
        let id = TrackId::from_url(&meta.track_src_url);
        let mut data = self.data.write().expect("track store lock poisoned");
        match data.entry(id) {
            Entry::Occupied(_) => Err(StoreError::AlreadyExists(id)),
            Entry::Vacant(slot) => {
                slot.insert(meta);
                Ok(id)
            }
        }
    }

    /// Snapshot of all stored ids at the time of the call.
    ///
    /// The order is unspecified and must not be relied upon.
    pub fn all_ids(&self) -> Vec<TrackId> {
        let data = self.data.read().expect("track store lock poisoned");
        data.keys().copied().collect()
    }
}
