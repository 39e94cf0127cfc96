//! Store Data Types
//!
//! The identifier and record shapes shared by the store, the ingestion
//! pipeline and the HTTP layer.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::igc::IgcTrack;

/// Deterministic identifier of a registered track.
///
/// Derived from the source URL string, so the same URL always maps to the
/// same id across requests and across process runs. Serializes as a bare
/// number. Distinct URLs hashing to the same id collide; that risk is
/// accepted rather than corrected (see `TrackStore::append`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TrackId(pub u32);

impl TrackId {
    /// Derives the id for a source URL. Pure, no failure mode.
    ///
    /// CRC-32 is used because the identifier doubles as the dedup key and
    /// must be reproducible on every process run, which rules out the
    /// randomized std hashers.
    pub fn from_url(url: &str) -> Self {
        TrackId(crc32fast::hash(url.as_bytes()))
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Summary metadata of one ingested track.
///
/// Created exactly once at successful ingestion and immutable afterwards.
/// This is also the wire shape of `GET /track/{id}`:
///
/// ```json
/// {
///   "H_date": "2018-08-25T00:00:00Z",
///   "pilot": "John Doe",
///   "glider": "ASK-21",
///   "glider_id": "D-1234",
///   "track_length": 381.53,
///   "track_src_url": "http://example.com/test.igc"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackMeta {
    #[serde(rename = "H_date")]
    pub date: DateTime<Utc>,
    pub pilot: String,
    pub glider: String,
    pub glider_id: String,
    pub track_length: f64,
    pub track_src_url: String,
}

impl TrackMeta {
    /// Builds the metadata record for a parsed track, keyed by the URL the
    /// client registered it under.
    pub fn from_track(src_url: &Url, track: &IgcTrack) -> Self {
        TrackMeta {
            date: track.date,
            pilot: track.pilot.clone(),
            glider: track.glider.clone(),
            glider_id: track.glider_id.clone(),
            track_length: track.total_length(),
            track_src_url: src_url.to_string(),
        }
    }
}
