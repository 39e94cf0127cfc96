use thiserror::Error;
use url::Url;

use crate::igc;
use crate::store::{StoreError, TrackId, TrackMeta, TrackStore};

/// Ingestion failures, one variant per externally observable outcome.
///
/// Remote-error detail is logged at the point of failure and deliberately
/// not carried in the variants; callers only learn which class of failure
/// occurred.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IngestError {
    /// The submitted URL is not a well-formed absolute http(s) URL.
    #[error("malformed track url")]
    MalformedInput,
    /// The remote file could not be fetched or did not parse as a track.
    #[error("unable to fetch or parse track")]
    FetchOrParseFailure,
    /// A track with the same derived id is already registered.
    #[error("track already registered")]
    DuplicateTrack,
}

impl From<StoreError> for IngestError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::AlreadyExists(_) => IngestError::DuplicateTrack,
        }
    }
}

/// Runs the ingestion pipeline with an injected HTTP client.
///
/// The client is owned so tests can point registrations at a local stub
/// server; no other part of the service performs outbound requests.
#[derive(Debug, Clone)]
pub struct Ingestor {
    client: reqwest::Client,
}

impl Ingestor {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Registers the track behind `raw_url` and returns its derived id.
    ///
    /// The whole fetch and parse happens before the store is touched; the
    /// store's write lock is only held for the final insert. No retries:
    /// every failure is reported to the caller exactly once.
    pub async fn register(&self, raw_url: &str, store: &TrackStore) -> Result<TrackId, IngestError> {
        let url = Url::parse(raw_url).map_err(|err| {
            tracing::warn!("rejected track url '{}': {}", raw_url, err);
            IngestError::MalformedInput
        })?;
        if url.scheme() != "http" && url.scheme() != "https" {
            tracing::warn!("rejected track url '{}': unsupported scheme", raw_url);
            return Err(IngestError::MalformedInput);
        }

        let response = self.client.get(url.clone()).send().await.map_err(|err| {
            tracing::warn!("failed to fetch track from '{}': {}", url, err);
            IngestError::FetchOrParseFailure
        })?;
        if !response.status().is_success() {
            tracing::warn!("fetch of '{}' returned status {}", url, response.status());
            return Err(IngestError::FetchOrParseFailure);
        }
        let body = response.text().await.map_err(|err| {
            tracing::warn!("failed to read track body from '{}': {}", url, err);
            IngestError::FetchOrParseFailure
        })?;

        let track = igc::parse(&body).map_err(|err| {
            tracing::warn!("failed to parse track from '{}': {}", url, err);
            IngestError::FetchOrParseFailure
        })?;

        let meta = TrackMeta::from_track(&url, &track);
        let id = store.append(meta)?;
        tracing::info!("registered track {} from '{}'", id, url);
        Ok(id)
    }
}
