use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::ingestion::IngestError;

/// The closed set of request failures the API can report.
///
/// Every handler funnels its failures into one of these kinds, and the
/// single `IntoResponse` match below is the only place a kind becomes a
/// status code.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Bad JSON body, bad URL, or a malformed path segment.
    #[error("malformed request")]
    MalformedRequest,
    /// A track with this source URL is already registered.
    #[error("track already registered")]
    DuplicateResource,
    /// Syntactically valid reference to a resource that does not exist.
    #[error("not found")]
    NotFound,
    /// The remote file could not be fetched or parsed. The detail stays in
    /// the server log; the caller only learns that ingestion failed.
    #[error("unable to ingest track")]
    UpstreamFailure,
}

impl From<IngestError> for ApiError {
    fn from(err: IngestError) -> Self {
        match err {
            IngestError::MalformedInput => ApiError::MalformedRequest,
            IngestError::FetchOrParseFailure => ApiError::UpstreamFailure,
            IngestError::DuplicateTrack => ApiError::DuplicateResource,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::MalformedRequest => StatusCode::BAD_REQUEST,
            ApiError::DuplicateResource => StatusCode::FORBIDDEN,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::UpstreamFailure => StatusCode::BAD_REQUEST,
        };
        (status, self.to_string()).into_response()
    }
}
