//! HTTP API Module
//!
//! The externally visible surface of the service: routing, request
//! validation, field projection and the status-code contract.
//!
//! ## Routes
//! - `GET /` — service metadata (uptime, static info, version).
//! - `POST /track` — register a track by URL, returns its derived id.
//! - `GET /track` — list all stored ids.
//! - `GET /track/:id` — full metadata record.
//! - `GET /track/:id/:field` — one field rendered as bare text.
//!
//! Unknown paths are 404; known paths with an unsupported method are 405
//! with an `Allow` header (axum's method router fills it in). The store and
//! the ingestor are injected at construction via `Extension` layers; there
//! are no ambient singletons.

pub mod error;
pub mod handlers;
pub mod types;

pub use error::ApiError;

use std::sync::Arc;

use axum::routing::get;
use axum::{Extension, Router};

use crate::ingestion::Ingestor;
use crate::store::TrackStore;
use types::ServiceInfo;

/// Builds the service router with all handler state injected.
pub fn app(store: Arc<TrackStore>, ingestor: Arc<Ingestor>) -> Router {
    Router::new()
        .route("/", get(handlers::handle_service_meta))
        .route(
            "/track",
            get(handlers::handle_list_tracks).post(handlers::handle_register_track),
        )
        .route("/track/:id", get(handlers::handle_get_track))
        .route("/track/:id/:field", get(handlers::handle_get_track_field))
        .layer(Extension(store))
        .layer(Extension(ingestor))
        .layer(Extension(Arc::new(ServiceInfo::new())))
}
