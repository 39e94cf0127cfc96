use std::sync::Arc;

use axum::extract::{Extension, Path};
use axum::Json;
use chrono::SecondsFormat;

use super::error::ApiError;
use super::types::{RegisterRequest, RegisterResponse, ServiceInfo, ServiceMetaResponse};
use crate::ingestion::Ingestor;
use crate::store::{TrackId, TrackMeta, TrackStore};

pub async fn handle_service_meta(
    Extension(info): Extension<Arc<ServiceInfo>>,
) -> Json<ServiceMetaResponse> {
    Json(info.meta())
}

/// `POST /track`: decode `{"url": ...}`, run the ingestion pipeline and
/// return the derived id.
///
/// The body is decoded from the raw string here rather than through the
/// `Json` extractor, so that every malformed body (bad JSON, missing or
/// null `url`) uniformly reports 400.
pub async fn handle_register_track(
    Extension(store): Extension<Arc<TrackStore>>,
    Extension(ingestor): Extension<Arc<Ingestor>>,
    body: String,
) -> Result<Json<RegisterResponse>, ApiError> {
    let request: RegisterRequest = serde_json::from_str(&body).map_err(|err| {
        tracing::warn!("rejected registration body: {}", err);
        ApiError::MalformedRequest
    })?;

    let id = ingestor.register(&request.url, &store).await?;
    Ok(Json(RegisterResponse { id }))
}

pub async fn handle_list_tracks(
    Extension(store): Extension<Arc<TrackStore>>,
) -> Json<Vec<TrackId>> {
    Json(store.all_ids())
}

pub async fn handle_get_track(
    Extension(store): Extension<Arc<TrackStore>>,
    Path(raw_id): Path<String>,
) -> Result<Json<TrackMeta>, ApiError> {
    let id = parse_id_segment(&raw_id)?;
    store.get(id).map(Json).ok_or(ApiError::NotFound)
}

/// `GET /track/:id/:field`: one field of a record, rendered as bare text.
///
/// Both path segments are validated before the store is consulted, so a
/// request with an unknown field name reports 400 even when the id does
/// not exist; only a syntactically clean request can reach the 404.
pub async fn handle_get_track_field(
    Extension(store): Extension<Arc<TrackStore>>,
    Path((raw_id, raw_field)): Path<(String, String)>,
) -> Result<String, ApiError> {
    let id = parse_id_segment(&raw_id)?;
    let field = TrackField::from_name(&raw_field).ok_or(ApiError::MalformedRequest)?;

    let meta = store.get(id).ok_or(ApiError::NotFound)?;
    Ok(field.project(&meta))
}

/// Validates an id path segment.
///
/// Any non-digit character (a sign, decoration, anything) is a malformed
/// request, not a miss. A digits-only value outside the u32 domain cannot
/// name a stored track and is reported as absent.
fn parse_id_segment(raw: &str) -> Result<TrackId, ApiError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiError::MalformedRequest);
    }
    raw.parse::<u32>().map(TrackId).map_err(|_| ApiError::NotFound)
}

/// The fixed allow-list of projectable record fields.
///
/// An explicit name-to-accessor mapping keeps the 400-on-unknown-field
/// contract testable; nothing is looked up dynamically.
enum TrackField {
    Date,
    Pilot,
    Glider,
    GliderId,
    TrackLength,
    TrackSrcUrl,
}

impl TrackField {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "H_date" => Some(TrackField::Date),
            "pilot" => Some(TrackField::Pilot),
            "glider" => Some(TrackField::Glider),
            "glider_id" => Some(TrackField::GliderId),
            "track_length" => Some(TrackField::TrackLength),
            "track_src_url" => Some(TrackField::TrackSrcUrl),
            _ => None,
        }
    }

    /// Renders the field as text, without quotes or JSON framing.
    fn project(&self, meta: &TrackMeta) -> String {
        match self {
            TrackField::Date => meta.date.to_rfc3339_opts(SecondsFormat::Secs, true),
            TrackField::Pilot => meta.pilot.clone(),
            TrackField::Glider => meta.glider.clone(),
            TrackField::GliderId => meta.glider_id.clone(),
            TrackField::TrackLength => meta.track_length.to_string(),
            TrackField::TrackSrcUrl => meta.track_src_url.clone(),
        }
    }
}
