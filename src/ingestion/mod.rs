//! Track Ingestion Module
//!
//! The fetch → parse → compute → store sequence behind `POST /track`.
//!
//! ## Workflow
//! 1. **Validate**: the submitted URL must be absolute http(s); nothing is
//!    fetched for a malformed URL.
//! 2. **Fetch**: the file is downloaded with the injected `reqwest::Client`.
//! 3. **Parse**: the body is handed to the IGC parser; any fetch or parse
//!    problem collapses into one "unable to ingest" failure class.
//! 4. **Store**: the metadata record is appended under its derived id; a
//!    duplicate id is reported as such.
//!
//! The fetch finishes before the store lock is ever taken, so a slow remote
//! host never blocks readers or other ingestions.

pub mod pipeline;

pub use pipeline::{IngestError, Ingestor};
