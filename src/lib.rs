//! IGC Track Registry Service Library
//!
//! This library crate defines the modules that make up the track registry.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The service is composed of four loosely coupled subsystems:
//!
//! - **`igc`**: The track parser. Turns raw IGC file text into a structured
//!   track (header fields plus ordered position fixes) and knows how to
//!   measure distances between fixes.
//! - **`store`**: The concurrent metadata store. Derives deterministic ids
//!   from source URLs and keeps all ingested metadata in a single
//!   reader/writer-locked map for the lifetime of the process.
//! - **`ingestion`**: The intake pipeline. Validates a submitted URL,
//!   downloads the file, parses it, computes the total track length and
//!   appends the resulting record to the store.
//! - **`api`**: The HTTP layer. Routes requests, enforces the path and
//!   status-code contract, and projects single fields out of stored
//!   records.

pub mod api;
pub mod igc;
pub mod ingestion;
pub mod store;
