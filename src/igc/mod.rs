//! IGC Track Parsing Module
//!
//! Turns the raw text of an IGC flight-recorder file into a structured track.
//! The rest of the service treats this module as an opaque capability: bytes
//! go in, either a track with a header and an ordered point sequence comes
//! out, or a parse error does.
//!
//! ## Supported Records
//! - **H records**: flight date (`HFDTE`, required), pilot, glider type and
//!   glider id (optional, empty when absent).
//! - **B records**: position fixes, decoded to signed decimal degrees.
//!
//! Unknown record types are skipped. A body without a valid date record is
//! rejected, which is what filters out arbitrary non-IGC content.

pub mod parser;
pub mod track;

pub use parser::{parse, IgcParseError};
pub use track::{IgcTrack, Point};
