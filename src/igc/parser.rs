use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;

use super::track::{IgcTrack, Point};

/// Reasons an IGC body can be rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IgcParseError {
    #[error("no date record (HFDTE) found")]
    MissingDate,
    #[error("invalid date record: '{0}'")]
    InvalidDate(String),
    #[error("invalid position record: '{0}'")]
    InvalidPosition(String),
}

/// Parses the text of an IGC file into a track.
///
/// Only the records the registry needs are interpreted: the H records
/// carrying date, pilot and glider identification, and the B position
/// fixes. Everything else is skipped. The date record is mandatory, so
/// arbitrary non-IGC content fails here.
pub fn parse(text: &str) -> Result<IgcTrack, IgcParseError> {
    let mut date: Option<DateTime<Utc>> = None;
    let mut pilot = String::new();
    let mut glider = String::new();
    let mut glider_id = String::new();
    let mut points = Vec::new();

    for line in text.lines() {
        let line = line.trim_end();
        match line.as_bytes().first().copied() {
            Some(b'H') => {
                // Byte 1 is the data source (F/O/P), the mnemonic follows.
                match line.get(2..5) {
                    Some("DTE") => date = Some(parse_date(line)?),
                    Some("PLT") => pilot = header_value(line),
                    Some("GTY") => glider = header_value(line),
                    Some("GID") => glider_id = header_value(line),
                    _ => {}
                }
            }
            Some(b'B') => points.push(parse_fix(line)?),
            _ => {}
        }
    }

    let date = date.ok_or(IgcParseError::MissingDate)?;
    Ok(IgcTrack {
        date,
        pilot,
        glider,
        glider_id,
        points,
    })
}

/// Extracts the free-text value of an H record, the part after the first
/// `:`. Records without a value yield an empty string.
fn header_value(line: &str) -> String {
    line.split_once(':')
        .map(|(_, value)| value.trim().to_string())
        .unwrap_or_default()
}

/// Decodes a `HFDTEDDMMYY` record (or the `HFDTEDATE:DDMMYY,NN` variant)
/// into a UTC midnight timestamp. Two-digit years map into 2000..=2099.
fn parse_date(line: &str) -> Result<DateTime<Utc>, IgcParseError> {
    let digits: String = line[5..]
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(6)
        .collect();
    if digits.len() != 6 {
        return Err(IgcParseError::InvalidDate(line.to_string()));
    }

    // The filter above guarantees the slices parse.
    let day: u32 = digits[0..2].parse().unwrap();
    let month: u32 = digits[2..4].parse().unwrap();
    let year: i32 = 2000 + digits[4..6].parse::<i32>().unwrap();

    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .ok_or_else(|| IgcParseError::InvalidDate(line.to_string()))
}

/// Decodes the fixed-width position of a B record:
/// `B` + time(6) + `DDMMmmm[NS]` + `DDDMMmmm[EW]` + the rest.
fn parse_fix(line: &str) -> Result<Point, IgcParseError> {
    if line.len() < 24 || !line.is_ascii() {
        return Err(IgcParseError::InvalidPosition(line.to_string()));
    }

    let lat = decode_angle(&line[7..9], &line[9..14], line.as_bytes()[14], b'N', b'S')
        .ok_or_else(|| IgcParseError::InvalidPosition(line.to_string()))?;
    let lon = decode_angle(&line[15..18], &line[18..23], line.as_bytes()[23], b'E', b'W')
        .ok_or_else(|| IgcParseError::InvalidPosition(line.to_string()))?;

    Ok(Point { lat, lon })
}

/// Converts whole degrees plus thousandths of minutes into signed decimal
/// degrees, with the sign taken from the hemisphere letter.
fn decode_angle(degrees: &str, minute_thousandths: &str, hemi: u8, pos: u8, neg: u8) -> Option<f64> {
    let degrees: u32 = degrees.parse().ok()?;
    let minutes = minute_thousandths.parse::<u32>().ok()? as f64 / 1000.0;
    let angle = f64::from(degrees) + minutes / 60.0;

    if hemi == pos {
        Some(angle)
    } else if hemi == neg {
        Some(-angle)
    } else {
        None
    }
}
