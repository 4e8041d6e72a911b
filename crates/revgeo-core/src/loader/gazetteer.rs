// crates/revgeo-core/src/loader/gazetteer.rs

//! GeoNames-style tab-separated gazetteer parsing.
//!
//! Row policy: a line with fewer than [`MIN_FIELDS`] tab-separated fields, or
//! whose latitude/longitude do not parse as finite numbers, is dropped
//! without an error. Dropping such rows is part of normal loading, not a
//! failure. Only an I/O error while reading ends the load early.

use crate::error::GeoError;
use crate::model::{CityDb, Place};
use std::borrow::Cow;
use std::io::{self, BufRead};
use std::path::Path;

pub const MIN_FIELDS: usize = 9;

const NAME: usize = 1;
const LATITUDE: usize = 4;
const LONGITUDE: usize = 5;
const COUNTRY_CODE: usize = 8;

/// Parses one gazetteer line, returning `None` for rows the policy drops.
pub fn parse_line(line: &str) -> Option<Place> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() < MIN_FIELDS {
        return None;
    }
    let lat = parse_coord(fields[LATITUDE])?;
    let lng = parse_coord(fields[LONGITUDE])?;
    Some(Place::new(fields[NAME], fields[COUNTRY_CODE], lat, lng))
}

fn parse_coord(field: &str) -> Option<f64> {
    field.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Reads every line of `reader` into a dataset.
///
/// Lines that are not valid UTF-8 are decoded lossily and then go through
/// the usual row policy, so one mis-encoded name never ends the load. On an
/// I/O error the rows parsed so far are returned together with the error.
/// `path` is only used to label that error.
pub fn read_places<R: BufRead>(mut reader: R, path: &Path) -> (CityDb, Option<GeoError>) {
    let mut places = Vec::new();
    let mut dropped = 0usize;
    let mut lossy = 0usize;
    let mut buf = Vec::new();

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                let rows = places.len();
                return (CityDb::new(places), Some(GeoError::read(path, rows, e)));
            }
        }

        let line = String::from_utf8_lossy(trim_line_end(&buf));
        if matches!(line, Cow::Owned(_)) {
            lossy += 1;
        }
        match parse_line(&line) {
            Some(place) => places.push(place),
            None => dropped += 1,
        }
    }

    tracing::debug!(
        path = %path.display(),
        rows = places.len(),
        dropped,
        lossy,
        "gazetteer parsed"
    );
    (CityDb::new(places), None)
}

/// Strips a trailing `\n` or `\r\n`.
fn trim_line_end(buf: &[u8]) -> &[u8] {
    let buf = buf.strip_suffix(b"\n").unwrap_or(buf);
    buf.strip_suffix(b"\r").unwrap_or(buf)
}
