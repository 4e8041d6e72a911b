// crates/revgeo-core/src/error.rs
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Errors produced while loading the gazetteer or answering a lookup.
///
/// The load-once guard records the outcome of the one load it runs and hands
/// the same error to every later caller, so this type is `Clone`. I/O sources
/// are kept behind an `Arc` for that reason.
#[derive(Debug, Clone, Error)]
pub enum GeoError {
    /// The gazetteer file could not be opened.
    #[error("open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: Arc<io::Error>,
    },

    /// Reading failed partway through the file. Rows parsed before the
    /// failure are kept.
    #[error("read {} after {rows} rows: {source}", .path.display())]
    Read {
        path: PathBuf,
        rows: usize,
        #[source]
        source: Arc<io::Error>,
    },

    /// The dataset loaded but holds no usable rows.
    #[error("no cities found")]
    NoCities,

    /// Every candidate path failed, or there was no candidate to try.
    #[error("failed to load cities data from any location{}", last_suffix(.last))]
    NoData { last: Option<Box<GeoError>> },
}

fn last_suffix(last: &Option<Box<GeoError>>) -> String {
    match last {
        Some(e) => format!(": {e}"),
        None => String::new(),
    }
}

impl GeoError {
    pub(crate) fn open(path: impl Into<PathBuf>, source: io::Error) -> Self {
        GeoError::Open {
            path: path.into(),
            source: Arc::new(source),
        }
    }

    pub(crate) fn read(path: impl Into<PathBuf>, rows: usize, source: io::Error) -> Self {
        GeoError::Read {
            path: path.into(),
            rows,
            source: Arc::new(source),
        }
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, GeoError>;
