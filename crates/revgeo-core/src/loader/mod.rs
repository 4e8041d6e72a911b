// crates/revgeo-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (file lookup, I/O, decompression) and delegates
//! row parsing to [`gazetteer`].
//!
//! Nothing here is guarded: every call reads the file again. The
//! exactly-once guarantee lives in [`crate::locator::CityLocator`].

use crate::error::GeoError;
use crate::model::CityDb;
use std::path::{Path, PathBuf};

pub mod common_io;
pub mod gazetteer;

/// Environment variable holding the preferred dataset path.
pub const DATA_PATH_ENV: &str = "CITIES_DATA_PATH";

/// GeoNames export of all places with a population of 500 or more.
pub const DEFAULT_DATASET_FILENAME: &str = "cities500.txt";

/// Where the container image mounts the dataset.
pub const CONTAINER_DATA_PATH: &str = "/data/cities500.txt";

/// Result of reading one gazetteer file.
///
/// `error` is set when the file could not be opened (and `db` is empty) or
/// when reading stopped partway (and `db` holds the rows read before that).
#[derive(Debug, Clone, Default)]
pub struct LoadOutcome {
    pub db: CityDb,
    pub error: Option<GeoError>,
}

impl LoadOutcome {
    /// A candidate is accepted when it produced rows, or was read to the end.
    /// An empty but readable file is accepted.
    pub fn is_usable(&self) -> bool {
        !self.db.is_empty() || self.error.is_none()
    }
}

/// Reads and parses a gazetteer file. Per-row problems never fail the load.
pub fn load_file(path: &Path) -> LoadOutcome {
    let reader = match common_io::open_stream(path) {
        Ok(r) => r,
        Err(error) => {
            return LoadOutcome {
                db: CityDb::default(),
                error: Some(error),
            }
        }
    };
    let (db, error) = gazetteer::read_places(reader, path);
    LoadOutcome { db, error }
}

/// Ordered list of dataset locations to try.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataSources {
    candidates: Vec<PathBuf>,
}

impl DataSources {
    /// The fallback chain:
    /// `$CITIES_DATA_PATH`, `/data/cities500.txt`, `data/cities500.txt`,
    /// `./data/cities500.txt`, `../data/cities500.txt`.
    pub fn from_env() -> Self {
        let env_path = std::env::var_os(DATA_PATH_ENV).map(PathBuf::from);
        Self::with_override(env_path)
    }

    /// The fallback chain with `first` in place of the environment variable.
    pub fn with_override(first: Option<PathBuf>) -> Self {
        let local: PathBuf = ["data", DEFAULT_DATASET_FILENAME].iter().collect();
        let explicit: PathBuf = [".", "data", DEFAULT_DATASET_FILENAME].iter().collect();
        let parent: PathBuf = ["..", "data", DEFAULT_DATASET_FILENAME].iter().collect();

        Self::new(
            first
                .into_iter()
                .chain([PathBuf::from(CONTAINER_DATA_PATH), local, explicit, parent]),
        )
    }

    /// Exactly one location, no fallbacks.
    pub fn single(path: impl Into<PathBuf>) -> Self {
        Self::new([path.into()])
    }

    /// Empty paths are skipped.
    pub fn new<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let candidates = paths
            .into_iter()
            .map(Into::into)
            .filter(|p: &PathBuf| !p.as_os_str().is_empty())
            .collect();
        Self { candidates }
    }

    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    /// Tries each candidate in order and keeps the first usable one.
    ///
    /// `on_attempt` runs before every file open. When nothing is usable the
    /// returned outcome is empty and carries [`GeoError::NoData`] wrapping the
    /// last failure.
    pub fn resolve(&self, mut on_attempt: impl FnMut(&Path)) -> LoadOutcome {
        let mut last: Option<GeoError> = None;

        for path in &self.candidates {
            on_attempt(path);
            let outcome = load_file(path);
            if outcome.is_usable() {
                tracing::info!(
                    path = %path.display(),
                    places = outcome.db.len(),
                    "cities dataset loaded"
                );
                if let Some(err) = &outcome.error {
                    tracing::warn!(error = %err, "cities dataset only partially read");
                }
                return outcome;
            }
            if let Some(err) = outcome.error {
                tracing::debug!(path = %path.display(), error = %err, "dataset candidate failed");
                last = Some(err);
            }
        }

        let error = GeoError::NoData {
            last: last.map(Box::new),
        };
        tracing::error!(error = %error, "no usable cities dataset");
        LoadOutcome {
            db: CityDb::default(),
            error: Some(error),
        }
    }
}
