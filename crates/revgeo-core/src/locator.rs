// crates/revgeo-core/src/locator.rs

//! # Nearest-place engine
//!
//! [`CityLocator`] owns the dataset and the guard that loads it. The guard is
//! a [`OnceCell`]: the first caller runs the load (walking the candidate
//! paths), concurrent callers block until it finishes, and everyone after
//! that sees the same recorded outcome. A failed load is never retried by
//! the same locator.

use crate::common::DatasetStats;
use crate::error::{GeoError, Result};
use crate::loader::{load_file, DataSources, LoadOutcome};
use crate::model::{CityDb, Place};
use crate::traits::NearestSearch;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Name and country of the place nearest to a query point.
#[derive(Debug, Clone, PartialEq)]
pub struct NearestPlace {
    pub name: String,
    pub country: String,
    pub distance_km: f64,
}

impl From<(&Place, f64)> for NearestPlace {
    fn from((place, distance_km): (&Place, f64)) -> Self {
        Self {
            name: place.name.clone(),
            country: place.country.clone(),
            distance_km,
        }
    }
}

#[derive(Debug)]
pub struct CityLocator {
    sources: DataSources,
    state: OnceCell<LoadOutcome>,
    load_attempts: AtomicUsize,
}

impl CityLocator {
    /// A locator that loads lazily from `sources` on first use.
    pub fn new(sources: DataSources) -> Self {
        Self {
            sources,
            state: OnceCell::new(),
            load_attempts: AtomicUsize::new(0),
        }
    }

    /// A locator using the standard fallback chain (see [`DataSources::from_env`]).
    pub fn from_env() -> Self {
        Self::new(DataSources::from_env())
    }

    /// A locator over an in-memory dataset. No file is ever read.
    pub fn from_db(db: CityDb) -> Self {
        Self {
            sources: DataSources::default(),
            state: OnceCell::with_value(LoadOutcome { db, error: None }),
            load_attempts: AtomicUsize::new(0),
        }
    }

    pub fn sources(&self) -> &DataSources {
        &self.sources
    }

    /// Loads the dataset from `path` unless a load already ran.
    ///
    /// This bypasses the fallback chain: an unreadable `path` records its
    /// [`GeoError::Open`] error as the permanent outcome.
    ///
    /// Returns the error recorded by whichever load ran, including an earlier
    /// one. A partially read file reports its read error even though its rows
    /// are kept.
    pub fn load(&self, path: impl Into<PathBuf>) -> Result<()> {
        let path = path.into();
        let outcome = self.state.get_or_init(|| {
            self.note_attempt(&path);
            load_file(&path)
        });
        Self::status(outcome)
    }

    /// Runs the fallback walk once and returns its status.
    pub fn ensure_loaded(&self) -> Result<()> {
        Self::status(self.outcome())
    }

    /// The dataset, loading it first if needed.
    ///
    /// Errors when it holds no places: with the recorded load error if there
    /// is one, otherwise with [`GeoError::NoCities`].
    pub fn dataset(&self) -> Result<&CityDb> {
        let outcome = self.outcome();
        if !outcome.db.is_empty() {
            return Ok(&outcome.db);
        }
        Err(outcome.error.clone().unwrap_or(GeoError::NoCities))
    }

    /// The place nearest to `(lat, lng)` in decimal degrees.
    ///
    /// Coordinates are not range-checked.
    pub fn find_nearest(&self, lat: f64, lng: f64) -> Result<NearestPlace> {
        let db = self.dataset()?;
        db.nearest(lat, lng)
            .map(NearestPlace::from)
            .ok_or(GeoError::NoCities)
    }

    /// `true` once a load has completed, successfully or not.
    pub fn is_initialized(&self) -> bool {
        self.state.get().is_some()
    }

    /// The error recorded by the completed load, if any.
    pub fn load_error(&self) -> Option<&GeoError> {
        self.state.get().and_then(|o| o.error.as_ref())
    }

    /// Statistics of the loaded dataset, without triggering a load.
    pub fn loaded_stats(&self) -> Option<DatasetStats> {
        self.state.get().map(|o| o.db.stats())
    }

    /// Number of dataset files opened so far.
    pub fn load_attempts(&self) -> usize {
        self.load_attempts.load(Ordering::Relaxed)
    }

    fn outcome(&self) -> &LoadOutcome {
        self.state
            .get_or_init(|| self.sources.resolve(|p| self.note_attempt(p)))
    }

    fn note_attempt(&self, path: &Path) {
        self.load_attempts.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(path = %path.display(), "trying cities dataset");
    }

    fn status(outcome: &LoadOutcome) -> Result<()> {
        match &outcome.error {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }
}
