// crates/revgeo-core/src/lib.rs

//! # revgeo-core
//!
//! Answers "which populated place is closest to this latitude/longitude?"
//! from a GeoNames gazetteer held in memory.
//!
//! ```no_run
//! use revgeo_core::CityLocator;
//!
//! // Tries $CITIES_DATA_PATH, /data/cities500.txt, data/cities500.txt, ...
//! let locator = CityLocator::from_env();
//! let hit = locator.find_nearest(51.5, -0.1)?;
//! println!("{} ({})", hit.name, hit.country);
//! # Ok::<(), revgeo_core::GeoError>(())
//! ```

pub mod common;
pub mod distance;
pub mod error;
pub mod loader;
pub mod locator;
pub mod model;
pub mod traits;

// Re-exports
pub use crate::common::DatasetStats;
pub use crate::error::{GeoError, Result};
pub use crate::loader::{DataSources, LoadOutcome};
pub use crate::locator::{CityLocator, NearestPlace};
pub use crate::model::{CityDb, Place};
pub use crate::traits::NearestSearch;
