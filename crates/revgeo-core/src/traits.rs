// crates/revgeo-core/src/traits.rs
use crate::common::DatasetStats;
use crate::distance::haversine_km;
use crate::model::{CityDb, Place};
use std::collections::HashSet;

/// A place together with its distance from the query point, in kilometres.
pub type PlaceHit<'a> = (&'a Place, f64);

/// Query operations over a loaded dataset.
pub trait NearestSearch {
    /// Every place, in dataset order.
    fn places(&self) -> &[Place];

    fn stats(&self) -> DatasetStats {
        let places = self.places();
        let countries: HashSet<&str> = places.iter().map(|p| p.country.as_str()).collect();
        DatasetStats {
            places: places.len(),
            countries: countries.len(),
        }
    }

    /// The place with the smallest great-circle distance to `(lat, lng)`.
    ///
    /// Linear scan. On equal distances the place that comes first in dataset
    /// order wins. Returns `None` when no place has a finite distance, which
    /// includes the empty dataset.
    ///
    /// # Example
    ///
    /// ```
    /// use revgeo_core::{CityDb, NearestSearch, Place};
    ///
    /// let db = CityDb::new(vec![
    ///     Place::new("London", "GB", 51.5074, -0.1278),
    ///     Place::new("Paris", "FR", 48.8566, 2.3522),
    /// ]);
    /// let (place, _km) = db.nearest(51.5, -0.1).unwrap();
    /// assert_eq!(place.name(), "London");
    /// ```
    fn nearest(&self, lat: f64, lng: f64) -> Option<PlaceHit<'_>> {
        let mut best: Option<PlaceHit<'_>> = None;
        let mut min = f64::MAX;
        for place in self.places() {
            let (place_lat, place_lng) = place.position();
            let d = haversine_km(lat, lng, place_lat, place_lng);
            if d < min {
                min = d;
                best = Some((place, d));
            }
        }
        best
    }
}

impl NearestSearch for CityDb {
    fn places(&self) -> &[Place] {
        &self.places
    }
}
