// crates/revgeo-core/src/model.rs
use serde::{Deserialize, Serialize};

/// One populated place from the gazetteer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    /// ISO country code. May be empty when the source row carried none.
    pub country: String,
    pub lat: f64,
    pub lng: f64,
}

impl Place {
    pub fn new(name: impl Into<String>, country: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            name: name.into(),
            country: country.into(),
            lat,
            lng,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    /// `(latitude, longitude)` in decimal degrees.
    pub fn position(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

/// The in-memory dataset.
///
/// Built once, then only read. Rows keep file order, which is also the
/// tie-break order of the nearest-place scan.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CityDb {
    pub places: Vec<Place>,
}

impl CityDb {
    pub fn new(places: Vec<Place>) -> Self {
        Self { places }
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }
}

impl FromIterator<Place> for CityDb {
    fn from_iter<I: IntoIterator<Item = Place>>(iter: I) -> Self {
        Self {
            places: iter.into_iter().collect(),
        }
    }
}
