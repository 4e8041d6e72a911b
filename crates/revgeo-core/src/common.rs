use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for the loaded dataset.
///
/// Returned by [`crate::traits::NearestSearch::stats`]. Counts reflect the
/// rows that survived validation at load time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetStats {
    pub places: usize,
    pub countries: usize,
}
