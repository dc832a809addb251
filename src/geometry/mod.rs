mod location;

pub use location::{GeoLocation, LocationId};

use num_traits::{Float, NumCast};
use serde::{Deserialize, Serialize};


/// Mean Earth radius in feet (6_371_000 m)
pub const EARTH_RADIUS_FEET: f64 = 20_902_231.0;


/// Euclidean distance
pub fn euclidean<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Float,
    {
    ((x1 - x2).powi(2) + (y1 - y2).powi(2)).sqrt()
}

/// Haversine great-circle distance in feet
/// https://en.wikipedia.org/wiki/Haversine_formula
/// Inputs are latitude/longitude in degrees
pub fn haversine_feet<T>(lat1: T, lon1: T, lat2: T, lon2: T) -> T
where
    T: Float,
    {
    let two = T::one() + T::one();
    let radius: T = <T as NumCast>::from(EARTH_RADIUS_FEET).unwrap_or_else(T::nan);

    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / two).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / two).sin().powi(2);

    // clamp guards against a drifting just above 1.0 for antipodal points
    let c = two * a.sqrt().min(T::one()).asin();
    radius * c
}


/// Distance function used across a map
/// One metric is picked per map so edge weights, reachability pruning
/// and nearest-building queries all agree
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceMetric {
    /// Haversine distance in feet
    #[default]
    GreatCircle,
    /// Plain euclidean distance with (lat, lon) treated as (y, x)
    Planar,
}

impl DistanceMetric {

    /// Distance between two (lat, lon) pairs
    pub fn between(&self, lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
        match self {
            DistanceMetric::GreatCircle => haversine_feet(lat1, lon1, lat2, lon2),
            DistanceMetric::Planar => euclidean(lon1, lat1, lon2, lat2),
        }
    }

    /// Distance between two locations
    pub fn distance(&self, a: &GeoLocation, b: &GeoLocation) -> f64 {
        self.between(a.lat, a.lon, b.lat, b.lon)
    }
}
