use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};


/// Opaque identifier of a map location / graph vertex
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationId(pub i64);

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for LocationId {
    fn from(id: i64) -> Self {
        LocationId(id)
    }
}


/// A point on the map
/// Buildings carry a name, waypoints usually do not.
/// Two locations are equal iff their ids are equal.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GeoLocation {
    pub id: LocationId,
    pub name: Option<String>,
    pub lat: f64,
    pub lon: f64,
}

impl GeoLocation {

    /// Named location (building)
    pub fn named(id: LocationId, name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self { id, name: Some(name.into()), lat, lon }
    }

    /// Unnamed location (waypoint)
    pub fn unnamed(id: LocationId, lat: f64, lon: f64) -> Self {
        Self { id, name: None, lat, lon }
    }

    pub fn has_name(&self, name: &str) -> bool {
        self.name.as_deref() == Some(name)
    }
}

impl PartialEq for GeoLocation {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
impl Eq for GeoLocation {}

impl Hash for GeoLocation {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for GeoLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{name} #{} ({:.6}, {:.6})", self.id, self.lat, self.lon),
            None => write!(f, "#{} ({:.6}, {:.6})", self.id, self.lat, self.lon),
        }
    }
}
