use serde::{Deserialize, Serialize};

use crate::geometry::{GeoLocation, LocationId};


/// A named building, as handed over by the data loader
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BuildingRecord {
    pub id: LocationId,
    pub lat: f64,
    pub lon: f64,
    pub name: String,
}

/// A routing-only point with no name
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WaypointRecord {
    pub id: LocationId,
    pub lat: f64,
    pub lon: f64,
}

/// A polyline of location ids; consecutive ids are joined by a footpath/road
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Road(pub Vec<LocationId>);

impl Road {
    pub fn new(ids: impl IntoIterator<Item = impl Into<LocationId>>) -> Self {
        Road(ids.into_iter().map(Into::into).collect())
    }

    /// Consecutive id pairs, one per road segment
    pub fn segments(&self) -> impl Iterator<Item = (LocationId, LocationId)> + '_ {
        self.0.windows(2).map(|pair| (pair[0], pair[1]))
    }
}

impl From<BuildingRecord> for GeoLocation {
    fn from(record: BuildingRecord) -> Self {
        GeoLocation {
            id: record.id,
            name: Some(record.name),
            lat: record.lat,
            lon: record.lon,
        }
    }
}

impl From<WaypointRecord> for GeoLocation {
    fn from(record: WaypointRecord) -> Self {
        GeoLocation::unnamed(record.id, record.lat, record.lon)
    }
}
