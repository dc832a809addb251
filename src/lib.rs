//! Campus map navigation.
//!
//! Locations (named buildings and unnamed waypoints) are joined by roads into
//! a weighted graph. On top of it the crate answers:
//!
//! - lookups by id and by building name
//! - the building nearest to a coordinate
//! - the locations reachable within a straight-line radius
//! - the shortest road route between two locations (Dijkstra)
//!
//! ```
//! use campus_nav::{BuildingRecord, DistanceMetric, LocationId, MapIndex, Road, WaypointRecord};
//!
//! let buildings = vec![
//!     BuildingRecord { id: LocationId(1), lat: 0.0, lon: 0.0, name: "Library".into() },
//!     BuildingRecord { id: LocationId(3), lat: 0.0, lon: 6.0, name: "Gym".into() },
//! ];
//! let waypoints = vec![WaypointRecord { id: LocationId(2), lat: 0.0, lon: 3.0 }];
//! let roads = vec![Road::new([1i64, 2, 3])];
//!
//! let map = MapIndex::build_with_metric(buildings, waypoints, roads, DistanceMetric::Planar)?;
//! let route = map.route(LocationId(1), LocationId(3))?;
//! assert_eq!(route.stops.len(), 3);
//! assert_eq!(route.distance, 6.0);
//! # Ok::<(), campus_nav::MapError>(())
//! ```

pub mod collections;
pub mod errors;
pub mod geometry;
pub mod graph;
pub mod graph_algos;
pub mod map;

pub use errors::{GraphError, MapError, PathPlannerError};
pub use geometry::{DistanceMetric, GeoLocation, LocationId};
pub use graph::WeightedGraph;
pub use map::{BuildingRecord, MapIndex, Road, Route, WaypointRecord};
