//! Campus map: location registry, building index and road graph.
//!
//! The registry owns every [`GeoLocation`]. The road graph and the building
//! set only hold [`LocationId`]s and resolve them through the registry, so
//! nothing outlives or aliases the registry entries.
//!
//! A map is assembled once (see [`MapIndex::build`]) and is read-only after
//! that; it can be shared freely between threads.

mod records;

pub use records::{BuildingRecord, Road, WaypointRecord};

use tracing::{debug, info, warn};

use crate::collections::{FxIndexMap, FxIndexSet};
use crate::errors::{MapError, PathPlannerError};
use crate::geometry::{DistanceMetric, GeoLocation, LocationId};
use crate::graph::WeightedGraph;
use crate::graph_algos::{dijkstra, path_cost, reachable_within};


/// A route between two locations along the road graph
#[derive(Clone, Debug, PartialEq)]
pub struct Route<'a> {
    /// Every location on the way, start and target included
    pub stops: Vec<&'a GeoLocation>,
    /// Sum of the road segment lengths, in the map's distance unit
    pub distance: f64,
}


#[derive(Clone, Debug, Default)]
pub struct MapIndex {
    graph: WeightedGraph<LocationId, f64>,
    locations: FxIndexMap<LocationId, GeoLocation>,
    buildings: FxIndexSet<LocationId>,
    metric: DistanceMetric,
}

impl MapIndex {

    /// Empty map using the given distance metric
    pub fn new(metric: DistanceMetric) -> Self {
        Self {
            metric,
            ..Self::default()
        }
    }

    /// Build a map with great-circle distances (feet)
    pub fn build<B, P, R>(buildings: B, waypoints: P, roads: R) -> Result<Self, MapError>
    where
        B: IntoIterator<Item = BuildingRecord>,
        P: IntoIterator<Item = WaypointRecord>,
        R: IntoIterator<Item = Road>,
    {
        Self::build_with_metric(buildings, waypoints, roads, DistanceMetric::GreatCircle)
    }

    /// Build a map from loader records
    /// Buildings and waypoints are registered first, then every road segment
    /// becomes an undirected edge weighted by the distance between its ends.
    pub fn build_with_metric<B, P, R>(buildings: B, waypoints: P, roads: R, metric: DistanceMetric) -> Result<Self, MapError>
    where
        B: IntoIterator<Item = BuildingRecord>,
        P: IntoIterator<Item = WaypointRecord>,
        R: IntoIterator<Item = Road>,
    {
        let mut map = Self::new(metric);

        for building in buildings {
            map.add_building(building.into())?;
        }
        for waypoint in waypoints {
            map.add_waypoint(waypoint.into())?;
        }
        for road in roads {
            map.add_road(&road)?;
        }

        info!(
            locations = map.location_count(),
            buildings = map.buildings.len(),
            edges = map.graph.edge_count(),
            ?metric,
            "campus map built"
        );
        Ok(map)
    }

    /// Register a building and add it to the road graph
    pub fn add_building(&mut self, location: GeoLocation) -> Result<(), MapError> {
        let id = location.id;
        self.register(location)?;
        self.buildings.insert(id);
        Ok(())
    }

    /// Register a routing-only waypoint and add it to the road graph
    pub fn add_waypoint(&mut self, location: GeoLocation) -> Result<(), MapError> {
        self.register(location)
    }

    /// Join every consecutive pair of the road with an undirected edge
    /// All ids are checked before any edge is added.
    /// Returns the number of segments that were not already in the graph.
    pub fn add_road(&mut self, road: &Road) -> Result<usize, MapError> {
        if road.0.len() < 2 {
            warn!(ids = road.0.len(), "road has fewer than two locations, skipping");
            return Ok(0);
        }

        let mut segments = Vec::with_capacity(road.0.len() - 1);
        for (a, b) in road.segments() {
            let from = self.location(a)?;
            let to = self.location(b)?;
            segments.push((a, b, self.metric.distance(from, to)));
        }

        let mut added = 0;
        for (a, b, distance) in segments {
            if self.graph.add_undirected_edge(&a, &b, distance)? {
                added += 1;
            }
        }
        Ok(added)
    }

    /// Buildings with exactly this name, in insertion order
    pub fn by_name(&self, name: &str) -> Vec<&GeoLocation> {
        self.buildings()
            .filter(|location| location.has_name(name))
            .collect()
    }

    pub fn by_id(&self, id: LocationId) -> Option<&GeoLocation> {
        self.locations.get(&id)
    }

    /// Building closest to (lat, lon); the first one wins on ties
    pub fn nearest_building(&self, lat: f64, lon: f64) -> Result<&GeoLocation, MapError> {
        let mut nearest: Option<(&GeoLocation, f64)> = None;

        for building in self.buildings() {
            let distance = self.metric.between(building.lat, building.lon, lat, lon);
            match nearest {
                Some((_, best)) if best <= distance => {}
                _ => nearest = Some((building, distance)),
            }
        }

        nearest.map(|(building, _)| building).ok_or(MapError::Empty)
    }

    /// All buildings, in insertion order
    pub fn buildings(&self) -> impl Iterator<Item = &GeoLocation> + '_ {
        self.buildings.iter().filter_map(|id| self.locations.get(id))
    }

    pub fn is_building(&self, id: LocationId) -> bool {
        self.buildings.contains(&id)
    }

    /// Locations reachable over roads from start whose straight-line
    /// distance from start is below the threshold (feet for the default metric)
    ///
    /// Each stop is checked against the start point itself, not against the
    /// length of the road walked to get there.
    pub fn reachable_within(&self, start: LocationId, threshold: f64) -> Result<Vec<&GeoLocation>, MapError> {
        let origin = self.location(start)?;

        let reached = reachable_within(&self.graph, &start, threshold, |id| {
            self.locations
                .get(id)
                .map_or(f64::INFINITY, |location| self.metric.distance(origin, location))
        })?;

        debug!(%start, threshold, reached = reached.len(), "reachability query");
        Ok(reached.iter().filter_map(|id| self.locations.get(id)).collect())
    }

    /// Shortest road path from start to target, both included
    ///
    /// Errors:
    /// - `MapError::UnknownLocation` if start or target was never registered
    /// - `MapError::RouteNotFound` if both exist but no road connects them
    pub fn shortest_path(&self, start: LocationId, target: LocationId) -> Result<Vec<&GeoLocation>, MapError> {
        Ok(self.route(start, target)?.stops)
    }

    /// Shortest road path along with its length
    /// Fails the same way as [`MapIndex::shortest_path`].
    pub fn route(&self, start: LocationId, target: LocationId) -> Result<Route<'_>, MapError> {
        self.location(start)?;
        self.location(target)?;

        let path = dijkstra(&self.graph, &start, &target).map_err(|err| match err {
            PathPlannerError::Unreachable => MapError::RouteNotFound { start, target },
            PathPlannerError::Graph(err) => MapError::Graph(err),
        })?;

        let distance = path_cost(&self.graph, &path)?
            .ok_or(MapError::RouteNotFound { start, target })?;

        let stops = path
            .iter()
            .map(|id| self.location(*id))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(%start, %target, stops = stops.len(), distance, "route found");
        Ok(Route { stops, distance })
    }

    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    pub fn metric(&self) -> DistanceMetric {
        self.metric
    }

    /// Read-only view of the road graph
    pub fn graph(&self) -> &WeightedGraph<LocationId, f64> {
        &self.graph
    }

    fn location(&self, id: LocationId) -> Result<&GeoLocation, MapError> {
        self.locations.get(&id).ok_or(MapError::UnknownLocation { id })
    }

    fn register(&mut self, location: GeoLocation) -> Result<(), MapError> {
        let id = location.id;
        if self.locations.contains_key(&id) {
            return Err(MapError::DuplicateLocation { id });
        }
        self.graph.add_vertex(id);
        self.locations.insert(id, location);
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::GraphError;

    fn planar_map() -> MapIndex {
        let mut map = MapIndex::new(DistanceMetric::Planar);
        map.add_building(GeoLocation::named(LocationId(1), "A", 0.0, 0.0)).unwrap();
        map.add_waypoint(GeoLocation::unnamed(LocationId(2), 0.0, 3.0)).unwrap();
        map.add_building(GeoLocation::named(LocationId(3), "C", 0.0, 6.0)).unwrap();
        map.add_road(&Road::new([1i64, 2, 3])).unwrap();
        map
    }

    fn ids(locations: &[&GeoLocation]) -> Vec<i64> {
        locations.iter().map(|l| l.id.0).collect()
    }

    #[test]
    fn test_road_edges_weighted_by_metric() {
        let map = planar_map();
        let graph = map.graph();
        assert_eq!(graph.adjacent(&LocationId(1), &LocationId(2)).unwrap(), Some(3.0));
        assert_eq!(graph.adjacent(&LocationId(2), &LocationId(1)).unwrap(), Some(3.0));
        assert_eq!(graph.adjacent(&LocationId(1), &LocationId(3)).unwrap(), None);
        assert_eq!(graph.edge_count(), 4);
    }

    #[test]
    fn test_route_and_distance() {
        let map = planar_map();
        let route = map.route(LocationId(1), LocationId(3)).unwrap();
        assert_eq!(ids(&route.stops), vec![1, 2, 3]);
        assert_eq!(route.distance, 6.0);
    }

    #[test]
    fn test_waypoints_are_not_buildings() {
        let map = planar_map();
        assert!(map.is_building(LocationId(1)));
        assert!(!map.is_building(LocationId(2)));
        assert_eq!(map.buildings().count(), 2);
        assert_eq!(map.location_count(), 3);
    }

    #[test]
    fn test_duplicate_location_rejected() {
        let mut map = planar_map();
        let err = map.add_waypoint(GeoLocation::unnamed(LocationId(2), 1.0, 1.0)).unwrap_err();
        assert_eq!(err, MapError::DuplicateLocation { id: LocationId(2) });
        // the first registration is kept
        assert_eq!(map.by_id(LocationId(2)).map(|l| l.lat), Some(0.0));
    }

    #[test]
    fn test_road_with_unknown_id_adds_nothing() {
        let mut map = planar_map();
        let before = map.graph().edge_count();
        let err = map.add_road(&Road::new([1i64, 3, 99])).unwrap_err();
        assert_eq!(err, MapError::UnknownLocation { id: LocationId(99) });
        assert_eq!(map.graph().edge_count(), before);
    }

    #[test]
    fn test_short_road_is_skipped() {
        let mut map = planar_map();
        assert_eq!(map.add_road(&Road::new([1i64])).unwrap(), 0);
        assert_eq!(map.add_road(&Road::default()).unwrap(), 0);
        // re-adding an existing segment is not counted
        assert_eq!(map.add_road(&Road::new([1i64, 2])).unwrap(), 0);
        assert_eq!(map.add_road(&Road::new([1i64, 3])).unwrap(), 1);
    }

    #[test]
    fn test_unknown_ids_in_queries() {
        let map = planar_map();
        assert_eq!(map.by_id(LocationId(42)), None);
        assert_eq!(
            map.reachable_within(LocationId(42), 10.0).unwrap_err(),
            MapError::UnknownLocation { id: LocationId(42) }
        );
        assert_eq!(
            map.shortest_path(LocationId(1), LocationId(42)).unwrap_err(),
            MapError::UnknownLocation { id: LocationId(42) }
        );
    }

    #[test]
    fn test_empty_map() {
        let map = MapIndex::default();
        assert_eq!(map.nearest_building(0.0, 0.0).unwrap_err(), MapError::Empty);
        assert!(map.by_name("Library").is_empty());
        assert_eq!(map.metric(), DistanceMetric::GreatCircle);
    }

    #[test]
    fn test_graph_errors_convert() {
        let err: MapError = GraphError::InvalidEndpoint { vertex: "7".to_string() }.into();
        assert!(matches!(err, MapError::Graph(_)));
    }
}
