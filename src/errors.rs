use thiserror::Error;

use crate::geometry::LocationId;


/// Structural errors raised by the weighted graph
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// An edge or lookup referenced a vertex that was never added
    #[error("vertex {vertex} is not in the graph")]
    InvalidEndpoint { vertex: String },

    /// Edge weights must be non-negative (NaN is rejected as well)
    #[error("invalid edge weight {weight}; weights must be non-negative")]
    InvalidWeight { weight: String },
}

impl GraphError {
    pub(crate) fn invalid_endpoint<V: std::fmt::Debug>(vertex: &V) -> Self {
        GraphError::InvalidEndpoint { vertex: format!("{vertex:?}") }
    }
}


#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathPlannerError {
    /// Unable to find a path to the goal, or an endpoint is not in the graph
    #[error("no path found to goal")]
    Unreachable,

    #[error(transparent)]
    Graph(#[from] GraphError),
}


/// Errors surfaced by the campus map
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MapError {
    /// A road or query referenced an id that was never registered
    #[error("unknown location id {id}")]
    UnknownLocation { id: LocationId },

    /// Building and waypoint ids share one namespace
    #[error("location id {id} registered more than once")]
    DuplicateLocation { id: LocationId },

    /// Query needs at least one building
    #[error("map has no buildings")]
    Empty,

    #[error("no route found between {start} and {target}")]
    RouteNotFound { start: LocationId, target: LocationId },

    #[error(transparent)]
    Graph(#[from] GraphError),
}
