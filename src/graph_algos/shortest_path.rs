use crate::errors::PathPlannerError;
use crate::graph::WeightedGraph;
use super::SearchTree;

use std::{fmt::Debug, hash::Hash};
use num_traits::Zero;

/// Construct the shortest path from the goal vertex back to the start vertex
/// Returns the ordered path as a vector of vertices from start to goal
/// tree: SearchTree<C> - parent index and cost per vertex index
/// goal_index: usize - index of the goal vertex in the graph
pub(crate) fn shortest_path<V, C>(graph: &WeightedGraph<V, C>, tree: &SearchTree<C>, goal_index: usize) -> Result<Vec<V>, PathPlannerError>
where
    V: Eq + Hash + Clone + Debug,
    C: Zero + PartialOrd + Copy + Debug,
{

    let mut path = Vec::new();
    let mut current_index = goal_index;

    // Trace back from goal to start
    while current_index != usize::MAX {
        // a parent chain longer than the graph means the tree is corrupt
        if path.len() > tree.len() {
            return Err(PathPlannerError::Unreachable);
        }

        match (tree.get(current_index), graph.vertex_at(current_index)) {
            (Some(Some((parent_index, _))), Some(vertex)) => {
                path.push(vertex.clone());
                current_index = *parent_index;
            }
            _ => return Err(PathPlannerError::Unreachable),
        }
    }

    // The path is in reverse order, so reverse it
    path.reverse();

    if path.is_empty() {
        return Err(PathPlannerError::Unreachable);
    }

    Ok(path)
}
