use crate::collections::FxIndexSet;
use crate::errors::GraphError;
use crate::graph::WeightedGraph;

use std::{fmt::Debug, hash::Hash};
use num_traits::Zero;
use tracing::debug;


/// Collect every vertex reachable from start over graph edges whose
/// straight-line distance from start is strictly below threshold
///
/// The gate is evaluated against the fixed start point for each candidate,
/// not against the cumulative path cost. A vertex with a short road path can
/// be excluded when it lies beyond the radius, and a vertex inside the radius
/// is included no matter how winding the road to it is, as long as every
/// stop along the way is inside the radius too.
///
/// distance_from_start: straight-line distance of a vertex to start
/// Returns the vertices in visitation order (depth first), start always first.
pub fn reachable_within<V, W, C, D>(graph: &WeightedGraph<V, W>, start: &V, threshold: C, distance_from_start: D) -> Result<FxIndexSet<V>, GraphError>
where
    V: Eq + Hash + Clone + Debug,
    W: Zero + PartialOrd + Copy + Debug,
    C: PartialOrd,
    D: Fn(&V) -> C,
    {

    let start_index = graph.index_of(start)
        .ok_or_else(|| GraphError::invalid_endpoint(start))?;

    // vertices already pushed onto the worklist
    let mut seen = vec![false; graph.vertex_count()];
    seen[start_index] = true;

    let mut worklist = vec![start_index];
    let mut reached: FxIndexSet<V> = FxIndexSet::default();

    while let Some(index) = worklist.pop() {
        if let Some(vertex) = graph.vertex_at(index) {
            reached.insert(vertex.clone());
        }

        for &(neighbor, _) in graph.out_edges(index) {
            if seen[neighbor] {
                continue;
            }

            let admitted = graph.vertex_at(neighbor)
                .is_some_and(|v| distance_from_start(v) < threshold);

            if admitted {
                seen[neighbor] = true;
                worklist.push(neighbor);
            }
        }
    }

    debug!(reached = reached.len(), "threshold search finished");
    Ok(reached)
}
