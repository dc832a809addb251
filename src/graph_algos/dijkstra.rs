use crate::errors::{GraphError, PathPlannerError};
use crate::collections::FxIndexMap;
use crate::graph::WeightedGraph;
use super::{shortest_path, SearchTree};

use std::{collections::BinaryHeap, hash::Hash, cmp::Ordering, fmt::Debug, ops::Sub};
use num_traits::{Bounded, Zero};
use tracing::debug;




/// Identify the shortest path using Dijkstra's Algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// Returns the path from start to target, both included.
/// start == target gives a single element path.
///
/// Ties: among vertices with equal tentative cost the one added to the graph
/// first is settled first, and a predecessor is only replaced by a strictly
/// cheaper one. Equal-cost routes therefore resolve the same way every run.
pub fn dijkstra<V, C>(graph: &WeightedGraph<V, C>, start: &V, target: &V) -> Result<Vec<V>, PathPlannerError>
where
    V: Eq + Hash + Clone + Debug,
    C: Zero + Bounded + Sub<Output = C> + PartialOrd + Copy + Debug,
    {

    // Missing endpoints are reported like any other failed search
    let (Some(start_index), Some(target_index)) = (graph.index_of(start), graph.index_of(target)) else {
        return Err(PathPlannerError::Unreachable);
    };

    // Build the tree - terminates when the target is settled
    let (tree, goal_index) = build_dijkstra_tree(graph, start_index, Some(target_index));

    if let Some(goal_index) = goal_index {
        // find the path
        let path = shortest_path(graph, &tree, goal_index)?;
        Ok(path)
    } else {
        Err(PathPlannerError::Unreachable)
    }
}


/// Returns the settled cost of every vertex reachable from start
pub fn dijkstra_costs<V, C>(graph: &WeightedGraph<V, C>, start: &V) -> Result<FxIndexMap<V, C>, PathPlannerError>
where
    V: Eq + Hash + Clone + Debug,
    C: Zero + Bounded + Sub<Output = C> + PartialOrd + Copy + Debug,
    {

    let start_index = graph.index_of(start)
        .ok_or_else(|| GraphError::invalid_endpoint(start))?;

    // Build the full tree - no target
    let (tree, _) = build_dijkstra_tree(graph, start_index, None);

    Ok(tree.iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            let (_, cost) = (*entry)?;
            graph.vertex_at(index).map(|v| (v.clone(), cost))
        })
        .collect())
}


/// Sum of the edge weights along a path
/// Ok(None) if two consecutive vertices are not adjacent,
/// or if the sum does not fit in the weight type
pub fn path_cost<V, C>(graph: &WeightedGraph<V, C>, path: &[V]) -> Result<Option<C>, GraphError>
where
    V: Eq + Hash + Clone + Debug,
    C: Zero + Bounded + Sub<Output = C> + PartialOrd + Copy + Debug,
    {

    let mut total = C::zero();
    for pair in path.windows(2) {
        match graph.adjacent(&pair[0], &pair[1])? {
            Some(weight) => match checked_total(total, weight) {
                Some(sum) => total = sum,
                None => return Ok(None),
            },
            None => return Ok(None),
        }
    }
    Ok(Some(total))
}


/// Traverses the graph using Dijkstra's algorithm
/// Returns the search tree along with the index of the target, if it was settled
fn build_dijkstra_tree<V, C>(graph: &WeightedGraph<V, C>, start_index: usize, target_index: Option<usize>) -> (SearchTree<C>, Option<usize>)
where
    V: Eq + Hash + Clone + Debug,
    C: Zero + Bounded + Sub<Output = C> + PartialOrd + Copy + Debug,
    {

    let vertex_count = graph.vertex_count();

    // parent index + best known cost per vertex index
    // the start vertex has no parent, marked with usize::MAX
    let mut tree: SearchTree<C> = vec![None; vertex_count];
    tree[start_index] = Some((usize::MAX, Zero::zero()));

    // settled vertices - cost is final, never relaxed again
    let mut settled = vec![false; vertex_count];

    // Nodes to visit - binary heap sorts Biggest to Smallest
    // NodeId reverses the ordering so the cheapest vertex pops first
    let mut nodes_to_visit: BinaryHeap<NodeId<C>> = BinaryHeap::new();
    nodes_to_visit.push(NodeId {
        index: start_index,
        cost: Zero::zero(),
    });

    let mut expanded = 0usize;

    // Loop over each node to visit, removing the smallest node
    while let Some(NodeId { index, cost }) = nodes_to_visit.pop() {

        // Stale heap entry - a cheaper one for this vertex was already handled
        if settled[index] {
            continue;
        }
        settled[index] = true;
        expanded += 1;

        // Check if we've reached the target
        if Some(index) == target_index {
            debug!(expanded, "dijkstra settled target");
            return (tree, Some(index));
        }

        // loop over outgoing edges
        for &(neighbor, edge_cost) in graph.out_edges(index) {
            if settled[neighbor] {
                continue;
            }

            // new cost to reach this node = edge cost + node cost
            // a cost past the weight type's maximum is treated as no path
            let Some(new_cost) = checked_total(cost, edge_cost) else {
                continue;
            };

            // Only keep strictly better paths
            let improves = match tree[neighbor] {
                None => true,
                Some((_, known)) => new_cost < known,
            };
            if !improves {
                continue;
            }

            tree[neighbor] = Some((index, new_cost));
            nodes_to_visit.push(NodeId {
                index: neighbor,
                cost: new_cost,
            });
        }
    }

    debug!(expanded, "dijkstra exhausted frontier");
    (tree, None)
}


/// cost + edge, None if it would exceed C::max_value()
/// Both operands are non-negative, so max - cost never underflows
fn checked_total<C>(cost: C, edge: C) -> Option<C>
where
    C: Zero + Bounded + Sub<Output = C> + PartialOrd + Copy,
{
    if edge > C::max_value() - cost {
        None
    } else {
        Some(cost + edge)
    }
}


/// Heap entry
/// - for ordering we only need cost and a way to identify the vertex
/// - equal costs fall back to the lower vertex index
#[derive(Debug)]
struct NodeId<T> {
    index: usize,
    cost: T
}

impl<T: PartialOrd> Ord for NodeId<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // weights are validated on insert, so costs are never NaN
        other.cost.partial_cmp(&self.cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.index.cmp(&self.index))
    }
}
impl<T: PartialOrd> PartialOrd for NodeId<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<T: PartialOrd> PartialEq for NodeId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl<T: PartialOrd> Eq for NodeId<T> {}
