pub mod dijkstra;
pub mod reachability;
mod shortest_path;

pub use dijkstra::{dijkstra, dijkstra_costs, path_cost};
pub use reachability::reachable_within;

use shortest_path::shortest_path;

/// Type alias for the search tree built by the graph algorithms
/// Indexed by vertex index in the graph
/// C: Cost of reaching the node from the start
/// Some((parent_index, cost)) once a vertex has been reached, where:
/// - parent_index is the index of the predecessor vertex, usize::MAX for the start
/// - cost is the best known total cost from the start
pub type SearchTree<C> = Vec<Option<(usize, C)>>;
