use crate::collections::FxIndexSet;
use crate::errors::GraphError;

use std::{fmt::Debug, hash::Hash};
use num_traits::Zero;


/// Directed weighted graph
/// V: vertex identifier
/// W: edge weight (non-negative)
///
/// Vertices live in an insertion-ordered set; a vertex's position in that set
/// is its index. Each index owns a list of (neighbor index, weight) pairs so
/// traversal never has to hash a neighbor.
#[derive(Clone, Debug)]
pub struct WeightedGraph<V, W> {
    vertices: FxIndexSet<V>,
    adjacency: Vec<Vec<(usize, W)>>,
}

impl<V, W> Default for WeightedGraph<V, W> {
    fn default() -> Self {
        Self {
            vertices: FxIndexSet::default(),
            adjacency: Vec::new(),
        }
    }
}

impl<V, W> WeightedGraph<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Zero + PartialOrd + Copy + Debug,
{

    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate room for the expected number of vertices
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            vertices: FxIndexSet::with_capacity_and_hasher(vertices, Default::default()),
            adjacency: Vec::with_capacity(vertices),
        }
    }

    /// Add a vertex with no outgoing edges
    /// Returns true if the vertex is new.
    /// Re-adding an existing vertex is a no-op: its edges are kept.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        let (_, inserted) = self.vertices.insert_full(vertex);
        if inserted {
            self.adjacency.push(Vec::new());
        }
        inserted
    }

    /// Add (or overwrite) the directed edge src -> dest
    /// Returns true if no edge src -> dest existed before.
    pub fn add_edge(&mut self, src: &V, dest: &V, weight: W) -> Result<bool, GraphError> {
        let (src_idx, dest_idx) = self.endpoints(src, dest)?;

        // rejects negatives and NaN alike
        if !(weight >= W::zero()) {
            return Err(GraphError::InvalidWeight { weight: format!("{weight:?}") });
        }

        let edges = &mut self.adjacency[src_idx];
        match edges.iter_mut().find(|(n, _)| *n == dest_idx) {
            Some(edge) => {
                edge.1 = weight;
                Ok(false)
            }
            None => {
                edges.push((dest_idx, weight));
                Ok(true)
            }
        }
    }

    /// Add the edge in both directions with the same weight
    /// Returns true only if neither direction existed before.
    pub fn add_undirected_edge(&mut self, n1: &V, n2: &V, weight: W) -> Result<bool, GraphError> {
        let forward = self.add_edge(n1, n2, weight)?;
        let backward = self.add_edge(n2, n1, weight)?;
        Ok(forward && backward)
    }

    /// Remove the directed edge src -> dest
    /// Returns true if an edge was removed.
    pub fn remove_edge(&mut self, src: &V, dest: &V) -> Result<bool, GraphError> {
        let (src_idx, dest_idx) = self.endpoints(src, dest)?;

        let edges = &mut self.adjacency[src_idx];
        match edges.iter().position(|(n, _)| *n == dest_idx) {
            Some(pos) => {
                edges.swap_remove(pos);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Weight of the edge i -> j, None if the vertices are not adjacent
    pub fn adjacent(&self, i: &V, j: &V) -> Result<Option<W>, GraphError> {
        let (i_idx, j_idx) = self.endpoints(i, j)?;

        Ok(self.adjacency[i_idx]
            .iter()
            .find(|(n, _)| *n == j_idx)
            .map(|&(_, w)| w))
    }

    /// Vertices reachable from `vertex` over one outgoing edge
    pub fn neighbors<'a>(&'a self, vertex: &V) -> Result<impl Iterator<Item = &'a V> + use<'a, V, W>, GraphError> {
        Ok(self.edges(vertex)?.map(|(n, _)| n))
    }

    /// Outgoing edges of `vertex` as (neighbor, weight)
    pub fn edges<'a>(&'a self, vertex: &V) -> Result<impl Iterator<Item = (&'a V, W)> + use<'a, V, W>, GraphError> {
        let idx = self.require(vertex)?;
        Ok(self.adjacency[idx]
            .iter()
            .filter_map(move |&(n, w)| self.vertices.get_index(n).map(|v| (v, w))))
    }

    /// All vertices, in insertion order
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.vertices.iter()
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.vertices.contains(vertex)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of directed edges (an undirected edge counts twice)
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    // Index based access for the graph algorithms

    pub(crate) fn index_of(&self, vertex: &V) -> Option<usize> {
        self.vertices.get_index_of(vertex)
    }

    pub(crate) fn vertex_at(&self, index: usize) -> Option<&V> {
        self.vertices.get_index(index)
    }

    pub(crate) fn out_edges(&self, index: usize) -> &[(usize, W)] {
        self.adjacency.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    fn require(&self, vertex: &V) -> Result<usize, GraphError> {
        self.index_of(vertex)
            .ok_or_else(|| GraphError::invalid_endpoint(vertex))
    }

    fn endpoints(&self, src: &V, dest: &V) -> Result<(usize, usize), GraphError> {
        Ok((self.require(src)?, self.require(dest)?))
    }
}
