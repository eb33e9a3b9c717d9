use std::collections::TryReserveError;

use crate::error::ScaError;

/// Dense vertex identifier in `[0, vertex_count)`.
pub type VertexId = usize;

/// Fixed-size directed graph stored as adjacency lists.
///
/// Edges point from a synset to its hypernym. Vertex count is fixed at
/// construction; edges are appended and never removed.
#[derive(Debug, Clone, Default)]
pub struct Digraph {
    adjacency: Vec<Vec<VertexId>>,
    edge_count: usize,
}

impl Digraph {
    /// A graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
            edge_count: 0,
        }
    }

    /// Like [`Digraph::new`], but reports an allocation failure instead of
    /// aborting. Used when the vertex count comes from untrusted input.
    pub fn try_new(vertex_count: usize) -> Result<Self, TryReserveError> {
        let mut adjacency = Vec::new();
        adjacency.try_reserve_exact(vertex_count)?;
        adjacency.resize_with(vertex_count, Vec::new);
        Ok(Self {
            adjacency,
            edge_count: 0,
        })
    }

    /// Pre-allocate adjacency lists for a known average out-degree.
    pub fn with_capacity(vertex_count: usize, edge_count: usize) -> Self {
        let per_vertex = if vertex_count == 0 {
            0
        } else {
            edge_count.div_ceil(vertex_count)
        };
        Self {
            adjacency: (0..vertex_count)
                .map(|_| Vec::with_capacity(per_vertex))
                .collect(),
            edge_count: 0,
        }
    }

    /// Build a graph from an edge list. The first out-of-range endpoint aborts the build.
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Result<Self, ScaError>
    where
        I: IntoIterator<Item = (VertexId, VertexId)>,
    {
        let mut graph = Self::new(vertex_count);
        for (source, target) in edges {
            graph.add_edge(source, target)?;
        }
        Ok(graph)
    }

    /// Add a directed edge `source -> target`. Parallel edges are kept.
    pub fn add_edge(&mut self, source: VertexId, target: VertexId) -> Result<(), ScaError> {
        self.validate(source)?;
        self.validate(target)?;
        self.adjacency[source].push(target);
        self.edge_count += 1;
        Ok(())
    }

    /// Outgoing neighbors in insertion order. Empty for unknown vertices.
    pub fn out_neighbors(&self, v: VertexId) -> &[VertexId] {
        self.adjacency.get(v).map(|a| a.as_slice()).unwrap_or(&[])
    }

    pub fn out_degree(&self, v: VertexId) -> usize {
        self.out_neighbors(v).len()
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn contains(&self, v: VertexId) -> bool {
        v < self.adjacency.len()
    }

    /// Return `v` unchanged if it names a vertex of this graph.
    pub fn validate(&self, v: VertexId) -> Result<VertexId, ScaError> {
        if self.contains(v) {
            Ok(v)
        } else {
            Err(ScaError::VertexOutOfRange {
                vertex: v,
                vertex_count: self.vertex_count(),
            })
        }
    }

    /// Approximate memory usage in bytes.
    pub fn memory_usage(&self) -> usize {
        use std::mem::size_of;

        let lists = self.adjacency.len() * size_of::<Vec<VertexId>>();
        let edges: usize = self
            .adjacency
            .iter()
            .map(|a| a.capacity() * size_of::<VertexId>())
            .sum();

        lists + edges
    }
}
