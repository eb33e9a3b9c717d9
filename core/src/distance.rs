use std::collections::VecDeque;

use crate::error::ScaError;
use crate::graph::{Digraph, VertexId};

const UNREACHED: u32 = u32::MAX;

/// Shortest hop counts from one source vertex to everything it can reach.
///
/// Backed by a dense slot per vertex plus the BFS discovery order, so
/// lookups are O(1) and iteration is deterministic. Unreachable vertices
/// are absent; no sentinel distance leaks out of the public API.
#[derive(Debug, Clone)]
pub struct DistanceMap {
    source: VertexId,
    dist: Vec<u32>,
    order: Vec<VertexId>,
}

impl DistanceMap {
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Hop count from the source, or None if `v` is unreachable.
    pub fn get(&self, v: VertexId) -> Option<u32> {
        match self.dist.get(v) {
            Some(&d) if d != UNREACHED => Some(d),
            _ => None,
        }
    }

    pub fn contains(&self, v: VertexId) -> bool {
        self.get(v).is_some()
    }

    /// Number of reachable vertices, including the source.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// `(vertex, distance)` pairs in BFS discovery order.
    ///
    /// Distances along this order never decrease.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, u32)> + '_ {
        self.order.iter().map(move |&v| (v, self.dist[v]))
    }

    /// Reachable vertices in discovery order.
    pub fn vertices(&self) -> &[VertexId] {
        &self.order
    }
}

/// BFS along out-edges from `source`.
///
/// Each vertex is discovered at most once, at its minimum distance, so
/// malformed input with cycles still terminates.
pub fn distances_from(graph: &Digraph, source: VertexId) -> Result<DistanceMap, ScaError> {
    graph.validate(source)?;

    let mut dist = vec![UNREACHED; graph.vertex_count()];
    let mut order = Vec::new();
    let mut queue: VecDeque<VertexId> = VecDeque::new();

    dist[source] = 0;
    order.push(source);
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        let next = dist[current] + 1;
        for &neighbor in graph.out_neighbors(current) {
            if dist[neighbor] == UNREACHED {
                dist[neighbor] = next;
                order.push(neighbor);
                queue.push_back(neighbor);
            }
        }
    }

    Ok(DistanceMap {
        source,
        dist,
        order,
    })
}
