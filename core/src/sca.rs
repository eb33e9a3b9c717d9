use tracing::{debug, trace};

use crate::distance::{distances_from, DistanceMap};
use crate::error::ScaError;
use crate::graph::{Digraph, VertexId};

/// A shortest ancestral path `v -> ancestor <- w`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AncestralPath {
    pub ancestor: VertexId,
    pub v: VertexId,
    pub w: VertexId,
    /// `dist(v, ancestor) + dist(w, ancestor)`.
    pub length: u32,
}

/// Shortest-common-ancestor queries over a borrowed rooted DAG.
///
/// Holds nothing but the graph reference. Every query runs fresh BFS
/// passes and drops its distance maps before returning, so results never
/// depend on query order and one graph can back any number of engines,
/// on any number of threads.
///
/// `None` results mean the two sides share no ancestor, which only happens
/// when the input is not a single-rooted DAG.
#[derive(Debug, Clone, Copy)]
pub struct ShortestCommonAncestor<'g> {
    graph: &'g Digraph,
}

impl<'g> ShortestCommonAncestor<'g> {
    pub fn new(graph: &'g Digraph) -> Self {
        Self { graph }
    }

    pub fn graph(&self) -> &'g Digraph {
        self.graph
    }

    /// Length of the shortest ancestral path between `v` and `w`.
    pub fn length(&self, v: VertexId, w: VertexId) -> Result<Option<u32>, ScaError> {
        Ok(self.ancestral_path(v, w)?.map(|p| p.length))
    }

    /// A shortest common ancestor of `v` and `w`.
    pub fn ancestor(&self, v: VertexId, w: VertexId) -> Result<Option<VertexId>, ScaError> {
        Ok(self.ancestral_path(v, w)?.map(|p| p.ancestor))
    }

    /// Ancestor and length of the shortest ancestral path between `v` and `w`.
    ///
    /// Among ancestors of equal total length the smallest vertex id wins,
    /// which keeps the answer identical for `(v, w)` and `(w, v)`.
    pub fn ancestral_path(
        &self,
        v: VertexId,
        w: VertexId,
    ) -> Result<Option<AncestralPath>, ScaError> {
        self.graph.validate(v)?;
        self.graph.validate(w)?;

        let from_v = distances_from(self.graph, v)?;
        let from_w = distances_from(self.graph, w)?;
        Ok(closest_common(&from_v, &from_w))
    }

    /// Length of the shortest ancestral path between any `v` in `a` and any `w` in `b`.
    pub fn length_subsets<A, B>(&self, a: A, b: B) -> Result<Option<u32>, ScaError>
    where
        A: IntoIterator<Item = VertexId>,
        B: IntoIterator<Item = VertexId>,
    {
        Ok(self.triad(a, b)?.map(|p| p.length))
    }

    /// A shortest common ancestor of vertex subsets `a` and `b`.
    pub fn ancestor_subsets<A, B>(&self, a: A, b: B) -> Result<Option<VertexId>, ScaError>
    where
        A: IntoIterator<Item = VertexId>,
        B: IntoIterator<Item = VertexId>,
    {
        Ok(self.triad(a, b)?.map(|p| p.ancestor))
    }

    /// The best `(ancestor, v, w)` over the full cross product `a x b`.
    ///
    /// The ancestor is a common ancestor of the chosen `v` and `w`
    /// specifically, not merely of the two sets. Pairs are visited with `a`
    /// outer and `b` inner; only a strictly shorter path replaces the
    /// current best, so ties go to the first pair in that order.
    pub fn triad<A, B>(&self, a: A, b: B) -> Result<Option<AncestralPath>, ScaError>
    where
        A: IntoIterator<Item = VertexId>,
        B: IntoIterator<Item = VertexId>,
    {
        let a: Vec<VertexId> = a.into_iter().collect();
        let b: Vec<VertexId> = b.into_iter().collect();
        if a.is_empty() {
            return Err(ScaError::EmptySubset { argument: "A" });
        }
        if b.is_empty() {
            return Err(ScaError::EmptySubset { argument: "B" });
        }
        let a = self.distinct_members(a)?;
        let b = self.distinct_members(b)?;

        // Maps for `b` are reused across the outer loop; all of them die with this call.
        let from_b = b
            .iter()
            .map(|&w| distances_from(self.graph, w))
            .collect::<Result<Vec<DistanceMap>, ScaError>>()?;

        let mut best: Option<AncestralPath> = None;
        for &v in &a {
            let from_v = distances_from(self.graph, v)?;
            for from_w in &from_b {
                let Some(path) = closest_common(&from_v, from_w) else {
                    trace!(v, w = from_w.source(), "no common ancestor");
                    continue;
                };
                trace!(v, w = path.w, ancestor = path.ancestor, length = path.length, "pair");
                if best.map_or(true, |current| path.length < current.length) {
                    best = Some(path);
                }
            }
        }

        debug!(
            a = a.len(),
            b = b.len(),
            ancestor = best.map(|p| p.ancestor),
            length = best.map(|p| p.length),
            "subset query"
        );
        Ok(best)
    }

    /// Validate every member and drop repeats, keeping first occurrences in order.
    fn distinct_members(&self, members: Vec<VertexId>) -> Result<Vec<VertexId>, ScaError> {
        let mut seen = vec![false; self.graph.vertex_count()];
        let mut distinct = Vec::with_capacity(members.len());
        for v in members {
            self.graph.validate(v)?;
            if !seen[v] {
                seen[v] = true;
                distinct.push(v);
            }
        }
        Ok(distinct)
    }
}

/// Best common key of two distance maps.
///
/// Walks `from_v` in discovery order, where distances never decrease, so
/// the scan stops once `dist(v, candidate)` alone exceeds the best total.
fn closest_common(from_v: &DistanceMap, from_w: &DistanceMap) -> Option<AncestralPath> {
    let mut best: Option<(VertexId, u32)> = None;

    for (candidate, dv) in from_v.iter() {
        if let Some((_, best_len)) = best {
            if dv > best_len {
                break;
            }
        }
        let Some(dw) = from_w.get(candidate) else {
            continue;
        };
        let total = dv + dw;
        let better = match best {
            None => true,
            Some((id, len)) => total < len || (total == len && candidate < id),
        };
        if better {
            best = Some((candidate, total));
        }
    }

    best.map(|(ancestor, length)| AncestralPath {
        ancestor,
        v: from_v.source(),
        w: from_w.source(),
        length,
    })
}
