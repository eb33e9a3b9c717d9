//! synset-core: shortest-common-ancestor engine over rooted DAGs.
//!
//! A pure Rust library that stores a fixed-size digraph as adjacency
//! lists and answers shortest-common-ancestor queries between vertices
//! and between vertex subsets, using breadth-first distance maps.
//! No file formats or I/O live here; the lexicon crate builds graphs
//! from WordNet data and calls into this one.

mod distance;
mod error;
mod graph;
mod sca;

pub use distance::{distances_from, DistanceMap};
pub use error::ScaError;
pub use graph::{Digraph, VertexId};
pub use sca::{AncestralPath, ShortestCommonAncestor};
