use std::collections::{BTreeMap, BTreeSet};
use std::io::BufRead;
use std::path::Path;
use std::time::Instant;

use synset_core::{Digraph, ShortestCommonAncestor, VertexId};
use tracing::debug;

use crate::error::LexiconError;
use crate::load::{self, LoadOptions, Synset};

/// A WordNet noun lexicon: synsets, the noun index, and the hypernym graph.
///
/// Immutable once built. Queries borrow the graph through a fresh
/// [`ShortestCommonAncestor`] each time, which costs nothing to create.
#[derive(Debug)]
pub struct WordNet {
    synsets: Vec<Synset>,
    /// Noun -> ids of every synset containing it, ascending.
    index: BTreeMap<String, BTreeSet<VertexId>>,
    graph: Digraph,
}

impl WordNet {
    /// Load from a synsets file and a hypernyms file with default options.
    pub fn from_paths(
        synsets: impl AsRef<Path>,
        hypernyms: impl AsRef<Path>,
    ) -> Result<Self, LexiconError> {
        Self::with_options(synsets, hypernyms, &LoadOptions::default())
    }

    pub fn with_options(
        synsets: impl AsRef<Path>,
        hypernyms: impl AsRef<Path>,
        options: &LoadOptions,
    ) -> Result<Self, LexiconError> {
        let (synsets, hypernyms) = (synsets.as_ref(), hypernyms.as_ref());
        Self::build(
            load::open(synsets)?,
            &synsets.display().to_string(),
            load::open(hypernyms)?,
            &hypernyms.display().to_string(),
            options,
        )
    }

    /// Load from in-memory or already-open sources.
    pub fn from_readers<S: BufRead, H: BufRead>(
        synsets: S,
        hypernyms: H,
        options: &LoadOptions,
    ) -> Result<Self, LexiconError> {
        Self::build(synsets, "synsets", hypernyms, "hypernyms", options)
    }

    fn build<S: BufRead, H: BufRead>(
        synsets: S,
        synsets_name: &str,
        hypernyms: H,
        hypernyms_name: &str,
        options: &LoadOptions,
    ) -> Result<Self, LexiconError> {
        let start = Instant::now();

        let synsets = load::read_synsets(synsets, synsets_name)?;

        let mut index: BTreeMap<String, BTreeSet<VertexId>> = BTreeMap::new();
        for synset in &synsets {
            for noun in synset.nouns() {
                index.entry(noun.to_string()).or_default().insert(synset.id);
            }
        }

        let mut graph = Digraph::new(synsets.len());
        let edges = load::read_hypernyms(hypernyms, hypernyms_name, &mut graph, options)?;

        debug!(
            synsets = synsets.len(),
            nouns = index.len(),
            edges,
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "lexicon loaded"
        );

        Ok(Self {
            synsets,
            index,
            graph,
        })
    }

    /// Every distinct noun, in sorted order.
    pub fn nouns(&self) -> impl Iterator<Item = &str> {
        self.index.keys().map(String::as_str)
    }

    pub fn is_noun(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    pub fn noun_count(&self) -> usize {
        self.index.len()
    }

    pub fn synset_count(&self) -> usize {
        self.synsets.len()
    }

    pub fn synset(&self, id: VertexId) -> Option<&Synset> {
        self.synsets.get(id)
    }

    /// Ids of the synsets containing `noun`.
    pub fn synsets_of(&self, noun: &str) -> Result<&BTreeSet<VertexId>, LexiconError> {
        self.index
            .get(noun)
            .ok_or_else(|| LexiconError::UnknownNoun {
                noun: noun.to_string(),
            })
    }

    pub fn graph(&self) -> &Digraph {
        &self.graph
    }

    /// The synonyms of a synset that is a shortest common ancestor of the two nouns.
    pub fn sca(&self, noun1: &str, noun2: &str) -> Result<&str, LexiconError> {
        let (a, b) = (self.synsets_of(noun1)?, self.synsets_of(noun2)?);
        let ancestor = ShortestCommonAncestor::new(&self.graph)
            .ancestor_subsets(a.iter().copied(), b.iter().copied())?
            .ok_or_else(|| no_common_ancestor(noun1, noun2))?;
        // Every vertex id has a synset: the graph was sized from the synset count.
        Ok(self.synsets[ancestor].synonyms.as_str())
    }

    /// Length of the shortest ancestral path between any synsets of the two nouns.
    pub fn distance(&self, noun1: &str, noun2: &str) -> Result<u32, LexiconError> {
        let (a, b) = (self.synsets_of(noun1)?, self.synsets_of(noun2)?);
        ShortestCommonAncestor::new(&self.graph)
            .length_subsets(a.iter().copied(), b.iter().copied())?
            .ok_or_else(|| no_common_ancestor(noun1, noun2))
    }
}

fn no_common_ancestor(noun1: &str, noun2: &str) -> LexiconError {
    LexiconError::NoCommonAncestor {
        noun1: noun1.to_string(),
        noun2: noun2.to_string(),
    }
}
