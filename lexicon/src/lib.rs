//! synset-lexicon: WordNet noun lexicon on top of synset-core.
//!
//! Parses synset and hypernym records into a hypernym digraph, indexes
//! nouns to their synsets, and answers noun-level relatedness queries
//! (`sca`, `distance`, outcast detection). Also hosts the `wordnet`
//! command-line front end's configuration and output rendering.

pub mod config;
mod error;
pub mod load;
mod outcast;
pub mod report;
mod wordnet;

pub use error::LexiconError;
pub use load::{LoadOptions, Synset};
pub use outcast::{outcast, outcast_report, OutcastReport};
pub use wordnet::WordNet;
