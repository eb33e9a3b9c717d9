//! Error types for synset-lexicon.

use std::path::PathBuf;

use synset_core::ScaError;
use thiserror::Error;

/// Errors produced while loading a lexicon or answering noun queries.
#[derive(Debug, Error)]
pub enum LexiconError {
    /// A file could not be opened or read.
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record in a synsets, hypernyms or digraph file is malformed.
    /// `line` is 1-based.
    #[error("{input}:{line}: {reason}")]
    Parse {
        input: String,
        line: usize,
        reason: String,
    },

    /// A required setting was given neither as an argument nor through the environment.
    #[error("{setting} not set: pass --{setting} or set {env}")]
    MissingSetting {
        setting: &'static str,
        env: &'static str,
    },

    /// The word is not in the noun index.
    #[error("'{noun}' is not a WordNet noun")]
    UnknownNoun { noun: String },

    /// The two nouns' synsets share no hypernym (the hypernym graph is not single-rooted).
    #[error("'{noun1}' and '{noun2}' have no common ancestor")]
    NoCommonAncestor { noun1: String, noun2: String },

    #[error(transparent)]
    Graph(#[from] ScaError),

    /// A report could not be rendered as JSON.
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl LexiconError {
    pub(crate) fn parse(input: &str, line: usize, reason: impl Into<String>) -> Self {
        Self::Parse {
            input: input.to_string(),
            line,
            reason: reason.into(),
        }
    }

    /// Process exit code for the CLI: 1 for query and argument errors, 3 for input errors.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io { .. } | Self::Parse { .. } => 3,
            Self::MissingSetting { .. }
            | Self::UnknownNoun { .. }
            | Self::NoCommonAncestor { .. }
            | Self::Graph(_)
            | Self::Serialize(_) => 1,
        }
    }
}
