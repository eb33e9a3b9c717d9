use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::error::LexiconError;
use crate::load::LoadOptions;

pub const SYNSETS_ENV: &str = "WORDNET_SYNSETS";
pub const HYPERNYMS_ENV: &str = "WORDNET_HYPERNYMS";

/// How query results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Lexicon source files. Explicit flags win over the environment.
#[derive(Debug, Clone, Default, Args)]
pub struct LexiconArgs {
    /// Synsets file (`id,synonyms,gloss` per line).
    #[arg(long, env = SYNSETS_ENV, global = true)]
    pub synsets: Option<PathBuf>,

    /// Hypernyms file (`id,hypernym,...` per line).
    #[arg(long, env = HYPERNYMS_ENV, global = true)]
    pub hypernyms: Option<PathBuf>,

    /// Keep hypernym entries that point a synset at itself.
    #[arg(long, global = true)]
    pub keep_self_edges: bool,
}

/// Fully resolved lexicon settings.
#[derive(Debug, Clone)]
pub struct LexiconSettings {
    pub synsets: PathBuf,
    pub hypernyms: PathBuf,
    pub options: LoadOptions,
}

impl LexiconArgs {
    /// Require both file paths, failing with the setting that is missing.
    pub fn resolve(&self) -> Result<LexiconSettings, LexiconError> {
        let synsets = self.synsets.clone().ok_or(LexiconError::MissingSetting {
            setting: "synsets",
            env: SYNSETS_ENV,
        })?;
        let hypernyms = self.hypernyms.clone().ok_or(LexiconError::MissingSetting {
            setting: "hypernyms",
            env: HYPERNYMS_ENV,
        })?;

        Ok(LexiconSettings {
            synsets,
            hypernyms,
            options: LoadOptions {
                skip_self_edges: !self.keep_self_edges,
            },
        })
    }
}
