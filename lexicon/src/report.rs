use serde::Serialize;
use synset_core::{AncestralPath, VertexId};

use crate::config::OutputFormat;
use crate::error::LexiconError;
use crate::outcast::OutcastReport;
use crate::wordnet::WordNet;

/// One vertex-pair query answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairReport {
    pub v: VertexId,
    pub w: VertexId,
    pub length: Option<u32>,
    pub ancestor: Option<VertexId>,
}

impl PairReport {
    pub fn new(v: VertexId, w: VertexId, path: Option<AncestralPath>) -> Self {
        Self {
            v,
            w,
            length: path.map(|p| p.length),
            ancestor: path.map(|p| p.ancestor),
        }
    }
}

/// Noun-level summary for two words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupReport {
    pub noun_count: usize,
    pub word1: String,
    pub word2: String,
    pub is_noun1: bool,
    pub is_noun2: bool,
    /// Whether `"word1 word2"` is itself a noun.
    pub is_noun_joined: bool,
    pub sca: String,
    pub distance: u32,
}

impl LookupReport {
    pub fn build(wordnet: &WordNet, word1: &str, word2: &str) -> Result<Self, LexiconError> {
        Ok(Self {
            noun_count: wordnet.noun_count(),
            word1: word1.to_string(),
            word2: word2.to_string(),
            is_noun1: wordnet.is_noun(word1),
            is_noun2: wordnet.is_noun(word2),
            is_noun_joined: wordnet.is_noun(&format!("{} {}", word1, word2)),
            sca: wordnet.sca(word1, word2)?.to_string(),
            distance: wordnet.distance(word1, word2)?,
        })
    }
}

fn or_none<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "none".to_string(), |v| v.to_string())
}

fn to_json<T: Serialize>(value: &T) -> Result<String, LexiconError> {
    Ok(serde_json::to_string(value)?)
}

pub fn render_pair(report: &PairReport, format: OutputFormat) -> Result<String, LexiconError> {
    match format {
        OutputFormat::Text => Ok(format!(
            "length = {}, ancestor = {}",
            or_none(report.length),
            or_none(report.ancestor)
        )),
        OutputFormat::Json => to_json(report),
    }
}

pub fn render_lookup(report: &LookupReport, format: OutputFormat) -> Result<String, LexiconError> {
    match format {
        OutputFormat::Text => {
            let (w1, w2) = (&report.word1, &report.word2);
            Ok([
                format!("# of nouns = {}", report.noun_count),
                format!("isNoun({}) = {}", w1, report.is_noun1),
                format!("isNoun({}) = {}", w2, report.is_noun2),
                format!("isNoun({} {}) = {}", w1, w2, report.is_noun_joined),
                format!("sca({}, {}) = {}", w1, w2, report.sca),
                format!("distance({}, {}) = {}", w1, w2, report.distance),
            ]
            .join("\n"))
        }
        OutputFormat::Json => to_json(report),
    }
}

/// Text form marks the outcast as `*noun*` in input order.
pub fn render_outcast(report: &OutcastReport, format: OutputFormat) -> Result<String, LexiconError> {
    match format {
        OutputFormat::Text => Ok(report
            .totals
            .iter()
            .map(|(noun, _)| {
                if report.outcast.as_deref() == Some(noun.as_str()) {
                    format!("*{}*", noun)
                } else {
                    noun.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")),
        OutputFormat::Json => to_json(report),
    }
}
