use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use synset_core::{Digraph, VertexId};
use tracing::debug;

use crate::error::LexiconError;

/// One synonym set: the nouns sharing a meaning, plus its gloss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Synset {
    pub id: VertexId,
    /// Whitespace-separated synonyms exactly as they appear in the file.
    pub synonyms: String,
    pub gloss: String,
}

impl Synset {
    pub fn nouns(&self) -> impl Iterator<Item = &str> {
        self.synonyms.split_whitespace()
    }
}

/// Knobs for building the hypernym graph.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Drop hypernym entries that repeat the record's own id instead of adding a self-loop.
    pub skip_self_edges: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            skip_self_edges: true,
        }
    }
}

/// Open a file for buffered reading, attaching the path to any error.
pub fn open(path: &Path) -> Result<BufReader<File>, LexiconError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })
}

/// Non-blank lines with their 1-based line numbers.
fn numbered_lines<'a, R: BufRead + 'a>(
    reader: R,
    input: &'a str,
) -> impl Iterator<Item = Result<(usize, String), LexiconError>> + 'a {
    reader
        .lines()
        .enumerate()
        .map(move |(i, line)| {
            line.map(|l| (i + 1, l)).map_err(|source| LexiconError::Io {
                path: input.into(),
                source,
            })
        })
        .filter(|r| !matches!(r, Ok((_, l)) if l.trim().is_empty()))
}

fn parse_id(field: &str, input: &str, line: usize) -> Result<VertexId, LexiconError> {
    let field = field.trim();
    field
        .parse::<VertexId>()
        .map_err(|_| LexiconError::parse(input, line, format!("invalid synset id '{}'", field)))
}

/// Parse `id,synonyms,gloss` records.
///
/// Returns the synsets indexed by id. Ids must be distinct and cover
/// `0..record_count`, since the record count becomes the vertex count.
pub fn read_synsets<R: BufRead>(reader: R, input: &str) -> Result<Vec<Synset>, LexiconError> {
    let mut records: Vec<(usize, Synset)> = Vec::new();

    for entry in numbered_lines(reader, input) {
        let (line_no, line) = entry?;
        let mut fields = line.splitn(3, ',');
        let id = parse_id(fields.next().unwrap_or_default(), input, line_no)?;
        let synonyms = fields
            .next()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| LexiconError::parse(input, line_no, "missing synonyms field"))?;
        let gloss = fields.next().unwrap_or_default().trim();

        records.push((
            line_no,
            Synset {
                id,
                synonyms: synonyms.to_string(),
                gloss: gloss.to_string(),
            },
        ));
    }

    let count = records.len();
    let mut slots: Vec<Option<Synset>> = vec![None; count];
    for (line_no, synset) in records {
        if synset.id >= count {
            return Err(LexiconError::parse(
                input,
                line_no,
                format!("synset id {} out of range for {} records", synset.id, count),
            ));
        }
        let id = synset.id;
        if slots[id].replace(synset).is_some() {
            return Err(LexiconError::parse(
                input,
                line_no,
                format!("duplicate synset id {}", id),
            ));
        }
    }

    // `count` distinct ids below `count` fill every slot.
    Ok(slots.into_iter().flatten().collect())
}

/// Parse `id,hypernym,hypernym,...` records into edges of `graph`.
///
/// Returns the number of edges added.
pub fn read_hypernyms<R: BufRead>(
    reader: R,
    input: &str,
    graph: &mut Digraph,
    options: &LoadOptions,
) -> Result<usize, LexiconError> {
    let mut added = 0usize;

    for entry in numbered_lines(reader, input) {
        let (line_no, line) = entry?;
        let mut fields = line.split(',');
        let source = parse_id(fields.next().unwrap_or_default(), input, line_no)?;

        for field in fields {
            if field.trim().is_empty() {
                continue;
            }
            let target = parse_id(field, input, line_no)?;
            if target == source && options.skip_self_edges {
                continue;
            }
            graph
                .add_edge(source, target)
                .map_err(|e| LexiconError::parse(input, line_no, e.to_string()))?;
            added += 1;
        }
    }

    Ok(added)
}

/// Parse the plain digraph format: vertex count, edge count, then `v w` pairs.
pub fn read_digraph<R: BufRead>(reader: R, input: &str) -> Result<Digraph, LexiconError> {
    let mut tokens: Vec<(usize, String)> = Vec::new();
    for entry in numbered_lines(reader, input) {
        let (line_no, line) = entry?;
        tokens.extend(line.split_whitespace().map(|t| (line_no, t.to_string())));
    }

    let last_line = tokens.last().map(|(l, _)| *l).unwrap_or(1);
    let mut tokens = tokens.into_iter();
    let mut next_number = |what: &str| -> Result<(usize, usize), LexiconError> {
        let (line_no, token) = tokens
            .next()
            .ok_or_else(|| LexiconError::parse(input, last_line, format!("missing {}", what)))?;
        let value = token.parse::<usize>().map_err(|_| {
            LexiconError::parse(input, line_no, format!("invalid {} '{}'", what, token))
        })?;
        Ok((line_no, value))
    };

    let (header_line, vertex_count) = next_number("vertex count")?;
    let (_, edge_count) = next_number("edge count")?;
    // Counts are untrusted: no edge pre-sizing, and the vertex array may fail to allocate.
    let mut graph = Digraph::try_new(vertex_count).map_err(|e| {
        LexiconError::parse(
            input,
            header_line,
            format!("vertex count {} too large: {}", vertex_count, e),
        )
    })?;
    for _ in 0..edge_count {
        let (line_no, v) = next_number("edge source")?;
        let (_, w) = next_number("edge target")?;
        graph
            .add_edge(v, w)
            .map_err(|e| LexiconError::parse(input, line_no, e.to_string()))?;
    }

    if let Some((line_no, token)) = tokens.next() {
        return Err(LexiconError::parse(
            input,
            line_no,
            format!("unexpected token '{}' after {} edges", token, edge_count),
        ));
    }

    debug!(input, vertices = vertex_count, edges = edge_count, "digraph loaded");
    Ok(graph)
}

/// Read a digraph file from disk.
pub fn load_digraph(path: &Path) -> Result<Digraph, LexiconError> {
    read_digraph(open(path)?, &path.display().to_string())
}
