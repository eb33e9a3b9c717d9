use serde::Serialize;
use tracing::debug;

use crate::error::LexiconError;
use crate::wordnet::WordNet;

/// Summed distances for a group of nouns, and the one least related to the rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutcastReport {
    /// `None` when no noun is farther than zero from the others.
    pub outcast: Option<String>,
    /// Each noun with the sum of its distances to every noun in the group.
    pub totals: Vec<(String, u32)>,
}

/// The noun whose summed distance to all the others is greatest.
pub fn outcast(wordnet: &WordNet, nouns: &[&str]) -> Result<Option<String>, LexiconError> {
    Ok(outcast_report(wordnet, nouns)?.outcast)
}

/// Score every noun by `sum(distance(noun, other))` over the whole group.
///
/// The first noun with the strictly greatest total wins. Distances are
/// symmetric, so each unordered pair is computed once.
pub fn outcast_report(wordnet: &WordNet, nouns: &[&str]) -> Result<OutcastReport, LexiconError> {
    for noun in nouns {
        wordnet.synsets_of(noun)?;
    }

    let mut totals = vec![0u32; nouns.len()];
    for i in 0..nouns.len() {
        for j in (i + 1)..nouns.len() {
            let d = wordnet.distance(nouns[i], nouns[j])?;
            totals[i] += d;
            totals[j] += d;
        }
    }

    let mut best: Option<(usize, u32)> = None;
    for (i, &total) in totals.iter().enumerate() {
        if total > best.map_or(0, |(_, t)| t) {
            best = Some((i, total));
        }
    }

    let outcast = best.map(|(i, _)| nouns[i].to_string());
    debug!(nouns = nouns.len(), outcast = outcast.as_deref(), "outcast");

    Ok(OutcastReport {
        outcast,
        totals: nouns
            .iter()
            .zip(totals)
            .map(|(n, t)| (n.to_string(), t))
            .collect(),
    })
}
