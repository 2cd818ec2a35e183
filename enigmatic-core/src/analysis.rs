//! Text statistics: character frequency, Shannon entropy, and trigrams.
//!
//! Everything here is a pure function of the input text; analyzing the same
//! sample twice yields identical results.

use crate::error::AnalysisError;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// How many of the most common trigrams a report keeps.
const TOP_NGRAMS: usize = 10;

/// Trigrams span three characters.
const NGRAM_LEN: usize = 3;

/// A statistics report over one text sample.
///
/// Character frequencies are percentages of the total length, while trigram
/// frequencies are fractions of the total trigram count. The unit mismatch
/// is inherited from the original key-sheet tooling and kept for
/// compatibility with its consumers.
#[derive(Debug, Clone, Serialize)]
pub struct TextAnalysis {
    /// Character count of the raw input.
    pub length: usize,
    /// Number of distinct characters in the raw input, case-sensitive.
    pub unique_chars: usize,
    /// Percentage of the text each (uppercased) character accounts for.
    pub char_frequency: HashMap<char, f64>,
    /// Shannon entropy of the uppercased text, in bits per character.
    pub entropy: f64,
    /// The ten most common trigrams of the uppercased text, most common
    /// first, each with its fraction of all trigram occurrences. Ties keep
    /// the order in which the trigrams were first encountered.
    pub ngrams: Vec<(String, f64)>,
}

/// Analyzes a text sample.
///
/// # Errors
///
/// Returns [`AnalysisError::EmptyText`] for a zero-length input, for which
/// frequency percentages would be undefined.
pub fn analyze(text: &str) -> Result<TextAnalysis, AnalysisError> {
    let length = text.chars().count();
    if length == 0 {
        return Err(AnalysisError::EmptyText);
    }
    let unique_chars = text.chars().collect::<HashSet<char>>().len();

    let folded = text.to_uppercase();
    let mut counts: HashMap<char, usize> = HashMap::new();
    for ch in folded.chars() {
        *counts.entry(ch).or_insert(0) += 1;
    }

    let total = length as f64;
    let char_frequency = counts
        .iter()
        .map(|(&ch, &count)| (ch, count as f64 / total * 100.0))
        .collect();
    let entropy = counts
        .values()
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum();

    Ok(TextAnalysis {
        length,
        unique_chars,
        char_frequency,
        entropy,
        ngrams: top_ngrams(&folded),
    })
}

/// Counts the sliding trigram window and keeps the most common entries.
fn top_ngrams(folded: &str) -> Vec<(String, f64)> {
    let chars: Vec<char> = folded.chars().collect();
    if chars.len() < NGRAM_LEN {
        return Vec::new();
    }

    let mut counts: HashMap<String, usize> = HashMap::new();
    // First-encountered order doubles as the tie-breaker below.
    let mut seen: Vec<String> = Vec::new();
    for window in chars.windows(NGRAM_LEN) {
        let gram: String = window.iter().collect();
        if !counts.contains_key(&gram) {
            seen.push(gram.clone());
        }
        *counts.entry(gram).or_insert(0) += 1;
    }

    let total = (chars.len() - NGRAM_LEN + 1) as f64;
    // Stable sort: equal counts stay in first-encountered order.
    seen.sort_by_key(|gram| std::cmp::Reverse(counts[gram]));
    seen.into_iter()
        .take(TOP_NGRAMS)
        .map(|gram| {
            let fraction = counts[&gram] as f64 / total;
            (gram, fraction)
        })
        .collect()
}
