//! Okapi BM25 scoring of catalog descriptions against free-text queries.
//!
//! Scores are raw BM25 weights in input document order; no normalization is
//! applied. The scorer is only used as a reranker feature, so relative
//! magnitudes matter, absolute ones do not.

#[cfg(test)]
mod tests;

/// Term-frequency saturation parameter.
pub const BM25_K1: f64 = 1.5;

/// Document-length normalization parameter.
pub const BM25_B: f64 = 0.75;

/// Negative IDF values are floored at `BM25_EPSILON` times the mean IDF, so
/// terms appearing in most documents still contribute a small positive
/// weight instead of a negative one.
pub const BM25_EPSILON: f64 = 0.25;

/// Characters that get a separating space inserted before them.
const SPLIT_BEFORE: [char; 9] = ['-', ',', '.', ':', ';', '/', ')', '*', '?'];

/// Characters that get a separating space inserted after them.
const SPLIT_AFTER: [char; 4] = ['-', '.', '(', '/'];

/// Tokenizes catalog text and queries.
///
/// Lowercases, strips newlines, splits punctuation off adjoining words and
/// finally splits on whitespace. `"foo,bar"` becomes `["foo", ",bar"]`
/// rather than a single token.
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .chars()
        .filter(|&c| c != '\n' && c != '\r')
        .collect::<String>()
        .trim()
        .to_lowercase();

    let mut spaced = String::with_capacity(cleaned.len() + cleaned.len() / 4);
    for ch in cleaned.chars() {
        if SPLIT_BEFORE.contains(&ch) {
            spaced.push(' ');
        }
        spaced.push(ch);
        if SPLIT_AFTER.contains(&ch) {
            spaced.push(' ');
        }
    }

    spaced.split_whitespace().map(str::to_owned).collect()
}

/// Computes one raw BM25 score per document, in input order.
///
/// Guard policy: an empty corpus, or a corpus containing any document with
/// no tokens, yields an all-zero score vector instead of invoking BM25.
/// BM25 over partially empty corpora is treated as ill-defined here.
pub fn bm25_scores(documents: &[Vec<String>], query: &[String]) -> Vec<f32> {
    if documents.is_empty() || documents.iter().any(|doc| doc.is_empty()) {
        return vec![0.0; documents.len()];
    }

    let scorer = Bm25::fit(documents);
    documents
        .iter()
        .map(|doc| scorer.score(query, doc) as f32)
        .collect()
}

/// Okapi BM25 statistics fitted over one corpus.
struct Bm25 {
    idf: std::collections::HashMap<String, f64>,
    avg_doc_len: f64,
}

impl Bm25 {
    fn fit(documents: &[Vec<String>]) -> Self {
        use std::collections::{HashMap, HashSet};

        let corpus_size = documents.len() as f64;
        let total_len: usize = documents.iter().map(Vec::len).sum();
        let avg_doc_len = total_len as f64 / corpus_size;

        // Document frequency per term.
        let mut doc_freq: HashMap<&str, usize> = HashMap::new();
        for doc in documents {
            let unique: HashSet<&str> = doc.iter().map(String::as_str).collect();
            for term in unique {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        let mut idf: HashMap<String, f64> = HashMap::with_capacity(doc_freq.len());
        let mut idf_sum = 0.0;
        let mut negative_terms: Vec<String> = Vec::new();
        for (term, freq) in doc_freq {
            let freq = freq as f64;
            let value = ((corpus_size - freq + 0.5) / (freq + 0.5)).ln();
            idf_sum += value;
            if value < 0.0 {
                negative_terms.push(term.to_owned());
            }
            idf.insert(term.to_owned(), value);
        }

        let floor = BM25_EPSILON * idf_sum / idf.len() as f64;
        for term in negative_terms {
            idf.insert(term, floor);
        }

        Self { idf, avg_doc_len }
    }

    fn score(&self, query: &[String], document: &[String]) -> f64 {
        use std::collections::HashMap;

        let mut term_freq: HashMap<&str, f64> = HashMap::new();
        for term in document {
            *term_freq.entry(term.as_str()).or_insert(0.0) += 1.0;
        }

        let len_norm = 1.0 - BM25_B + BM25_B * document.len() as f64 / self.avg_doc_len;

        query
            .iter()
            .filter_map(|term| {
                let idf = self.idf.get(term.as_str())?;
                let freq = term_freq.get(term.as_str()).copied().unwrap_or(0.0);
                Some(idf * freq * (BM25_K1 + 1.0) / (freq + BM25_K1 * len_norm))
            })
            .sum()
    }
}
