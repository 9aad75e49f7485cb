//! Corpus vocabulary with a fixed canonical term ordering.
//!
//! The vocabulary is the deduplicated set of all tokens seen across the
//! document corpus. Its lexicographic term order is the permanent dimension
//! order for every TF-IDF vector, so it must be identical everywhere a
//! vocabulary is consulted. Relying on incidental hash-map iteration order
//! would silently break vector alignment across documents; the terms are
//! sorted explicitly once and never reordered.

use ahash::AHashMap;

/// The deduplicated, lexicographically ordered set of corpus terms.
///
/// Built once after all documents are tokenized; immutable afterward.
/// Shared by reference across IDF computation and vector construction.
#[derive(Clone, Debug, Default)]
pub struct Vocabulary {
    /// Terms in lexicographic order. Index = vector dimension.
    terms: Vec<String>,
    /// Term -> dimension lookup.
    index: AHashMap<String, usize>,
}

impl Vocabulary {
    /// Build the vocabulary from all documents' token sequences.
    pub fn build(docs: &[Vec<String>]) -> Self {
        // BTreeSet both deduplicates and yields terms in lexicographic order.
        let terms: Vec<String> = docs
            .iter()
            .flatten()
            .cloned()
            .collect::<std::collections::BTreeSet<String>>()
            .into_iter()
            .collect();

        let index = terms
            .iter()
            .enumerate()
            .map(|(i, term)| (term.clone(), i))
            .collect();

        Vocabulary { terms, index }
    }

    /// Number of distinct terms (the vector dimension).
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Check whether the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Terms in canonical (lexicographic) order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Dimension index of a term, if present.
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    /// Check whether a term is in the vocabulary.
    pub fn contains(&self, term: &str) -> bool {
        self.index.contains_key(term)
    }

    /// Iterate terms in canonical order.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.terms.iter()
    }
}
