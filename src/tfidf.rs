//! TF-IDF term weighting and vector construction.
//!
//! Term frequency is normalized per document (count / document length) and
//! inverse document frequency is smoothed as `log10(N / (1 + df))`, where N
//! is the corpus size and df the number of documents containing the term.
//! IDF is computed once per corpus and reused for every document's vector.
//! Note `1 + df` can exceed N, so IDF weights may be negative; they are not
//! clamped.

use ahash::AHashMap;

use crate::error::{DocsimError, Result};
use crate::vocabulary::Vocabulary;

/// Compute the normalized term frequency map for one document.
///
/// Each distinct token maps to `count / doc.len()`, so the values over the
/// document's distinct tokens sum to 1. Tokens absent from the document are
/// absent from the map; readers must treat missing entries as 0.
///
/// An empty document yields an empty map rather than a division fault.
pub fn compute_tf(doc: &[String]) -> AHashMap<String, f64> {
    let mut tf: AHashMap<String, f64> = AHashMap::new();
    if doc.is_empty() {
        return tf;
    }

    for token in doc {
        *tf.entry(token.clone()).or_insert(0.0) += 1.0;
    }

    let doc_len = doc.len() as f64;
    for count in tf.values_mut() {
        *count /= doc_len;
    }

    tf
}

/// Compute the inverse document frequency map for the whole corpus.
///
/// For every vocabulary term, df is the number of documents containing the
/// term at least once (a presence test, not an occurrence count), and the
/// weight is `log10(N / (1 + df))` with N = `docs.len()`. The returned map
/// is defined for every vocabulary term, including terms present in every
/// document.
pub fn compute_idf(docs: &[Vec<String>], vocab: &Vocabulary) -> AHashMap<String, f64> {
    let n = docs.len() as f64;
    let mut idf = AHashMap::with_capacity(vocab.len());

    for term in vocab.iter() {
        let df = docs
            .iter()
            .filter(|doc| doc.iter().any(|token| token == term))
            .count() as f64;
        idf.insert(term.clone(), (n / (1.0 + df)).log10());
    }

    idf
}

/// Build the dense TF-IDF vector for one document.
///
/// The vector has one entry per vocabulary term, in the vocabulary's
/// canonical order; each entry is `TF(term) * IDF(term)`, with TF defaulting
/// to 0 for terms the document does not contain.
///
/// IDF must cover every vocabulary term. A missing term means the IDF map
/// was computed against a different vocabulary, which is a wiring bug, and
/// surfaces as a [`DocsimError::Vector`].
pub fn build_vector(
    doc: &[String],
    vocab: &Vocabulary,
    idf: &AHashMap<String, f64>,
) -> Result<Vec<f64>> {
    let tf = compute_tf(doc);
    let mut vector = Vec::with_capacity(vocab.len());

    for term in vocab.iter() {
        let idf_weight = idf.get(term).copied().ok_or_else(|| {
            DocsimError::vector(format!("IDF weight missing for vocabulary term '{term}'"))
        })?;
        let tf_weight = tf.get(term).copied().unwrap_or(0.0);
        vector.push(tf_weight * idf_weight);
    }

    Ok(vector)
}

/// TF-IDF vectorizer over a fixed corpus.
///
/// Wraps the free functions into a fit/transform interface: [`fit`]
/// tokenized documents once to build the vocabulary and IDF weights, then
/// [`transform`] any of those documents (or new token sequences) into dense
/// vectors in the shared dimension order.
///
/// [`fit`]: TfIdfVectorizer::fit
/// [`transform`]: TfIdfVectorizer::transform
#[derive(Clone, Debug, Default)]
pub struct TfIdfVectorizer {
    vocabulary: Vocabulary,
    idf: AHashMap<String, f64>,
    n_documents: usize,
}

impl TfIdfVectorizer {
    /// Fit the vectorizer on the tokenized corpus.
    pub fn fit(docs: &[Vec<String>]) -> Self {
        let vocabulary = Vocabulary::build(docs);
        let idf = compute_idf(docs, &vocabulary);
        TfIdfVectorizer {
            vocabulary,
            idf,
            n_documents: docs.len(),
        }
    }

    /// Transform a tokenized document into a dense TF-IDF vector.
    pub fn transform(&self, doc: &[String]) -> Result<Vec<f64>> {
        build_vector(doc, &self.vocabulary, &self.idf)
    }

    /// The corpus vocabulary.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// The corpus IDF weights.
    pub fn idf(&self) -> &AHashMap<String, f64> {
        &self.idf
    }

    /// Number of documents the vectorizer was fitted on.
    pub fn n_documents(&self) -> usize {
        self.n_documents
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs(texts: &[&str]) -> Vec<Vec<String>> {
        texts
            .iter()
            .map(|t| t.split_whitespace().map(String::from).collect())
            .collect()
    }

    #[test]
    fn test_tf_normalization_sums_to_one() {
        let doc: Vec<String> = ["cat", "sat", "cat", "mat"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let tf = compute_tf(&doc);

        assert_eq!(tf.len(), 3);
        assert_eq!(tf["cat"], 0.5);
        assert_eq!(tf["sat"], 0.25);
        assert_eq!(tf["mat"], 0.25);

        let sum: f64 = tf.values().sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_tf_empty_document() {
        let tf = compute_tf(&[]);
        assert!(tf.is_empty());
    }

    #[test]
    fn test_idf_formula() {
        let docs = docs(&["cat sat mat", "cat sat hat", "dog ran far"]);
        let vocab = Vocabulary::build(&docs);
        let idf = compute_idf(&docs, &vocab);

        let n = 3.0_f64;
        // df(cat) = 2, df(dog) = 1
        assert_eq!(idf["cat"], (n / 3.0).log10());
        assert_eq!(idf["dog"], (n / 2.0).log10());
        // Defined for every vocabulary term
        for term in vocab.iter() {
            assert!(idf.contains_key(term));
        }
    }

    #[test]
    fn test_idf_can_be_negative() {
        // "a" appears in both documents: df = N = 2, so N / (1 + df) < 1.
        let docs = docs(&["a b", "a c"]);
        let vocab = Vocabulary::build(&docs);
        let idf = compute_idf(&docs, &vocab);

        assert!(idf["a"] < 0.0);
        assert_eq!(idf["a"], (2.0_f64 / 3.0).log10());
    }

    #[test]
    fn test_vector_length_equals_vocabulary_size() {
        let docs = docs(&["cat sat mat", "cat sat hat", "dog ran far"]);
        let vectorizer = TfIdfVectorizer::fit(&docs);

        for doc in &docs {
            let vector = vectorizer.transform(doc).unwrap();
            assert_eq!(vector.len(), vectorizer.vocabulary().len());
        }

        // Even a document sharing no terms with the corpus
        let unseen: Vec<String> = vec!["zebra".to_string()];
        let vector = vectorizer.transform(&unseen).unwrap();
        assert_eq!(vector.len(), vectorizer.vocabulary().len());
        assert!(vector.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_vector_entries_follow_canonical_order() {
        let docs = docs(&["b a", "c"]);
        let vectorizer = TfIdfVectorizer::fit(&docs);
        let vector = vectorizer.transform(&docs[0]).unwrap();

        let vocab = vectorizer.vocabulary();
        let idf = vectorizer.idf();
        // terms are [a, b, c]; doc 0 has a and b at TF 0.5 each, no c.
        assert_eq!(vocab.terms(), &["a", "b", "c"]);
        assert_eq!(vector[0], 0.5 * idf["a"]);
        assert_eq!(vector[1], 0.5 * idf["b"]);
        assert_eq!(vector[2], 0.0);
    }

    #[test]
    fn test_missing_idf_term_is_an_error() {
        let docs = docs(&["a b"]);
        let vocab = Vocabulary::build(&docs);
        let mut idf = compute_idf(&docs, &vocab);
        idf.remove("b");

        let result = build_vector(&docs[0], &vocab, &idf);
        assert!(result.is_err());
    }
}
