use crate::error::{EngineError, Result};
use crate::similarity::{accumulate, angular_distance, inner_product, Weighting};
use crate::stats::CorpusStats;
use crate::tokenizer::query_terms;
use crate::{Corpus, Hit, IdfTable, TermCounts};
use std::cmp::Ordering;

/// In-memory ranking over a fixed corpus. Statistics are built once in
/// [`SearchEngine::new`]; every query only reads them, so a built engine can
/// be shared across threads.
pub struct SearchEngine<'a> {
    corpus: &'a Corpus,
    stats: CorpusStats,
}

impl<'a> SearchEngine<'a> {
    pub fn new(corpus: &'a Corpus) -> Self {
        Self { corpus, stats: CorpusStats::build(corpus) }
    }

    pub fn stats(&self) -> &CorpusStats { &self.stats }

    /// Inner product of two documents' term vectors.
    pub fn score(&self, a: &str, b: &str, use_idf: bool) -> Result<f64> {
        Ok(inner_product(self.counts(a)?, self.counts(b)?, self.idf_for(use_idf)))
    }

    /// Angular distance between two documents; `f64::INFINITY` when either
    /// has a zero-norm vector.
    pub fn distance(&self, a: &str, b: &str, use_idf: bool) -> Result<f64> {
        Ok(angular_distance(self.counts(a)?, self.counts(b)?, self.idf_for(use_idf)))
    }

    /// The `k` documents closest to `title`, nearest first. Equal distances
    /// are ordered by case-insensitive id. `title` itself is never returned.
    ///
    /// Fails with [`EngineError::UnknownDocument`] if `title` is not in the corpus.
    pub fn rank_by_similarity(&self, title: &str, k: usize, use_idf: bool) -> Result<Vec<Hit>> {
        let target = self.counts(title)?;
        let idf = self.idf_for(use_idf);

        let mut hits: Vec<Hit> = self
            .corpus
            .keys()
            .filter(|id| id.as_str() != title)
            .filter_map(|id| {
                let counts = self.stats.term_counts(id)?;
                Some(Hit::new(id.as_str(), angular_distance(target, counts, idf)))
            })
            .collect();

        hits.sort_by(|a, b| a.value.total_cmp(&b.value).then_with(|| by_id(a, b)));
        hits.truncate(k);
        tracing::debug!(title, k, use_idf, hits = hits.len(), "ranked by similarity");
        Ok(hits)
    }

    /// Plain document-distance ranking.
    pub fn relevant_by_doc_dist(&self, title: &str, k: usize) -> Result<Vec<Hit>> {
        self.rank_by_similarity(title, k, false)
    }

    /// Idf-weighted document-distance ranking.
    pub fn relevant_by_tf_idf(&self, title: &str, k: usize) -> Result<Vec<Hit>> {
        self.rank_by_similarity(title, k, true)
    }

    /// Top `k` documents by tf-idf score against a free-text query, best
    /// first. Only strictly positive scores are returned; ties are ordered by
    /// case-insensitive id.
    pub fn search(&self, query: &str, k: usize) -> Vec<Hit> {
        let terms = query_terms(query);
        let weighting = Weighting::Idf(self.stats.idf_table());

        let mut hits: Vec<Hit> = self
            .corpus
            .keys()
            .filter_map(|id| {
                let score = accumulate(&terms, self.stats.term_counts(id)?, weighting);
                (score > 0.0).then(|| Hit::new(id.as_str(), score))
            })
            .collect();

        hits.sort_by(|a, b| b.value.total_cmp(&a.value).then_with(|| by_id(a, b)));
        hits.truncate(k);
        tracing::debug!(query, k, terms = terms.len(), hits = hits.len(), "searched");
        hits
    }

    fn counts(&self, doc: &str) -> Result<&TermCounts> {
        self.stats
            .term_counts(doc)
            .ok_or_else(|| EngineError::UnknownDocument(doc.to_string()))
    }

    fn idf_for(&self, use_idf: bool) -> Option<&IdfTable> {
        use_idf.then(|| self.stats.idf_table())
    }
}

// Case-insensitive id order, falling back to the exact id so ids differing
// only in case still sort deterministically.
fn by_id(a: &Hit, b: &Hit) -> Ordering {
    a.id.to_lowercase()
        .cmp(&b.id.to_lowercase())
        .then_with(|| a.id.cmp(&b.id))
}
