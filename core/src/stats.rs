use crate::tokenizer::fold;
use crate::{Corpus, IdfTable, TermCounts};
use std::collections::HashMap;

/// Per-document term counts and corpus-wide idf weights, derived once from a
/// corpus and read-only afterwards.
#[derive(Debug, Default, Clone)]
pub struct CorpusStats {
    term_counts: HashMap<String, TermCounts>,
    idf: IdfTable,
    num_docs: usize,
}

impl CorpusStats {
    pub fn build(corpus: &Corpus) -> Self {
        let mut term_counts: HashMap<String, TermCounts> = HashMap::with_capacity(corpus.len());
        // documents containing each word at least once
        let mut df: HashMap<String, u32> = HashMap::new();

        for (doc, tokens) in corpus {
            let mut counts = TermCounts::new();
            for token in tokens {
                let word = fold(token);
                match counts.get_mut(&word) {
                    Some(c) => *c += 1,
                    None => {
                        *df.entry(word.clone()).or_insert(0) += 1;
                        counts.insert(word, 1);
                    }
                }
            }
            term_counts.insert(doc.clone(), counts);
        }

        // df is empty for an empty corpus, so n is never divided by zero
        let num_docs = corpus.len();
        let n = num_docs as f64;
        let idf: IdfTable = df
            .into_iter()
            .map(|(word, df_w)| (word, (n / df_w as f64).ln()))
            .collect();

        tracing::info!(num_docs, vocabulary = idf.len(), "built corpus statistics");
        Self { term_counts, idf, num_docs }
    }

    pub fn term_counts(&self, doc: &str) -> Option<&TermCounts> { self.term_counts.get(doc) }

    /// Idf of a word; words absent from the corpus weigh zero.
    pub fn idf(&self, word: &str) -> f64 { self.idf.get(&fold(word)).copied().unwrap_or(0.0) }

    pub fn idf_table(&self) -> &IdfTable { &self.idf }

    pub fn num_docs(&self) -> usize { self.num_docs }

    pub fn vocabulary_size(&self) -> usize { self.idf.len() }
}
