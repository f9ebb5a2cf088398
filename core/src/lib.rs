use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

pub mod corpus;
pub mod engine;
pub mod error;
pub mod similarity;
pub mod stats;
pub mod tokenizer;

pub use engine::SearchEngine;
pub use error::{EngineError, Result};
pub use stats::CorpusStats;

/// Document id -> raw word tokens, in document order.
pub type Corpus = HashMap<String, Vec<String>>;
/// Lower-cased word -> occurrences within one document. Ordered so sums over
/// shared words always add in the same sequence.
pub type TermCounts = BTreeMap<String, u32>;
/// Lower-cased word -> ln(num_docs / document frequency).
pub type IdfTable = HashMap<String, f64>;

/// One ranked result. `value` is a distance for similarity rankings and a
/// tf-idf score for free-text search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hit {
    pub id: String,
    pub value: f64,
}

impl Hit {
    pub fn new(id: impl Into<String>, value: f64) -> Self { Self { id: id.into(), value } }
}
