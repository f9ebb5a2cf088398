use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A document-to-document query named a document that is not in the corpus.
    #[error("document not found in corpus: {0}")]
    UnknownDocument(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
