use crate::tokenizer::split_words;
use crate::Corpus;
use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Read every regular file directly inside `dir` into a corpus keyed by file
/// name. Subdirectories are not descended into.
pub fn load_dir<P: AsRef<Path>>(dir: P) -> Result<Corpus> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        bail!("corpus directory not found: {}", dir.display());
    }

    let mut corpus = Corpus::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                tracing::warn!(%err, "skipping unreadable corpus entry");
                continue;
            }
        };
        if !entry.file_type().is_file() { continue; }

        let path = entry.path();
        let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        let id = entry.file_name().to_string_lossy().into_owned();
        corpus.insert(id, split_words(&String::from_utf8_lossy(&bytes)));
    }

    tracing::info!(dir = %dir.display(), num_docs = corpus.len(), "loaded corpus");
    Ok(corpus)
}

/// Build a corpus from in-memory (id, text) pairs. A repeated id keeps the last text.
pub fn from_texts<I, S, T>(docs: I) -> Corpus
where
    I: IntoIterator<Item = (S, T)>,
    S: Into<String>,
    T: AsRef<str>,
{
    docs.into_iter()
        .map(|(id, text)| (id.into(), split_words(text.as_ref())))
        .collect()
}
