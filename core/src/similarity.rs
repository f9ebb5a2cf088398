//! Sparse term-vector arithmetic shared by document ranking and query scoring.

use crate::{IdfTable, TermCounts};

/// Per-word factor applied while accumulating over shared words.
#[derive(Debug, Clone, Copy)]
pub enum Weighting<'a> {
    /// Raw counts.
    Plain,
    /// idf. Used when one side is a query whose words each count once.
    Idf(&'a IdfTable),
    /// idf squared: both documents' vectors are scaled by idf independently.
    IdfSquared(&'a IdfTable),
}

impl Weighting<'_> {
    pub fn factor(&self, word: &str) -> f64 {
        match self {
            Weighting::Plain => 1.0,
            Weighting::Idf(idf) => idf.get(word).copied().unwrap_or(0.0),
            Weighting::IdfSquared(idf) => {
                let w = idf.get(word).copied().unwrap_or(0.0);
                w * w
            }
        }
    }
}

/// Sum over words present in both tables of `a[w] * b[w] * factor(w)`.
///
/// Shared words are visited in sorted order whichever table is walked, so
/// equal inputs give bit-identical sums and ties stay ties.
pub fn accumulate(a: &TermCounts, b: &TermCounts, weighting: Weighting<'_>) -> f64 {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    small
        .iter()
        .filter_map(|(word, &x)| {
            large
                .get(word)
                .map(|&y| f64::from(x) * f64::from(y) * weighting.factor(word))
        })
        .sum()
}

/// Inner product of two documents' (optionally idf-weighted) term vectors.
pub fn inner_product(a: &TermCounts, b: &TermCounts, use_idf: Option<&IdfTable>) -> f64 {
    accumulate(a, b, doc_weighting(use_idf))
}

/// Angle between two documents' term vectors: 0 for identical direction,
/// pi/2 when they share no weighted vocabulary.
///
/// A vector with zero norm (an empty document, or one whose every word has
/// zero idf under idf weighting) has no direction; its distance to anything is
/// `f64::INFINITY` so it ranks after every real match.
pub fn angular_distance(a: &TermCounts, b: &TermCounts, use_idf: Option<&IdfTable>) -> f64 {
    let weighting = doc_weighting(use_idf);
    let num = accumulate(a, b, weighting);
    let denom = accumulate(a, a, weighting) * accumulate(b, b, weighting);
    if denom <= 0.0 {
        return f64::INFINITY;
    }
    (num / denom.sqrt()).min(1.0).acos()
}

fn doc_weighting(use_idf: Option<&IdfTable>) -> Weighting<'_> {
    match use_idf {
        Some(idf) => Weighting::IdfSquared(idf),
        None => Weighting::Plain,
    }
}
