use crate::TermCounts;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NON_WORD: Regex = Regex::new(r"[^\w]").expect("valid regex");
}

/// Replace every non-word character with a space and split on whitespace.
/// Case is left untouched; folding happens when statistics are built.
pub fn split_words(text: &str) -> Vec<String> {
    NON_WORD
        .replace_all(text, " ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Lower-case form used as the key in every statistics table.
pub fn fold(token: &str) -> String { token.to_lowercase() }

/// Unique lower-cased query words, each with a count of one.
///
/// Repeated words in a query contribute once to the score.
pub fn query_terms(query: &str) -> TermCounts {
    split_words(query).iter().map(|w| (fold(w), 1)).collect()
}
