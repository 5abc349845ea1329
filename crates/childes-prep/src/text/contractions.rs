//! # Contraction and Possessive Splitting
//!
//! Possessives and contraction suffixes become tokens of their own
//! (`"camel's"` -> `"camel 's"`, `"don't"` -> `"do n't"`), and a handful of
//! colloquial forms are expanded (`"gonna"` -> `"going to"`).

use crate::types::{FileUtterance, Utterance};

/// Whole-word rewrites, checked after the suffix rules.
const WORD_REWRITES: [(&str, &str); 9] = [
    ("wanna", "want to"),
    ("hafta", "have to"),
    ("gonna", "going to"),
    ("okay", "ok"),
    ("y'all", "you all"),
    ("c'mere", "come here"),
    ("I'ma", "I am going to"),
    ("what'cha", "what are you"),
    ("don'tcha", "do you not"),
];

/// Suffix rules: `(suffix, bytes to strip, replacement tail)`.
///
/// Checked in order after `'s`, `can't` and `n't`.
const SUFFIX_RULES: [(&str, usize, &str); 10] = [
    ("'re", 3, " 're"),
    ("'m", 2, " 'm"),
    ("'d", 2, " 'd"),
    ("'ll", 3, " 'll"),
    ("'ve", 3, " 've"),
    ("s'", 1, " '"),
    ("'r", 2, " are"),
    ("'has", 4, " has"),
    ("'is", 3, " is"),
    ("'did", 4, " did"),
];

/// Rewrite one word; the result may contain spaces.
///
/// The first matching rule wins; words matching no rule are returned as-is.
pub fn split_contractions(word: &str) -> String {
    if let Some(stem) = word.strip_suffix("'s") {
        return format!("{stem} 's");
    }
    if word == "can't" {
        return "can n't".to_string();
    }
    if let Some(stem) = word.strip_suffix("n't") {
        return format!("{stem} n't");
    }
    for (suffix, strip, tail) in SUFFIX_RULES {
        if word.ends_with(suffix) {
            return format!("{}{tail}", &word[..word.len() - strip]);
        }
    }
    for (from, to) in WORD_REWRITES {
        if word == from {
            return to.to_string();
        }
    }
    word.to_string()
}

/// Apply [`split_contractions`] to every token and re-split on whitespace.
pub fn split_utterance(tokens: &[String]) -> Utterance {
    tokens
        .iter()
        .map(|tok| split_contractions(tok))
        .collect::<Vec<_>>()
        .join(" ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Apply [`split_utterance`] to every pair.
pub fn split_pairs(pairs: Vec<FileUtterance>) -> Vec<FileUtterance> {
    pairs
        .into_iter()
        .map(|(file_id, utt)| {
            let utt = split_utterance(&utt);
            (file_id, utt)
        })
        .collect()
}
