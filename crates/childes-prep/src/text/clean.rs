//! # Utterance Cleanup

use crate::types::FileUtterance;

/// Clean a list of pairs.
///
/// Utterances of a single token (a lone `"."` or `"?"`) are dropped, and
/// `_` compound joiners are turned into token separators
/// (`"teddy_bear"` -> `"teddy bear"`).
pub fn clean_utterances(pairs: Vec<FileUtterance>) -> Vec<FileUtterance> {
    pairs
        .into_iter()
        .filter(|(_, utt)| utt.len() > 1)
        .map(|(file_id, utt)| {
            let utt = utt
                .join(" ")
                .replace('_', " ")
                .split_whitespace()
                .map(str::to_string)
                .collect();
            (file_id, utt)
        })
        .collect()
}
