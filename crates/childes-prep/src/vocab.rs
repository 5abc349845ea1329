//! # Frequency Vocabulary
//!
//! Vocabularies are built from the training partition only; validation and
//! test are unked against the training vocabulary.

use crate::{
    splits::{DatasetSplits, Partition},
    text::{clean_utterances, split_pairs},
    types::{FileUtterance, PrepHashMap, hash_map_new},
};

/// The default out-of-vocabulary token.
pub const DEFAULT_UNK_TOKEN: &str = "<unk>";

/// Word frequency counter.
#[derive(Debug, Clone, Default)]
pub struct WordCounter {
    /// The word counts.
    pub word_counts: PrepHashMap<String, usize>,
}

impl WordCounter {
    /// Create a new, empty word counter.
    pub fn new() -> Self {
        Self {
            word_counts: hash_map_new(),
        }
    }

    /// Release the word counts and return them.
    pub fn release(self) -> PrepHashMap<String, usize> {
        self.word_counts
    }

    /// Update word counts inplace from one utterance.
    pub fn update_from_tokens<S: AsRef<str>>(
        &mut self,
        tokens: &[S],
    ) {
        for tok in tokens {
            let tok = tok.as_ref();
            match self.word_counts.get_mut(tok) {
                Some(count) => *count += 1,
                None => {
                    self.word_counts.insert(tok.to_string(), 1);
                }
            }
        }
    }

    /// Update word counts inplace from `(file, utterance)` pairs.
    pub fn update_from_pairs<'a, I>(
        &mut self,
        pairs: I,
    ) where
        I: IntoIterator<Item = &'a FileUtterance>,
    {
        for (_, utt) in pairs {
            self.update_from_tokens(utt);
        }
    }
}

/// Count token frequencies over `(file, utterance)` pairs.
pub fn count_frequencies(pairs: &[FileUtterance]) -> PrepHashMap<String, usize> {
    let mut counter = WordCounter::new();
    counter.update_from_pairs(pairs);
    counter.release()
}

/// A frequency-ordered vocabulary.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    words: Vec<String>,
    index: PrepHashMap<String, usize>,
}

impl Vocabulary {
    /// Build a vocabulary from word counts.
    ///
    /// Words are ordered by descending count, then ascending word.
    /// With `cutoff > 0`, only words seen more than `cutoff` times are kept.
    pub fn from_counts(
        counts: PrepHashMap<String, usize>,
        cutoff: usize,
    ) -> Self {
        let mut items: Vec<(String, usize)> = counts
            .into_iter()
            .filter(|(_, count)| cutoff == 0 || *count > cutoff)
            .collect();
        items.sort_by(|(aw, ac), (bw, bc)| bc.cmp(ac).then_with(|| aw.cmp(bw)));

        let words: Vec<String> = items.into_iter().map(|(word, _)| word).collect();
        let mut index = hash_map_new();
        for (idx, word) in words.iter().enumerate() {
            index.insert(word.clone(), idx);
        }
        Self { words, index }
    }

    /// Build a vocabulary from `(file, utterance)` pairs.
    ///
    /// See [`Vocabulary::from_counts`].
    pub fn build(
        pairs: &[FileUtterance],
        cutoff: usize,
    ) -> Self {
        Self::from_counts(count_frequencies(pairs), cutoff)
    }

    /// The words, most frequent first.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// The number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Is the vocabulary empty?
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Is `word` in the vocabulary?
    pub fn contains(
        &self,
        word: &str,
    ) -> bool {
        self.index.contains_key(word)
    }

    /// The frequency rank of `word`, if present.
    pub fn index_of(
        &self,
        word: &str,
    ) -> Option<usize> {
        self.index.get(word).copied()
    }
}

/// Replace every out-of-vocabulary token with `unk_token`.
pub fn unk(
    pairs: Vec<FileUtterance>,
    vocab: &Vocabulary,
    unk_token: &str,
) -> Vec<FileUtterance> {
    pairs
        .into_iter()
        .map(|(file_id, utt)| {
            let utt = utt
                .into_iter()
                .map(|tok| {
                    if vocab.contains(&tok) {
                        tok
                    } else {
                        unk_token.to_string()
                    }
                })
                .collect();
            (file_id, utt)
        })
        .collect()
}

/// Options for [`clean_and_unk`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnkOptions {
    /// Replace out-of-vocabulary words?
    pub unking: bool,

    /// The replacement token.
    pub unk_token: String,

    /// Keep only words seen more than `cutoff` times; `0` keeps all.
    pub cutoff: usize,
}

impl Default for UnkOptions {
    fn default() -> Self {
        Self {
            unking: false,
            unk_token: DEFAULT_UNK_TOKEN.to_string(),
            cutoff: 0,
        }
    }
}

impl UnkOptions {
    /// Enable or disable unking.
    pub fn with_unking(
        self,
        unking: bool,
    ) -> Self {
        Self { unking, ..self }
    }

    /// Set the replacement token.
    pub fn with_unk_token<S: Into<String>>(
        self,
        unk_token: S,
    ) -> Self {
        Self {
            unk_token: unk_token.into(),
            ..self
        }
    }

    /// Set the frequency cutoff.
    pub fn with_cutoff(
        self,
        cutoff: usize,
    ) -> Self {
        Self { cutoff, ..self }
    }
}

/// Clean every partition, build the training vocabulary, and optionally unk.
///
/// Returns the processed partitions and the emitted vocabulary list.
/// When unking, train/valid/test are unked (the standalone excluded
/// partition is left as-is) and the unk token leads the vocabulary list.
pub fn clean_and_unk(
    splits: DatasetSplits,
    options: &UnkOptions,
) -> (DatasetSplits, Vec<String>) {
    let splits = splits.map(|_, pairs| split_pairs(clean_utterances(pairs)));

    let vocab = Vocabulary::build(&splits.train, options.cutoff);
    log::info!("vocabulary: {} words (cutoff {})", vocab.len(), options.cutoff);

    if !options.unking {
        return (splits, vocab.words().to_vec());
    }

    let splits = splits.map(|partition, pairs| match partition {
        Partition::Excluded => pairs,
        _ => unk(pairs, &vocab, &options.unk_token),
    });

    let mut words = Vec::with_capacity(vocab.len() + 1);
    words.push(options.unk_token.clone());
    words.extend_from_slice(vocab.words());
    (splits, words)
}
