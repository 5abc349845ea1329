//! # Common Types
//!
//! Files-to-utterances mappings are kept as ordered `Vec`s of
//! [`FileUtterances`]; the order is the traversal order every stable
//! tie-break in [`crate::splits`] falls back to.

/// One spoken turn, as an ordered sequence of word tokens.
pub type Utterance = Vec<String>;

/// A single utterance labeled with the file it came from.
pub type FileUtterance = (String, Utterance);

/// A transcript file and its utterances, in transcript order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FileUtterances {
    /// The source file identifier.
    pub file_id: String,

    /// The utterances of the file.
    pub utterances: Vec<Utterance>,
}

impl FileUtterances {
    /// Construct a new file record.
    pub fn new<S: Into<String>>(
        file_id: S,
        utterances: Vec<Utterance>,
    ) -> Self {
        Self {
            file_id: file_id.into(),
            utterances,
        }
    }

    /// The number of utterances in the file.
    pub fn len(&self) -> usize {
        self.utterances.len()
    }

    /// Does the file hold no utterances?
    pub fn is_empty(&self) -> bool {
        self.utterances.is_empty()
    }

    /// Append this file's `(file, utterance)` pairs to `target`.
    pub fn extend_pairs_into(
        &self,
        target: &mut Vec<FileUtterance>,
    ) {
        target.extend(
            self.utterances
                .iter()
                .map(|utt| (self.file_id.clone(), utt.clone())),
        );
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type PrepHashMap<K, V> = ahash::AHashMap<K, V>;

        /// Create a new empty hash map.
        pub fn hash_map_new<K, V>() -> PrepHashMap<K, V> {
            PrepHashMap::new()
        }
    } else {
        /// Type Alias for hash maps in this crate.
        pub type PrepHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Create a new empty hash map.
        pub fn hash_map_new<K, V>() -> PrepHashMap<K, V> {
            PrepHashMap::new()
        }
    }
}

/// Flatten file records into `(file, utterance)` pairs, in record order.
pub fn flatten_files(files: &[FileUtterances]) -> Vec<FileUtterance> {
    let mut pairs = Vec::with_capacity(files.iter().map(FileUtterances::len).sum());
    for file in files {
        file.extend_pairs_into(&mut pairs);
    }
    pairs
}

/// Regroup `(file, utterance)` pairs into file records.
///
/// Records are ordered by the first occurrence of their file id;
/// each file keeps the relative order of its utterances.
pub fn group_by_file(pairs: Vec<FileUtterance>) -> Vec<FileUtterances> {
    let mut index: PrepHashMap<String, usize> = hash_map_new();
    let mut files: Vec<FileUtterances> = Vec::new();
    for (file_id, utt) in pairs {
        match index.get(&file_id) {
            Some(&idx) => files[idx].utterances.push(utt),
            None => {
                index.insert(file_id.clone(), files.len());
                files.push(FileUtterances::new(file_id, vec![utt]));
            }
        }
    }
    files
}

/// Build an [`Utterance`] from a whitespace separated string.
pub fn utterance_from_str(text: &str) -> Utterance {
    text.split_whitespace().map(str::to_string).collect()
}
