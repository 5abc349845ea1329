//! # Corpus Splitting Pipeline

use crate::{
    errors::PrepResult,
    splits::{
        DatasetSplits,
        Partition,
        SplitRatio,
        batch_split::batch_split,
        holdout::{DEFAULT_EXCLUDE_EVERY_KTH, hold_out},
        remix::remix_held_out,
        shuffler::{DEFAULT_SEED, Shuffler},
        treebank::partition_treebank,
    },
    types::{FileUtterance, FileUtterances, flatten_files, group_by_file},
};

/// Options for [`split_corpus`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitOptions {
    /// Per-batch partition weights.
    pub ratio: SplitRatio,

    /// Hold out every k-th treebank file.
    pub exclude_every_kth: usize,

    /// Shuffle each batch before it is dealt out to partitions.
    pub batch_shuffle: bool,

    /// Shuffle the file order of each final partition.
    ///
    /// Off by default: final partitions keep the order produced by
    /// batching and remixing.
    pub shuffle_files: bool,

    /// The seed for both shuffles.
    pub seed: u64,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            ratio: SplitRatio::default(),
            exclude_every_kth: DEFAULT_EXCLUDE_EVERY_KTH,
            batch_shuffle: true,
            shuffle_files: false,
            seed: DEFAULT_SEED,
        }
    }
}

impl SplitOptions {
    /// Set the split ratio.
    pub fn with_ratio(
        self,
        ratio: SplitRatio,
    ) -> Self {
        Self { ratio, ..self }
    }

    /// Set the hold-out stride.
    pub fn with_exclude_every_kth(
        self,
        exclude_every_kth: usize,
    ) -> Self {
        Self {
            exclude_every_kth,
            ..self
        }
    }

    /// Enable or disable shuffling within batches.
    pub fn with_batch_shuffle(
        self,
        batch_shuffle: bool,
    ) -> Self {
        Self {
            batch_shuffle,
            ..self
        }
    }

    /// Enable or disable shuffling the file order of the final partitions.
    pub fn with_shuffle_files(
        self,
        shuffle_files: bool,
    ) -> Self {
        Self {
            shuffle_files,
            ..self
        }
    }

    /// Set the shuffle seed.
    pub fn with_seed(
        self,
        seed: u64,
    ) -> Self {
        Self { seed, ..self }
    }
}

/// Split a corpus into train/valid/test, with a remixed treebank hold-out.
///
/// Stages:
/// 1. separate treebank files from the rest;
/// 2. [`hold_out`] every k-th treebank file, stratified by question count;
/// 3. [`batch_split`] the non-treebank files followed by the included
///    treebank files;
/// 4. [`remix_held_out`] the excluded pairs into valid/test;
/// 5. if [`SplitOptions::shuffle_files`], regroup each partition by file
///    and shuffle the file order.
///
/// Both shuffles draw from their own [`Shuffler`] seeded with
/// [`SplitOptions::seed`]: batch by batch in stage 3, then once per
/// partition (train, valid, test, excluded) in stage 5.
pub fn split_corpus(
    files: Vec<FileUtterances>,
    options: &SplitOptions,
) -> PrepResult<DatasetSplits> {
    let mut batch_shuffler = Shuffler::new(options.batch_shuffle, options.seed);

    let (treebank, not_treebank) = partition_treebank(files);
    log::info!(
        "{} treebank files, {} other files",
        treebank.len(),
        not_treebank.len()
    );

    let held = hold_out(treebank, options.exclude_every_kth)?;

    let mut included = not_treebank;
    included.extend(held.included);

    let splits = batch_split(&included, &options.ratio, &mut batch_shuffler);
    let excluded = flatten_files(&held.excluded);

    let (valid, test) = remix_held_out(splits.valid, splits.test, excluded.clone())?;

    let mut splits = DatasetSplits {
        train: splits.train,
        valid,
        test,
        excluded,
    };
    if options.shuffle_files {
        let mut file_shuffler = Shuffler::seeded(options.seed);
        splits = splits.map(|_, pairs| shuffle_files(pairs, &mut file_shuffler));
    }

    for (partition, pairs) in splits.iter() {
        log::info!("{partition}: {} utterances", pairs.len());
    }

    Ok(splits)
}

/// Place the whole corpus in [`Partition::Train`], without splitting.
pub fn unsplit_corpus(files: &[FileUtterances]) -> DatasetSplits {
    let mut splits = DatasetSplits::default();
    *splits.get_mut(Partition::Train) = flatten_files(files);
    splits
}

/// Regroup pairs by file, shuffle the file order, and flatten again.
///
/// Each file's utterances end up contiguous and in their original order.
pub fn shuffle_files(
    pairs: Vec<FileUtterance>,
    shuffler: &mut Shuffler,
) -> Vec<FileUtterance> {
    let mut files = group_by_file(pairs);
    shuffler.shuffle(&mut files);
    flatten_files(&files)
}
