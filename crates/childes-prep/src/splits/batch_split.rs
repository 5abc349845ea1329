//! # Proportional Batch Splitting
//!
//! Files are sorted longest-first and dealt out in fixed-size batches, so
//! the split proportions hold at fine grain over the whole size range
//! instead of one partition collecting all of the longest files.

use core::cmp::Reverse;

use crate::{
    splits::{DatasetSplits, SplitRatio, shuffler::Shuffler},
    types::FileUtterances,
};

/// Split files into train/valid/test by `ratio`, keeping each file whole.
///
/// 1. Files are stably sorted by descending utterance count.
/// 2. They are taken in batches of [`SplitRatio::batch_size`] files; the
///    last batch may be shorter.
/// 3. Each batch is shuffled by `shuffler` (a no-op when disabled).
/// 4. The batch is dealt out in the ratio's declaration order: the first
///    `w1` files to the first partition, the next `w2` to the second, ...
///    A short final batch is dealt the same way until it runs out.
///
/// The `excluded` partition of the result is empty.
pub fn batch_split(
    files: &[FileUtterances],
    ratio: &SplitRatio,
    shuffler: &mut Shuffler,
) -> DatasetSplits {
    let mut order: Vec<&FileUtterances> = files.iter().collect();
    order.sort_by_key(|file| Reverse(file.len()));

    let mut splits = DatasetSplits::default();
    let batch_size = ratio.batch_size();
    if batch_size == 0 {
        return splits;
    }

    for batch in order.chunks(batch_size) {
        let mut batch = batch.to_vec();
        shuffler.shuffle(&mut batch);

        let mut remaining = batch.as_slice();
        for &(partition, weight) in ratio.weights() {
            let take = weight.min(remaining.len());
            let (head, tail) = remaining.split_at(take);
            let target = splits.get_mut(partition);
            for file in head {
                file.extend_pairs_into(target);
            }
            remaining = tail;
        }
    }

    log::debug!(
        "batch split of {} files: train={} valid={} test={} pairs",
        files.len(),
        splits.train.len(),
        splits.valid.len(),
        splits.test.len(),
    );

    splits
}
