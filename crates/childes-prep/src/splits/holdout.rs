//! # Stratified Hold-Out Sampling
//!
//! Files are ordered by how many questions they contain, and every k-th file
//! of that ordering is held out. The held-out files are therefore spread
//! evenly over the question-count distribution rather than sampled uniformly.

use crate::{
    errors::{PrepError, PrepResult},
    splits::questions::count_questions,
    types::FileUtterances,
};

/// The default hold-out stride.
pub const DEFAULT_EXCLUDE_EVERY_KTH: usize = 10;

/// The result of [`hold_out`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HoldOut {
    /// Files kept for splitting, in ascending question-count order.
    pub included: Vec<FileUtterances>,

    /// Held-out files, in ascending question-count order.
    pub excluded: Vec<FileUtterances>,
}

/// Hold out every `exclude_every_kth` file, by ascending question count.
///
/// The sort is stable: files with equal question counts keep their
/// order in `files`. Sorted positions `0, k, 2k, ...` are excluded.
///
/// ## Errors
/// * [`PrepError::Config`] if `exclude_every_kth` is zero.
/// * [`PrepError::EmptyUtterance`] if any file holds an empty utterance.
pub fn hold_out(
    files: Vec<FileUtterances>,
    exclude_every_kth: usize,
) -> PrepResult<HoldOut> {
    if exclude_every_kth == 0 {
        return Err(PrepError::Config(
            "exclude_every_kth must be positive".to_string(),
        ));
    }

    let mut counted = files
        .into_iter()
        .map(|file| -> PrepResult<(usize, FileUtterances)> {
            Ok((count_questions(&file.file_id, &file.utterances)?, file))
        })
        .collect::<PrepResult<Vec<_>>>()?;
    counted.sort_by_key(|(questions, _)| *questions);

    let mut result = HoldOut::default();
    for (idx, (_, file)) in counted.into_iter().enumerate() {
        if idx % exclude_every_kth == 0 {
            result.excluded.push(file);
        } else {
            result.included.push(file);
        }
    }

    log::debug!(
        "hold-out: {} included, {} excluded (every {exclude_every_kth})",
        result.included.len(),
        result.excluded.len(),
    );

    Ok(result)
}
