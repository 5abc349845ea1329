//! # Hold-Out Remixing
//!
//! The held-out treebank pairs are appended to test, and up to an equal share of
//! test's tail moves to valid so that the two stay balanced. The cut in test
//! always falls on a file boundary.

use crate::{
    errors::{PrepError, PrepResult},
    types::FileUtterance,
};

/// Find the first file boundary at or after `target`.
///
/// Position `b` is a boundary when the pairs at `b - 1` and `b` belong to
/// different files. Returns `None` when no boundary exists in
/// `target..pairs.len()`, i.e. `pairs[target..]` is a single file.
pub fn find_file_boundary(
    pairs: &[FileUtterance],
    target: usize,
) -> Option<usize> {
    (target.max(1)..pairs.len()).find(|&b| pairs[b - 1].0 != pairs[b].0)
}

/// Merge `excluded` into `test`, rebalancing `valid` and `test`.
///
/// With `n = excluded.len()`, at most `n / 2` pairs move from the tail of
/// `test` to the end of `valid`. The cut starts at `test.len() - n / 2` and
/// shrinks the moved tail until it falls on a file boundary, so only whole
/// files move. The remaining test pairs are followed by all of `excluded`,
/// in order.
///
/// Returns `(valid, test)` unchanged when `excluded` is empty.
///
/// ## Errors
/// * [`PrepError::RemixTestTooSmall`] if `test` holds fewer than `n / 2` pairs.
/// * [`PrepError::RemixBoundaryNotFound`] if the tail of `test` from the
///   initial cut onwards is a single file.
pub fn remix_held_out(
    mut valid: Vec<FileUtterance>,
    mut test: Vec<FileUtterance>,
    excluded: Vec<FileUtterance>,
) -> PrepResult<(Vec<FileUtterance>, Vec<FileUtterance>)> {
    let excluded_size = excluded.len();
    if excluded_size == 0 {
        return Ok((valid, test));
    }

    let reshuffle_size = excluded_size / 2;
    if reshuffle_size > 0 {
        if test.len() < reshuffle_size {
            return Err(PrepError::RemixTestTooSmall {
                test_size: test.len(),
                reshuffle_size,
            });
        }

        let target = test.len() - reshuffle_size;
        let cut = find_file_boundary(&test, target).ok_or_else(|| {
            PrepError::RemixBoundaryNotFound {
                file_id: test[target].0.clone(),
            }
        })?;

        log::debug!(
            "remix: moving {} of {} test pairs to valid (target {reshuffle_size})",
            test.len() - cut,
            test.len(),
        );

        valid.extend(test.drain(cut..));
    }

    test.extend(excluded);
    Ok((valid, test))
}
