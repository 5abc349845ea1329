//! # Question Counting

use crate::{
    errors::{PrepError, PrepResult},
    types::Utterance,
};

/// The token that marks an utterance as a question.
pub const QUESTION_MARK: &str = "?";

/// Is the utterance a question?
///
/// Returns `None` for an empty utterance, which has no final token.
pub fn is_question(utterance: &[String]) -> Option<bool> {
    utterance.last().map(|tok| tok == QUESTION_MARK)
}

/// Count the question utterances of a file.
///
/// ## Errors
/// [`PrepError::EmptyUtterance`] if any utterance is empty;
/// upstream readers are expected to filter those out.
pub fn count_questions(
    file_id: &str,
    utterances: &[Utterance],
) -> PrepResult<usize> {
    let mut count = 0;
    for (index, utt) in utterances.iter().enumerate() {
        match is_question(utt) {
            Some(true) => count += 1,
            Some(false) => {}
            None => {
                return Err(PrepError::EmptyUtterance {
                    file_id: file_id.to_string(),
                    index,
                });
            }
        }
    }
    Ok(count)
}
