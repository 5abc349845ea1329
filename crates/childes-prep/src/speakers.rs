//! # Speaker Selection
//!
//! Child-directed speech is everything not said by the target child.
//! Other children are counted as speakers only when the transcript codes a
//! `Target_Child` separately; otherwise a `Child` role may be the target
//! child itself.

/// The role of the child a transcript is about.
pub const TARGET_CHILD_ROLE: &str = "Target_Child";

/// The role of any other child.
pub const CHILD_ROLE: &str = "Child";

/// A transcript participant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    /// The speaker code, e.g. `"MOT"`.
    pub id: String,

    /// The participant role, e.g. `"Mother"`.
    pub role: String,
}

impl Participant {
    /// Construct a participant.
    pub fn new<I: Into<String>, R: Into<String>>(
        id: I,
        role: R,
    ) -> Self {
        Self {
            id: id.into(),
            role: role.into(),
        }
    }
}

/// The speaker ids whose utterances count as child-directed speech.
///
/// Adults and other non-child roles come first, in participant order,
/// followed by `Child` participants if a `Target_Child` is present.
pub fn non_target_child_speakers(participants: &[Participant]) -> Vec<String> {
    let has_target_child = participants.iter().any(|p| p.role == TARGET_CHILD_ROLE);

    let mut speakers: Vec<String> = participants
        .iter()
        .filter(|p| p.role != TARGET_CHILD_ROLE && p.role != CHILD_ROLE)
        .map(|p| p.id.clone())
        .collect();

    if has_target_child {
        speakers.extend(
            participants
                .iter()
                .filter(|p| p.role == CHILD_ROLE)
                .map(|p| p.id.clone()),
        );
    }
    speakers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_siblings_included_with_target_child() {
        let participants = vec![
            Participant::new("CHI", "Target_Child"),
            Participant::new("BRO", "Child"),
            Participant::new("MOT", "Mother"),
            Participant::new("INV", "Investigator"),
        ];
        assert_eq!(
            non_target_child_speakers(&participants),
            vec!["MOT", "INV", "BRO"]
        );
    }

    #[test]
    fn test_children_excluded_without_target_child() {
        let participants = vec![
            Participant::new("CHI", "Child"),
            Participant::new("FAT", "Father"),
        ];
        assert_eq!(non_target_child_speakers(&participants), vec!["FAT"]);
    }
}
