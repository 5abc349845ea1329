//! # Text Normalization
//!
//! Token-level cleanup applied to every partition before vocabulary building.

pub mod clean;
pub mod contractions;

#[doc(inline)]
pub use clean::clean_utterances;
#[doc(inline)]
pub use contractions::{split_contractions, split_pairs, split_utterance};
