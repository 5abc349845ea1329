//! # Corpus Splitting
//!
//! File-atomic train/valid/test splitting with a stratified treebank hold-out.
//!
//! The entry point is [`split_corpus`], which sequences:
//! * [`partition_treebank`] - separate treebank files from the rest.
//! * [`hold_out`] - hold out every k-th treebank file, by question count.
//! * [`batch_split`] - deal files out to partitions in fixed-size batches.
//! * [`remix_held_out`] - fold the hold-out into test, rebalancing valid.
//!
//! No stage ever splits one file's utterances across train/valid/test.
//!
//! ```rust
//! use childes_prep::{
//!     FileUtterances,
//!     splits::{SplitOptions, split_corpus},
//!     types::utterance_from_str,
//! };
//!
//! let files: Vec<FileUtterances> = (0..20)
//!     .map(|i| FileUtterances::new(format!("Eng-NA/Other/{i}.xml"), vec![utterance_from_str("hi .")]))
//!     .collect();
//!
//! let options = SplitOptions::default().with_ratio("train=8,valid=1,test=1".parse().unwrap());
//! let splits = split_corpus(files, &options).unwrap();
//! assert_eq!(splits.train.len(), 16);
//! ```

pub mod batch_split;
pub mod holdout;
pub mod partition;
pub mod pipeline;
pub mod questions;
pub mod ratio;
pub mod remix;
pub mod shuffler;
pub mod treebank;

#[doc(inline)]
pub use batch_split::batch_split;
#[doc(inline)]
pub use holdout::{DEFAULT_EXCLUDE_EVERY_KTH, HoldOut, hold_out};
#[doc(inline)]
pub use partition::{DatasetSplits, Partition};
#[doc(inline)]
pub use pipeline::{SplitOptions, shuffle_files, split_corpus, unsplit_corpus};
#[doc(inline)]
pub use questions::{count_questions, is_question};
#[doc(inline)]
pub use ratio::SplitRatio;
#[doc(inline)]
pub use remix::{find_file_boundary, remix_held_out};
#[doc(inline)]
pub use shuffler::{DEFAULT_SEED, Shuffler};
#[doc(inline)]
pub use treebank::{TREEBANK_CORPORA, is_treebank_file, partition_treebank};
