//! # `childes-prep` CHILDES Corpus Preparation
//!
//! Prepares child-directed speech from the CHILDES corpus for language-model
//! training: file-atomic train/valid/test splitting with a stratified
//! treebank hold-out, text cleanup, and frequency vocabularies.
//!
//! See:
//! * [`splits`] to partition a files-to-utterances mapping.
//! * [`text`] to clean and re-tokenize utterances.
//! * [`vocab`] to build vocabularies and replace rare words.
//! * [`io`] to read map files and save prepared datasets.
//! * [`preprocess`] and [`speakers`] for upstream transcript handling.
//!
//! ## Crate Features
//!
//! #### feature: ``ahash``
//!
//! This swaps all HashMap implementations for ``ahash``; enabled by default.
//!
//! ## Preparing a Dataset
//!
//! ```rust,no_run
//! use childes_prep::{
//!     io::{load_file_map_path, save_dataset},
//!     splits::{SplitOptions, split_corpus},
//!     vocab::{UnkOptions, clean_and_unk},
//! };
//!
//! fn prepare() -> childes_prep::PrepResult<()> {
//!     let files = load_file_map_path("childes.map")?;
//!
//!     let splits = split_corpus(files, &SplitOptions::default().with_seed(1))?;
//!     let (splits, vocab) = clean_and_unk(splits, &UnkOptions::default().with_unking(true));
//!
//!     save_dataset("pretraining", &splits, &vocab)
//! }
//! ```
#![warn(missing_docs, unused)]

pub mod errors;
pub mod io;
pub mod preprocess;
pub mod speakers;
pub mod splits;
pub mod text;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use errors::{PrepError, PrepResult};
#[doc(inline)]
pub use splits::{DatasetSplits, Partition, SplitOptions, SplitRatio};
#[doc(inline)]
pub use types::{FileUtterance, FileUtterances, Utterance};
