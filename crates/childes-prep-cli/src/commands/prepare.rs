use std::path::PathBuf;

use childes_prep::{
    DatasetSplits,
    FileUtterances,
    SplitOptions,
    SplitRatio,
    io::{read_map_pairs, save_dataset},
    splits::{DEFAULT_EXCLUDE_EVERY_KTH, DEFAULT_SEED, split_corpus, unsplit_corpus},
    types::group_by_file,
    vocab::{DEFAULT_UNK_TOKEN, UnkOptions, clean_and_unk},
};

use crate::{input_output::InputArgs, logging::LogArgs};

/// Args for the prepare command.
#[derive(clap::Args, Debug)]
pub struct PrepareArgs {
    #[command(flatten)]
    input: InputArgs,

    #[clap(flatten)]
    pub logging: LogArgs,

    /// Output directory for the prepared partitions.
    #[arg(long, default_value = "pretraining")]
    pretraining_dir: PathBuf,

    /// Split into train/valid/test/excluded; otherwise everything is train.
    #[arg(long)]
    splitting: bool,

    /// Per-batch split weights, in assignment order.
    #[arg(long, default_value_t = SplitRatio::default())]
    ratio: SplitRatio,

    /// Hold out every k-th treebank file.
    #[arg(long, default_value_t = DEFAULT_EXCLUDE_EVERY_KTH)]
    exclude_every_kth: usize,

    /// Shuffle seed.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Deal each batch in sorted order instead of shuffling it.
    #[arg(long)]
    no_shuffle: bool,

    /// Shuffle the file order of each final partition.
    #[arg(long)]
    shuffle_files: bool,

    /// Replace out-of-vocabulary words in train/valid/test.
    #[arg(long)]
    unking: bool,

    /// Keep only words seen more than this many times in train; 0 keeps all.
    #[arg(long, default_value_t = 0)]
    cutoff: usize,

    /// The out-of-vocabulary token.
    #[arg(long, default_value = DEFAULT_UNK_TOKEN)]
    unk_token: String,
}

impl PrepareArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging()?;

        let files = self.read_files()?;
        log::info!("read {} files", files.len());

        let splits = self.split(files)?;

        let unk_options = UnkOptions::default()
            .with_unking(self.unking)
            .with_unk_token(self.unk_token.clone())
            .with_cutoff(self.cutoff);
        let (splits, vocab) = clean_and_unk(splits, &unk_options);

        log::info!("output: {}", self.pretraining_dir.display());
        save_dataset(&self.pretraining_dir, &splits, &vocab)?;

        Ok(())
    }

    fn split_options(&self) -> SplitOptions {
        SplitOptions::default()
            .with_ratio(self.ratio.clone())
            .with_exclude_every_kth(self.exclude_every_kth)
            .with_batch_shuffle(!self.no_shuffle)
            .with_shuffle_files(self.shuffle_files)
            .with_seed(self.seed)
    }

    fn split(
        &self,
        files: Vec<FileUtterances>,
    ) -> Result<DatasetSplits, Box<dyn std::error::Error>> {
        if !self.splitting {
            return Ok(unsplit_corpus(&files));
        }
        if self.no_shuffle {
            log::warn!("batch shuffling is disabled; batches are dealt in size order");
        }
        Ok(split_corpus(files, &self.split_options())?)
    }

    fn read_files(&self) -> Result<Vec<FileUtterances>, Box<dyn std::error::Error>> {
        let mut pairs = Vec::new();
        for (idx, reader) in self.input.open_readers()?.into_iter().enumerate() {
            log::info!("{idx}: {}", self.input.inputs[idx]);
            pairs.extend(read_map_pairs(reader)?);
        }
        Ok(group_by_file(pairs))
    }
}
