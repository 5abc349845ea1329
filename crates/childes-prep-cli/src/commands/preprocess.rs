use std::path::PathBuf;

use childes_prep::preprocess::{preprocess_corpus_dir, preprocessed_dir};

use crate::logging::LogArgs;

/// Args for the preprocess command.
#[derive(clap::Args, Debug)]
pub struct PreprocessArgs {
    /// The XML corpus directory.
    source: PathBuf,

    /// Destination directory; defaults to "{source}-preprocessed".
    #[arg(long, default_value = None)]
    destination: Option<PathBuf>,

    #[clap(flatten)]
    pub logging: LogArgs,
}

impl PreprocessArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging()?;

        let destination = self
            .destination
            .clone()
            .unwrap_or_else(|| preprocessed_dir(&self.source));

        log::info!("Starting preprocessing");
        if preprocess_corpus_dir(&self.source, &destination)? {
            log::info!("Preprocessing finished");
        }
        Ok(())
    }
}
