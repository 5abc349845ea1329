mod prepare;
mod preprocess;
mod vocab;

/// Subcommands for childes-prep
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Split, clean, and save a corpus of extracted utterances.
    Prepare(prepare::PrepareArgs),

    /// Build a frequency vocabulary from tokenized text.
    Vocab(vocab::VocabArgs),

    /// Strip word-grouping markup from an XML corpus directory.
    Preprocess(preprocess::PreprocessArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Prepare(cmd) => cmd.run(),
            Commands::Vocab(cmd) => cmd.run(),
            Commands::Preprocess(cmd) => cmd.run(),
        }
    }
}
