use std::io::{BufRead, Write};

use childes_prep::{
    io::{read_map_pairs, write_vocab},
    vocab::{Vocabulary, WordCounter},
};

use crate::{
    input_output::{InputArgs, OutputArgs},
    logging::LogArgs,
};

/// File formats for the vocab command.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum FileFormat {
    /// Whitespace-tokenized text, one utterance per line.
    Text,

    /// Tab-separated `{file}\t{utterance}` map lines.
    Map,
}

/// Args for the vocab command.
#[derive(clap::Args, Debug)]
pub struct VocabArgs {
    #[command(flatten)]
    input: InputArgs,

    #[clap(flatten)]
    pub logging: LogArgs,

    #[arg(long, default_value = "text")]
    input_format: FileFormat,

    /// Keep only words seen more than this many times; 0 keeps all.
    #[arg(long, default_value_t = 0)]
    cutoff: usize,

    #[command(flatten)]
    output: OutputArgs,
}

impl VocabArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging()?;

        let mut counter = WordCounter::new();
        for (idx, reader) in self.input.open_readers()?.into_iter().enumerate() {
            log::info!("{idx}: {}", self.input.inputs[idx]);
            match self.input_format {
                FileFormat::Text => {
                    for line in reader.lines() {
                        let line = line?;
                        counter.update_from_tokens(&line.split_whitespace().collect::<Vec<_>>());
                    }
                }
                FileFormat::Map => {
                    counter.update_from_pairs(&read_map_pairs(reader)?);
                }
            }
        }

        let vocab = Vocabulary::from_counts(counter.release(), self.cutoff);
        log::info!("Vocabulary Size: {}", vocab.len());

        if let Some(path) = &self.output.output {
            log::info!("output: {}", path);
        }
        let mut writer = self.output.open_writer()?;
        write_vocab(vocab.words(), &mut writer)?;
        writer.flush()?;

        Ok(())
    }
}
