use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter},
};

fn squash_standard_io(path: &Option<String>) -> Option<String> {
    match path {
        Some(p) if p == "-" => None,
        Some(p) => Some(p.clone()),
        None => None,
    }
}

/// Input argument group.
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Input files; "-" may be used to indicate stdin.
    #[clap(default_values_t = vec!["-".to_string()])]
    pub inputs: Vec<String>,
}

impl InputArgs {
    /// Open a reader for each input, in order.
    pub fn open_readers(&self) -> Result<Vec<Box<dyn BufRead>>, Box<dyn std::error::Error>> {
        self.inputs
            .iter()
            .map(|input| open_reader(&Some(input.clone())))
            .collect()
    }
}

/// Open a reader; `None` or "-" reads stdin.
pub fn open_reader(path: &Option<String>) -> Result<Box<dyn BufRead>, Box<dyn std::error::Error>> {
    Ok(match squash_standard_io(path) {
        None => Box::new(BufReader::new(std::io::stdin().lock())),
        Some(p) => Box::new(BufReader::new(File::open(p)?)),
    })
}

/// Output argument group.
#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// Optional output file; "-" may be used to indicate stdout.
    #[clap(long, default_value = None)]
    pub output: Option<String>,
}

impl OutputArgs {
    /// Open a writer for the output.
    pub fn open_writer(&self) -> Result<Box<dyn std::io::Write>, Box<dyn std::error::Error>> {
        Ok(match squash_standard_io(&self.output) {
            Some(p) => Box::new(BufWriter::new(File::create(p)?)),
            None => Box::new(BufWriter::new(std::io::stdout().lock())),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_squash_standard_io() {
        assert_eq!(squash_standard_io(&None), None);
        assert_eq!(squash_standard_io(&Some("-".to_string())), None);
        assert_eq!(
            squash_standard_io(&Some("a.map".to_string())),
            Some("a.map".to_string())
        );
    }
}
