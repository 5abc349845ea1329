//! # Corpus IO
//!
//! Map files hold one utterance per line:
//! ```terminaloutput
//! {FILE ID}\t{SPACE SEPARATED TOKENS}
//! ```
//! Text files hold the same utterances without the file id column.

use std::{
    fs::{self, File},
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::{
    errors::{PrepError, PrepResult},
    splits::DatasetSplits,
    types::{FileUtterance, FileUtterances, group_by_file, utterance_from_str},
};

/// The vocabulary filename written by [`save_dataset`].
pub const VOCAB_FILENAME: &str = "vocab.txt";

/// Load files-to-utterances records from a map file.
///
/// # Arguments
/// * `path` - the path to the map file.
pub fn load_file_map_path<P: AsRef<Path>>(path: P) -> PrepResult<Vec<FileUtterances>> {
    let reader = BufReader::new(File::open(path)?);
    read_file_map(reader)
}

/// Read files-to-utterances records from a map line reader.
///
/// Records are ordered by the first line of each file id.
/// Lines whose utterance is blank are skipped.
pub fn read_file_map<R: BufRead>(reader: R) -> PrepResult<Vec<FileUtterances>> {
    Ok(group_by_file(read_map_pairs(reader)?))
}

/// Read `(file, utterance)` pairs from a map line reader.
///
/// ## Errors
/// [`PrepError::Parse`] for a non-empty line without a tab separator.
pub fn read_map_pairs<R: BufRead>(reader: R) -> PrepResult<Vec<FileUtterance>> {
    let mut pairs = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let (file_id, text) = line.split_once('\t').ok_or_else(|| PrepError::Parse {
            line: idx + 1,
            message: "expected <file>\\t<utterance>".to_string(),
        })?;

        let utt = utterance_from_str(text);
        if utt.is_empty() {
            log::debug!("skipping blank utterance on line {}", idx + 1);
            continue;
        }
        pairs.push((file_id.to_string(), utt));
    }
    Ok(pairs)
}

/// Write whitespace-joined utterance lines.
pub fn write_text_lines<W: Write>(
    pairs: &[FileUtterance],
    writer: &mut W,
) -> PrepResult<()> {
    for (_, utt) in pairs {
        writeln!(writer, "{}", utt.join(" "))?;
    }
    Ok(())
}

/// Write `{file}\t{utterance}` map lines.
pub fn write_map_lines<W: Write>(
    pairs: &[FileUtterance],
    writer: &mut W,
) -> PrepResult<()> {
    for (file_id, utt) in pairs {
        writeln!(writer, "{file_id}\t{}", utt.join(" "))?;
    }
    Ok(())
}

/// Write one vocabulary word per line.
pub fn write_vocab<W: Write, S: AsRef<str>>(
    words: &[S],
    writer: &mut W,
) -> PrepResult<()> {
    for word in words {
        writeln!(writer, "{}", word.as_ref())?;
    }
    Ok(())
}

/// Save a prepared dataset into `dir`.
///
/// Writes `{partition}.txt` and `{partition}.map` for each non-empty
/// partition, and [`VOCAB_FILENAME`].
pub fn save_dataset<P: AsRef<Path>, S: AsRef<str>>(
    dir: P,
    splits: &DatasetSplits,
    vocab: &[S],
) -> PrepResult<()> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    for (partition, pairs) in splits.iter() {
        if pairs.is_empty() {
            continue;
        }

        let mut writer = BufWriter::new(File::create(dir.join(format!("{partition}.txt")))?);
        write_text_lines(pairs, &mut writer)?;
        writer.flush()?;

        let mut writer = BufWriter::new(File::create(dir.join(format!("{partition}.map")))?);
        write_map_lines(pairs, &mut writer)?;
        writer.flush()?;

        log::info!("wrote {partition}: {} utterances", pairs.len());
    }

    let mut writer = BufWriter::new(File::create(dir.join(VOCAB_FILENAME))?);
    write_vocab(vocab, &mut writer)?;
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_file_map() {
        let input = "a.xml\twhat is that ?\nb.xml\thi .\n\na.xml\tthat 's a dog .\nb.xml\t \n";

        let files = read_file_map(input.as_bytes()).unwrap();
        assert_eq!(
            files,
            vec![
                FileUtterances::new(
                    "a.xml",
                    vec![
                        utterance_from_str("what is that ?"),
                        utterance_from_str("that 's a dog .")
                    ]
                ),
                FileUtterances::new("b.xml", vec![utterance_from_str("hi .")]),
            ]
        );
    }

    #[test]
    fn test_read_file_map_missing_tab() {
        let input = "a.xml\thi .\nno tab here\n";
        match read_file_map(input.as_bytes()) {
            Err(PrepError::Parse { line, .. }) => assert_eq!(line, 2),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_write_lines() {
        let pairs = vec![
            ("a.xml".to_string(), utterance_from_str("hi there")),
            ("b.xml".to_string(), utterance_from_str("bye")),
        ];

        let mut text = Vec::new();
        write_text_lines(&pairs, &mut text).unwrap();
        assert_eq!(String::from_utf8(text).unwrap(), "hi there\nbye\n");

        let mut map = Vec::new();
        write_map_lines(&pairs, &mut map).unwrap();
        assert_eq!(String::from_utf8(map).unwrap(), "a.xml\thi there\nb.xml\tbye\n");
    }

    #[test]
    fn test_save_dataset() {
        let splits = DatasetSplits {
            train: vec![("a.xml".to_string(), utterance_from_str("hi there"))],
            test: vec![("b.xml".to_string(), utterance_from_str("bye"))],
            ..Default::default()
        };

        tempdir::TempDir::new("save_dataset_test")
            .and_then(|dir| {
                let out = dir.path().join("pretraining");
                save_dataset(&out, &splits, &["hi", "there", "bye"]).unwrap();

                assert_eq!(fs::read_to_string(out.join("train.txt"))?, "hi there\n");
                assert_eq!(fs::read_to_string(out.join("test.map"))?, "b.xml\tbye\n");
                assert_eq!(
                    fs::read_to_string(out.join(VOCAB_FILENAME))?,
                    "hi\nthere\nbye\n"
                );
                assert!(!out.join("valid.txt").exists());

                let reloaded = load_file_map_path(out.join("train.map")).unwrap();
                assert_eq!(reloaded, group_by_file(splits.train.clone()));

                Ok(())
            })
            .unwrap();
    }
}
