//! # Treebank Classification

use crate::types::FileUtterances;

/// Corpora whose transcripts belong to the CHILDES treebank.
pub const TREEBANK_CORPORA: [&str; 5] = ["Brown", "Soderstrom", "Valian", "Suppes", "HSLLD/HV1"];

/// Is `file_id` part of a treebank corpus?
pub fn is_treebank_file(file_id: &str) -> bool {
    TREEBANK_CORPORA.iter().any(|name| file_id.contains(name))
}

/// Partition files into `(treebank, not_treebank)`, keeping relative order.
pub fn partition_treebank(files: Vec<FileUtterances>) -> (Vec<FileUtterances>, Vec<FileUtterances>) {
    files
        .into_iter()
        .partition(|file| is_treebank_file(&file.file_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_treebank_file() {
        assert!(is_treebank_file("Eng-NA/Brown/Adam/020304.xml"));
        assert!(is_treebank_file("Eng-NA/HSLLD/HV1/MT/admmt1.xml"));
        assert!(is_treebank_file("Suppes/010100.xml"));

        assert!(!is_treebank_file("Eng-NA/HSLLD/HV2/MT/admmt2.xml"));
        assert!(!is_treebank_file("Eng-NA/MacWhinney/010411a.xml"));
        assert!(!is_treebank_file("eng-na/brown/adam.xml"));
        assert!(!is_treebank_file(""));
    }

    #[test]
    fn test_partition_treebank() {
        let files = vec![
            FileUtterances::new("Brown/a", vec![]),
            FileUtterances::new("Other/b", vec![]),
            FileUtterances::new("Valian/c", vec![]),
        ];

        let (treebank, rest) = partition_treebank(files);
        let ids = |fs: &[FileUtterances]| fs.iter().map(|f| f.file_id.clone()).collect::<Vec<_>>();

        assert_eq!(ids(&treebank), vec!["Brown/a", "Valian/c"]);
        assert_eq!(ids(&rest), vec!["Other/b"]);
    }
}
