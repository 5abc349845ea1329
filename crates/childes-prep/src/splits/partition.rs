//! # Named Dataset Partitions

use crate::types::FileUtterance;

/// The named partitions of a prepared dataset.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum Partition {
    /// Pretraining data.
    Train,

    /// Validation data.
    Valid,

    /// Test data; also receives the remixed treebank hold-out.
    Test,

    /// The stratified treebank hold-out, exposed standalone.
    Excluded,
}

impl Partition {
    /// All partitions, in output order.
    pub const ALL: [Partition; 4] = [
        Partition::Train,
        Partition::Valid,
        Partition::Test,
        Partition::Excluded,
    ];

    /// The partition name, as used in output filenames.
    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// A partition set: one flat `(file, utterance)` list per [`Partition`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatasetSplits {
    /// The training pairs.
    pub train: Vec<FileUtterance>,

    /// The validation pairs.
    pub valid: Vec<FileUtterance>,

    /// The test pairs.
    pub test: Vec<FileUtterance>,

    /// The held-out treebank pairs.
    pub excluded: Vec<FileUtterance>,
}

impl DatasetSplits {
    /// Get the pairs of a partition.
    pub fn get(
        &self,
        partition: Partition,
    ) -> &Vec<FileUtterance> {
        match partition {
            Partition::Train => &self.train,
            Partition::Valid => &self.valid,
            Partition::Test => &self.test,
            Partition::Excluded => &self.excluded,
        }
    }

    /// Get the pairs of a partition, mutably.
    pub fn get_mut(
        &mut self,
        partition: Partition,
    ) -> &mut Vec<FileUtterance> {
        match partition {
            Partition::Train => &mut self.train,
            Partition::Valid => &mut self.valid,
            Partition::Test => &mut self.test,
            Partition::Excluded => &mut self.excluded,
        }
    }

    /// Iterate over `(partition, pairs)`, in [`Partition::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Partition, &Vec<FileUtterance>)> {
        Partition::ALL.into_iter().map(|p| (p, self.get(p)))
    }

    /// Apply `f` to every partition, in [`Partition::ALL`] order.
    pub fn map<F>(
        self,
        mut f: F,
    ) -> Self
    where
        F: FnMut(Partition, Vec<FileUtterance>) -> Vec<FileUtterance>,
    {
        Self {
            train: f(Partition::Train, self.train),
            valid: f(Partition::Valid, self.valid),
            test: f(Partition::Test, self.test),
            excluded: f(Partition::Excluded, self.excluded),
        }
    }

    /// The total number of pairs across all partitions.
    pub fn total_len(&self) -> usize {
        self.iter().map(|(_, pairs)| pairs.len()).sum()
    }
}
