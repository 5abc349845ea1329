//! # Split Ratios

use core::{fmt, str::FromStr};

use crate::{
    errors::{PrepError, PrepResult},
    splits::partition::Partition,
};

/// Integer weights over the `train`/`valid`/`test` partitions.
///
/// Declaration order matters: within each batch the first declared
/// partition receives the first files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitRatio {
    weights: Vec<(Partition, usize)>,
}

impl Default for SplitRatio {
    fn default() -> Self {
        Self {
            weights: vec![
                (Partition::Valid, 5),
                (Partition::Test, 5),
                (Partition::Train, 90),
            ],
        }
    }
}

impl SplitRatio {
    /// Build a ratio from `(partition, weight)` pairs, in declaration order.
    ///
    /// ## Errors
    /// [`PrepError::Config`] if a partition is repeated, is
    /// [`Partition::Excluded`], or all weights are zero.
    pub fn new<I>(weights: I) -> PrepResult<Self>
    where
        I: IntoIterator<Item = (Partition, usize)>,
    {
        let weights: Vec<(Partition, usize)> = weights.into_iter().collect();

        for (idx, (partition, _)) in weights.iter().enumerate() {
            if *partition == Partition::Excluded {
                return Err(PrepError::Config(
                    "the excluded partition cannot carry a split weight".to_string(),
                ));
            }
            if weights[..idx].iter().any(|(p, _)| p == partition) {
                return Err(PrepError::Config(format!(
                    "partition {partition} appears more than once in the split ratio"
                )));
            }
        }

        let ratio = Self { weights };
        if ratio.batch_size() == 0 {
            return Err(PrepError::Config(
                "split ratio weights sum to zero".to_string(),
            ));
        }
        Ok(ratio)
    }

    /// The `(partition, weight)` pairs, in declaration order.
    pub fn weights(&self) -> &[(Partition, usize)] {
        &self.weights
    }

    /// The weight of a partition; zero if undeclared.
    pub fn weight(
        &self,
        partition: Partition,
    ) -> usize {
        self.weights
            .iter()
            .find(|(p, _)| *p == partition)
            .map_or(0, |(_, w)| *w)
    }

    /// The number of files per batch: the sum of the weights.
    pub fn batch_size(&self) -> usize {
        self.weights.iter().map(|(_, w)| w).sum()
    }
}

impl FromStr for SplitRatio {
    type Err = PrepError;

    /// Parse `"valid=5,test=5,train=90"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut weights = Vec::new();
        for item in s.split(',').map(str::trim).filter(|item| !item.is_empty()) {
            let (name, weight) = item.split_once('=').ok_or_else(|| {
                PrepError::Config(format!("expected <partition>=<weight>, got {item:?}"))
            })?;
            let partition = Partition::from_str(name.trim())
                .map_err(|_| PrepError::Config(format!("unknown partition {name:?}")))?;
            let weight = weight
                .trim()
                .parse::<usize>()
                .map_err(|e| PrepError::Config(format!("bad weight for {partition}: {e}")))?;
            weights.push((partition, weight));
        }
        Self::new(weights)
    }
}

impl fmt::Display for SplitRatio {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        for (idx, (partition, weight)) in self.weights.iter().enumerate() {
            if idx > 0 {
                write!(f, ",")?;
            }
            write!(f, "{partition}={weight}")?;
        }
        Ok(())
    }
}
