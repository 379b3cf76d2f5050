use super::*;
use crate::Entropy;
use crate::codes::Code;
use crate::codes::Feedback;
use std::collections::BTreeMap;

/// Candidates grouped by the feedback a guess would receive against each.
///
/// Only bucket sizes matter under a uniform prior, so buckets are counts.
/// Keys are ordered, which keeps iteration (and float summation) stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition(BTreeMap<Feedback, usize>);

impl Partition {
    /// Total candidates across all buckets.
    pub fn n(&self) -> usize {
        self.0.values().sum()
    }
    /// Number of distinct feedback outcomes.
    pub fn width(&self) -> usize {
        self.0.len()
    }
    pub fn bucket(&self, feedback: &Feedback) -> usize {
        self.0.get(feedback).copied().unwrap_or(0)
    }
    pub fn buckets(&self) -> impl Iterator<Item = (&Feedback, &usize)> {
        self.0.iter()
    }
    /// Expected Hartley entropy left after the feedback is revealed:
    /// Σ_f (|bucket_f| / n) · H(bucket_f).
    pub fn remainder(&self) -> Entropy {
        let n = self.n() as Entropy;
        self.0
            .values()
            .map(|&size| size as Entropy / n * hartley(size))
            .sum()
    }
}

/// partition candidates by their feedback against a guess
impl<'a, I> From<(&Code, I)> for Partition
where
    I: IntoIterator<Item = &'a Code>,
{
    fn from((guess, candidates): (&Code, I)) -> Self {
        let mut buckets = BTreeMap::new();
        for code in candidates {
            *buckets.entry(Feedback::from((guess, code))).or_insert(0) += 1;
        }
        Self(buckets)
    }
}
