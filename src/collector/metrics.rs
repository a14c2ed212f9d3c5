use crate::scoring::MatchingTokenAndStatistics;

/// An immutable snapshot of scored occurrences taken from a collector.
#[derive(Debug, Clone)]
pub struct Metrics<C, R> {
    results: Vec<MatchingTokenAndStatistics<C, R>>,
}

impl<C, R> Metrics<C, R> {
    pub fn new(results: Vec<MatchingTokenAndStatistics<C, R>>) -> Self {
        Metrics { results }
    }

    pub fn results(&self) -> &[MatchingTokenAndStatistics<C, R>] {
        &self.results
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MatchingTokenAndStatistics<C, R>> {
        self.results.iter()
    }

    /// Number of stored tokens in the snapshot.
    pub fn size(&self) -> usize {
        self.results.len()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn into_results(self) -> Vec<MatchingTokenAndStatistics<C, R>> {
        self.results
    }
}

impl<C, R> IntoIterator for Metrics<C, R> {
    type Item = MatchingTokenAndStatistics<C, R>;
    type IntoIter = std::vec::IntoIter<MatchingTokenAndStatistics<C, R>>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}

impl<'a, C, R> IntoIterator for &'a Metrics<C, R> {
    type Item = &'a MatchingTokenAndStatistics<C, R>;
    type IntoIter = std::slice::Iter<'a, MatchingTokenAndStatistics<C, R>>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}
