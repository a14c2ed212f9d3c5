//! Joining two collectors on one analysis type.
//!
//! Every stored token of one collector is used as a query against the other.
//! The side with fewer stored tokens drives, so the number of queries is
//! the smaller of the two snapshot sizes. Pair orientation does not depend
//! on the driver: `left` always comes from the first collector.
//!
//! `join(a, b, t)` and `join(b, a, t)` yield the same pairs with sides
//! swapped only when the query expansion of `t` is symmetric (see
//! [`AnalysisType::has_symmetric_query_expansion`]). For other types, such
//! as insertion, the first collector always drives: its tokens are the
//! queries and the second collector's partitions are searched. The result
//! then does not depend on the snapshot sizes, but it is directional.

use log::debug;

use crate::analysis::analysis_type::AnalysisType;
use crate::analysis::symbol::Symbol;
use crate::analysis::token::Token;
use crate::collector::Collector;
use crate::collector::matcher::Matcher;
use crate::collector::metrics::Metrics;
use crate::scoring::MatchingTokenAndStatistics;

/// A pair of matching occurrences, one from each joined collector.
#[derive(Debug, Clone)]
pub struct JoinMatch<C, RA, RB> {
    left: MatchingTokenAndStatistics<C, RA>,
    right: MatchingTokenAndStatistics<C, RB>,
}

impl<C, RA, RB> JoinMatch<C, RA, RB> {
    pub fn new(
        left: MatchingTokenAndStatistics<C, RA>,
        right: MatchingTokenAndStatistics<C, RB>,
    ) -> Self {
        JoinMatch { left, right }
    }

    /// The occurrence from the first collector.
    pub fn left(&self) -> &MatchingTokenAndStatistics<C, RA> {
        &self.left
    }

    /// The occurrence from the second collector.
    pub fn right(&self) -> &MatchingTokenAndStatistics<C, RB> {
        &self.right
    }

    /// The token from the first collector.
    pub fn token(&self) -> &Token<C> {
        self.left.token()
    }

    pub fn into_parts(
        self,
    ) -> (
        MatchingTokenAndStatistics<C, RA>,
        MatchingTokenAndStatistics<C, RB>,
    ) {
        (self.left, self.right)
    }
}

/// Join `a` with `b` on partitions of `analysis_type`.
///
/// Both collectors are snapshotted for `analysis_type`; each stored token of
/// the driving snapshot is matched against the other collector's live
/// partitions of the same type, and every hit becomes one [`JoinMatch`].
pub fn join<C, RA, RB>(
    a: &Collector<C, RA>,
    b: &Collector<C, RB>,
    analysis_type: &AnalysisType,
) -> Vec<JoinMatch<C, RA, RB>>
where
    C: Symbol,
    RA: Clone,
    RB: Clone,
{
    let left = a.extract_metrics_for(analysis_type);
    let right = b.extract_metrics_for(analysis_type);

    if !analysis_type.has_symmetric_query_expansion() {
        debug!("join on {analysis_type}: directional query expansion, driving from first collector");
        let matcher = b.matcher().with_analysis_type(analysis_type.clone());
        drive(left, &matcher, JoinMatch::new)
    } else if right.size() < left.size() {
        debug!(
            "join on {analysis_type}: driving from second collector ({} < {} tokens)",
            right.size(),
            left.size()
        );
        let matcher = a.matcher().with_analysis_type(analysis_type.clone());
        drive(right, &matcher, |driver, hit| JoinMatch::new(hit, driver))
    } else {
        debug!(
            "join on {analysis_type}: driving from first collector ({} <= {} tokens)",
            left.size(),
            right.size()
        );
        let matcher = b.matcher().with_analysis_type(analysis_type.clone());
        drive(left, &matcher, JoinMatch::new)
    }
}

fn drive<C, RD, RH, RA, RB>(
    drivers: Metrics<C, RD>,
    matcher: &Matcher<'_, C, RH>,
    pair: impl Fn(
        MatchingTokenAndStatistics<C, RD>,
        MatchingTokenAndStatistics<C, RH>,
    ) -> JoinMatch<C, RA, RB>,
) -> Vec<JoinMatch<C, RA, RB>>
where
    C: Symbol,
    RD: Clone,
    RH: Clone,
{
    let mut matches = Vec::new();
    for driver in drivers {
        for hit in matcher.match_sequence(&driver.token().code_sequence()) {
            matches.push(pair(driver.clone(), hit));
        }
    }
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyzer::Analyzer;

    fn collector(texts: &[&str], reference: u32) -> Collector<char, u32> {
        let collector: Collector<char, u32> = Collector::builder().build().unwrap();
        for text in texts {
            collector.analyze_text(text, reference);
        }
        collector
    }

    #[test]
    fn test_join_exact() {
        let a = collector(&["abc", "def"], 1);
        let b = collector(&["klm", "def", "xyz"], 2);

        let matches = join(&a, &b, &AnalysisType::Exact);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].token().text(), "def");
        assert_eq!(*matches[0].left().reference(), 1);
        assert_eq!(*matches[0].right().reference(), 2);
    }

    #[test]
    fn test_join_orientation_independent_of_driver() {
        let small = collector(&["def"], 1);
        let large = collector(&["abc", "def", "ghi"], 2);

        let forward = join(&small, &large, &AnalysisType::Exact);
        let backward = join(&large, &small, &AnalysisType::Exact);

        assert_eq!(forward.len(), 1);
        assert_eq!(backward.len(), 1);
        assert_eq!(*forward[0].left().reference(), 1);
        assert_eq!(*backward[0].left().reference(), 2);
        assert_eq!(*backward[0].right().reference(), 1);
    }

    #[test]
    fn test_join_insertion_ignores_snapshot_sizes() {
        let a = collector(&[], 1);
        a.add_analyzer(Analyzer::SingleInsertions).unwrap();
        for text in ["abc", "xy", "pq"] {
            a.analyze_text(text, 1);
        }
        let b = collector(&[], 2);
        b.add_analyzer(Analyzer::SingleInsertions).unwrap();
        b.analyze_text("ab", 2);

        // The second collector is smaller, yet the first still drives.
        let matches = join(&a, &b, &AnalysisType::Insertion);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].token().text(), "abc");
        assert_eq!(matches[0].right().token().text(), "ab");
    }

    #[test]
    fn test_join_missing_type_is_empty() {
        let a = collector(&["abc"], 1);
        let b = collector(&["abc"], 2);
        assert!(join(&a, &b, &AnalysisType::Inverse).is_empty());
    }
}
