//! Structural identity of analyzers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies an analyzer or a composition of analyzers.
///
/// Equality is structural: two chains are the same type only if their
/// children are the same types in the same order. The type selects which
/// index partitions a query or a metrics extraction touches.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisType {
    Exact,
    #[serde(rename = "front_ngram")]
    FrontNGram,
    #[serde(rename = "back_ngram")]
    BackNGram,
    Deletion,
    Insertion,
    Inverse,
    LowerCase,
    Chain(Vec<AnalysisType>),
    Composite(Vec<AnalysisType>),
}

impl AnalysisType {
    /// Whether this type describes a composition of analyzers.
    pub fn is_composed(&self) -> bool {
        matches!(self, AnalysisType::Chain(_) | AnalysisType::Composite(_))
    }

    /// The child types of a composition, empty for atomic types.
    pub fn children(&self) -> &[AnalysisType] {
        match self {
            AnalysisType::Chain(children) | AnalysisType::Composite(children) => children,
            _ => &[],
        }
    }

    /// Whether a query key and a stored key match the same way in both
    /// directions.
    ///
    /// Query expansion is the identity or an involution for every type except
    /// insertion, which maps a query to its single-deletion variants.
    pub fn has_symmetric_query_expansion(&self) -> bool {
        match self {
            AnalysisType::Insertion => false,
            AnalysisType::Chain(children) | AnalysisType::Composite(children) => children
                .iter()
                .all(AnalysisType::has_symmetric_query_expansion),
            _ => true,
        }
    }
}

impl fmt::Display for AnalysisType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (name, children) = match self {
            AnalysisType::Exact => return f.write_str("exact"),
            AnalysisType::FrontNGram => return f.write_str("front_ngram"),
            AnalysisType::BackNGram => return f.write_str("back_ngram"),
            AnalysisType::Deletion => return f.write_str("deletion"),
            AnalysisType::Insertion => return f.write_str("insertion"),
            AnalysisType::Inverse => return f.write_str("inverse"),
            AnalysisType::LowerCase => return f.write_str("lower_case"),
            AnalysisType::Chain(children) => ("chain", children),
            AnalysisType::Composite(children) => ("composite", children),
        };

        write!(f, "{name}(")?;
        for (i, child) in children.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{child}")?;
        }
        f.write_str(")")
    }
}
