use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// An itemset referenced an item that isn't a column of the matrix.
    #[error("item id {0} is not a column of the transaction matrix")]
    UnknownItem(u32),

    #[error("operation requires a non-empty itemset")]
    EmptyItemset,

    #[error("rule antecedent and consequent must be disjoint and non-empty")]
    MalformedRule,

    /// Confidence denominator was zero. Unreachable for rules derived from
    /// frequent itemsets, but surfaced explicitly rather than yielding NaN.
    #[error("antecedent has zero support, confidence is undefined")]
    ZeroAntecedentSupport,

    #[error("confidence threshold {0} is outside [0,1]")]
    InvalidConfidenceThreshold(f64),
}
