use crate::error::{Error, Result};
use crate::generate_rules::{generate_rules, Rule};
use crate::matrix::TransactionMatrix;
use crate::miner::frequent_itemsets;
use tracing::info;

/// Mining thresholds, validated once at construction and immutable after.
#[derive(Clone, Copy, Debug)]
pub struct MinerConfig {
    min_support: usize,
    min_confidence: f64,
}

impl MinerConfig {
    /// `min_support` is an absolute transaction count; `min_confidence`
    /// must be a finite value in [0,1].
    pub fn new(min_support: usize, min_confidence: f64) -> Result<MinerConfig> {
        if !min_confidence.is_finite() || !(0.0..=1.0).contains(&min_confidence) {
            return Err(Error::InvalidConfidenceThreshold(min_confidence));
        }
        Ok(MinerConfig {
            min_support,
            min_confidence,
        })
    }

    pub fn min_support(&self) -> usize {
        self.min_support
    }

    pub fn min_confidence(&self) -> f64 {
        self.min_confidence
    }
}

/// The mining engine: frequent-itemset search followed by rule generation
/// and confidence filtering, all against one read-only matrix.
pub struct RuleMiner {
    config: MinerConfig,
}

impl RuleMiner {
    pub fn new(config: MinerConfig) -> RuleMiner {
        RuleMiner { config }
    }

    /// Mines the association rules of `matrix` whose support and confidence
    /// meet the configured thresholds. Pure: identical inputs give
    /// identical output, and an empty result is a valid outcome.
    pub fn mine(&self, matrix: &TransactionMatrix) -> Result<Vec<Rule>> {
        let itemsets = frequent_itemsets(matrix, self.config.min_support)?;
        info!(
            count = itemsets.len(),
            size = itemsets.first().map_or(0, |itemset| itemset.len()),
            "frequent itemset search complete"
        );

        let rules = generate_rules(&itemsets, matrix, self.config.min_confidence)?;
        info!(count = rules.len(), "rule generation complete");
        Ok(rules)
    }
}
