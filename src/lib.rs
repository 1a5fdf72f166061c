//! Apriori association rule mining over market-basket data.
//!
//! The engine works on a [`TransactionMatrix`], a boolean item-presence
//! table, in four stages: support counting, level-wise frequent-itemset
//! search, per-itemset rule enumeration, and confidence filtering.
//! [`RuleMiner`] composes them behind validated thresholds:
//!
//! ```
//! use rule_miner::{MinerConfig, RuleMiner, TransactionMatrix};
//!
//! let mut matrix = TransactionMatrix::new();
//! matrix.add_transaction(&["bread", "butter"]);
//! matrix.add_transaction(&["bread", "butter", "jam"]);
//! matrix.add_transaction(&["bread"]);
//!
//! let miner = RuleMiner::new(MinerConfig::new(2, 0.5)?);
//! for rule in miner.mine(&matrix)? {
//!     println!("{}", rule.to_string(&matrix)?);
//! }
//! # Ok::<(), rule_miner::Error>(())
//! ```

pub mod error;
pub mod generate_rules;
pub mod item;
pub mod itemset;
pub mod matrix;
pub mod miner;
pub mod rule_miner;

pub use error::{Error, Result};
pub use generate_rules::Rule;
pub use item::Item;
pub use itemset::Itemset;
pub use matrix::TransactionMatrix;
pub use miner::frequent_itemsets;
pub use rule_miner::{MinerConfig, RuleMiner};
