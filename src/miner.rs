// Copyright 2018 Chris Pearce
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::error::Result;
use crate::itemset::Itemset;
use crate::matrix::TransactionMatrix;
use fnv::FnvHashSet;
use itertools::Itertools;
use rayon::prelude::*;
use tracing::debug;

/// Level-wise Apriori search. Starts from one size-1 itemset per column and
/// grows itemsets one item at a time, discarding candidates whose support
/// drops below `min_support`. Returns the last level at which anything was
/// frequent, so all returned itemsets have the same, maximal, size.
pub fn frequent_itemsets(
    matrix: &TransactionMatrix,
    min_support: usize,
) -> Result<Vec<Itemset>> {
    let mut frequent: Vec<Itemset> = Vec::new();
    let mut candidates: Vec<Itemset> = matrix.items().map(Itemset::singleton).collect();

    while !candidates.is_empty() {
        // Support counts are independent reads; rayon's collect keeps them
        // in candidate order, so the merge below stays deterministic.
        let supports = candidates
            .par_iter()
            .map(|itemset| matrix.support(itemset))
            .collect::<Result<Vec<usize>>>()?;

        let survivors: Vec<Itemset> = candidates
            .iter()
            .zip(&supports)
            .filter(|&(_, &support)| support >= min_support)
            .map(|(itemset, _)| itemset.clone())
            .collect();

        if survivors.is_empty() {
            // Nothing frequent at this size; the previous level is the answer.
            return Ok(frequent);
        }

        debug!(
            size = survivors[0].len(),
            count = survivors.len(),
            "frequent itemset level complete"
        );

        candidates = merge_itemsets(&survivors);
        frequent = survivors;
    }

    Ok(frequent)
}

/// Pairwise unions of one level's frequent itemsets, keeping unions that are
/// exactly one item larger than their inputs. Duplicate unions arising from
/// different pairs are emitted once, compared by canonical sorted form.
/// Pairs are visited in ascending index order so the output is reproducible.
fn merge_itemsets(itemsets: &[Itemset]) -> Vec<Itemset> {
    let target_size = match itemsets.first() {
        Some(itemset) => itemset.len() + 1,
        None => return Vec::new(),
    };

    let mut seen: FnvHashSet<Itemset> = FnvHashSet::default();
    let mut merged: Vec<Itemset> = Vec::new();
    for (a, b) in itemsets.iter().tuple_combinations() {
        let union = a.union(b);
        if union.len() == target_size && seen.insert(union.clone()) {
            merged.push(union);
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::{frequent_itemsets, merge_itemsets};
    use crate::itemset::Itemset;
    use crate::matrix::TransactionMatrix;

    fn to_itemset(matrix: &TransactionMatrix, names: &[&str]) -> Itemset {
        Itemset::new(
            names
                .iter()
                .map(|name| matrix.item(name).unwrap())
                .collect(),
        )
    }

    fn basket_matrix() -> TransactionMatrix {
        // Rows: {a,b}, {a,b,c}, {a}, {b,c}.
        let mut matrix = TransactionMatrix::new();
        matrix.add_transaction(&["a", "b"]);
        matrix.add_transaction(&["a", "b", "c"]);
        matrix.add_transaction(&["a"]);
        matrix.add_transaction(&["b", "c"]);
        matrix
    }

    #[test]
    fn test_returns_last_frequent_level() {
        let matrix = basket_matrix();
        // {a,b} and {b,c} both have support 2; {a,b,c} has support 1, so
        // the size-2 level is the final answer.
        let frequent = frequent_itemsets(&matrix, 2).unwrap();
        assert_eq!(
            frequent,
            vec![
                to_itemset(&matrix, &["a", "b"]),
                to_itemset(&matrix, &["b", "c"]),
            ]
        );
    }

    #[test]
    fn test_threshold_is_closed_lower_bound() {
        let matrix = basket_matrix();
        // support({a,b}) == 2: included at threshold 2, excluded at 3.
        let at = frequent_itemsets(&matrix, 2).unwrap();
        assert!(at.contains(&to_itemset(&matrix, &["a", "b"])));

        let above = frequent_itemsets(&matrix, 3).unwrap();
        assert_eq!(
            above,
            vec![to_itemset(&matrix, &["a"]), to_itemset(&matrix, &["b"])]
        );
    }

    #[test]
    fn test_threshold_above_row_count_yields_empty() {
        let matrix = basket_matrix();
        assert_eq!(frequent_itemsets(&matrix, 5).unwrap(), vec![]);
    }

    #[test]
    fn test_zero_columns_yields_empty() {
        let matrix = TransactionMatrix::new();
        assert_eq!(frequent_itemsets(&matrix, 0).unwrap(), vec![]);
    }

    #[test]
    fn test_zero_threshold_reaches_full_column_set() {
        let matrix = basket_matrix();
        // Every candidate passes, so the search only stops once the merge
        // step can no longer grow: the full column set.
        let frequent = frequent_itemsets(&matrix, 0).unwrap();
        assert_eq!(frequent, vec![to_itemset(&matrix, &["a", "b", "c"])]);
    }

    #[test]
    fn test_merge_dedups_and_sizes() {
        let matrix = basket_matrix();
        let level_two = vec![
            to_itemset(&matrix, &["a", "b"]),
            to_itemset(&matrix, &["a", "c"]),
            to_itemset(&matrix, &["b", "c"]),
        ];
        // All three pairs union to {a,b,c}; it must be emitted exactly once.
        let merged = merge_itemsets(&level_two);
        assert_eq!(merged, vec![to_itemset(&matrix, &["a", "b", "c"])]);
    }

    #[test]
    fn test_merge_discards_oversized_unions() {
        let mut matrix = TransactionMatrix::new();
        matrix.add_transaction(&["a", "b", "c", "d"]);
        let level_two = vec![
            to_itemset(&matrix, &["a", "b"]),
            to_itemset(&matrix, &["c", "d"]),
        ];
        // The only union has size 4, not 3.
        assert_eq!(merge_itemsets(&level_two), vec![]);
    }

    #[test]
    fn test_deterministic_across_runs() {
        let matrix = basket_matrix();
        let first = frequent_itemsets(&matrix, 2).unwrap();
        let second = frequent_itemsets(&matrix, 2).unwrap();
        assert_eq!(first, second);
    }
}
