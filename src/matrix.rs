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

use crate::error::{Error, Result};
use crate::item::Item;
use crate::itemset::Itemset;
use fnv::FnvHashMap;

/// Boolean item-presence table: rows are transactions, columns are named
/// items. Stored column-wise as sorted transaction-id lists, which makes
/// support counting a k-way sorted list intersection.
pub struct TransactionMatrix {
    column_names: Vec<String>,
    name_to_item: FnvHashMap<String, Item>,
    tid_lists: Vec<Vec<usize>>,
    transaction_count: usize,
}

impl TransactionMatrix {
    pub fn new() -> TransactionMatrix {
        TransactionMatrix {
            column_names: Vec::new(),
            name_to_item: FnvHashMap::default(),
            tid_lists: Vec::new(),
            transaction_count: 0,
        }
    }

    /// Builds a matrix from explicit boolean rows.
    ///
    /// # Panics
    ///
    /// Every row must carry exactly one flag per column; a ragged row is a
    /// programming error at the construction site and panics.
    pub fn from_flags(columns: &[&str], rows: &[&[bool]]) -> TransactionMatrix {
        let mut matrix = TransactionMatrix::new();
        for &name in columns {
            matrix.intern(name);
        }
        for row in rows {
            assert_eq!(row.len(), columns.len());
            let tid = matrix.transaction_count;
            matrix.transaction_count += 1;
            for (index, &present) in row.iter().enumerate() {
                if present {
                    matrix.tid_lists[index].push(tid);
                }
            }
        }
        matrix
    }

    /// Appends one transaction given the names of the items present in it.
    /// Unseen names become new columns; duplicate names within the
    /// transaction are counted once.
    pub fn add_transaction(&mut self, item_names: &[&str]) {
        let tid = self.transaction_count;
        self.transaction_count += 1;
        let mut items: Vec<Item> = item_names.iter().map(|name| self.intern(name)).collect();
        items.sort();
        items.dedup();
        for item in items {
            self.tid_lists[item.as_index()].push(tid);
        }
    }

    fn intern(&mut self, name: &str) -> Item {
        if let Some(&item) = self.name_to_item.get(name) {
            return item;
        }
        let item = Item::with_id(self.column_names.len() as u32);
        self.column_names.push(String::from(name));
        self.name_to_item.insert(String::from(name), item);
        self.tid_lists.push(Vec::new());
        item
    }

    pub fn item(&self, name: &str) -> Option<Item> {
        self.name_to_item.get(name).cloned()
    }

    pub fn column_name(&self, item: Item) -> Result<&str> {
        self.column_names
            .get(item.as_index())
            .map(|name| name.as_str())
            .ok_or(Error::UnknownItem(item.id()))
    }

    /// All columns, in input order.
    pub fn items(&self) -> impl Iterator<Item = Item> + '_ {
        (0..self.column_names.len() as u32).map(Item::with_id)
    }

    pub fn column_count(&self) -> usize {
        self.column_names.len()
    }

    pub fn transaction_count(&self) -> usize {
        self.transaction_count
    }

    /// Whether `item` is present in transaction `row`.
    pub fn contains(&self, row: usize, item: Item) -> Result<bool> {
        let tids = self
            .tid_lists
            .get(item.as_index())
            .ok_or(Error::UnknownItem(item.id()))?;
        Ok(tids.binary_search(&row).is_ok())
    }

    /// Counts the transactions that contain every item of `itemset`.
    /// Errors if the itemset is empty or names a column this matrix lacks.
    pub fn support(&self, itemset: &Itemset) -> Result<usize> {
        if itemset.is_empty() {
            return Err(Error::EmptyItemset);
        }

        let mut tid_lists: Vec<&Vec<usize>> = Vec::with_capacity(itemset.len());
        for &item in itemset {
            let tids = self
                .tid_lists
                .get(item.as_index())
                .ok_or(Error::UnknownItem(item.id()))?;
            tid_lists.push(tids);
        }

        if tid_lists.len() == 1 {
            return Ok(tid_lists[0].len());
        }

        let mut p: Vec<usize> = vec![0; tid_lists.len()];

        // For each tid in the first item's list, check whether every other
        // item's list also contains it.
        let mut count = 0;
        for &tid in tid_lists[0].iter() {
            let mut tid_in_all_item_tid_lists = true;
            for i in 1..tid_lists.len() {
                while p[i] < tid_lists[i].len() && tid_lists[i][p[i]] < tid {
                    p[i] += 1;
                }
                if p[i] == tid_lists[i].len() || tid_lists[i][p[i]] != tid {
                    tid_in_all_item_tid_lists = false;
                    break;
                }
            }
            if tid_in_all_item_tid_lists {
                count += 1;
            }
        }

        Ok(count)
    }
}

impl Default for TransactionMatrix {
    fn default() -> Self {
        TransactionMatrix::new()
    }
}

#[cfg(test)]
mod tests {
    use super::TransactionMatrix;
    use crate::error::Error;
    use crate::item::Item;
    use crate::itemset::Itemset;

    fn to_itemset(matrix: &TransactionMatrix, names: &[&str]) -> Itemset {
        Itemset::new(
            names
                .iter()
                .map(|name| matrix.item(name).unwrap())
                .collect(),
        )
    }

    #[test]
    fn test_support() {
        let mut matrix = TransactionMatrix::new();
        let transactions = vec![
            vec!["a", "b", "c", "d", "e", "f"],
            vec!["g", "h", "i", "j", "k", "l"],
            vec!["z", "x"],
            vec!["z", "x"],
            vec!["z", "x", "y"],
            vec!["z", "x", "y", "i"],
        ];
        for line in &transactions {
            matrix.add_transaction(line);
        }

        for name in ["a", "b", "c", "d", "e", "f", "h", "j", "k", "l"] {
            assert_eq!(matrix.support(&to_itemset(&matrix, &[name])).unwrap(), 1);
        }
        assert_eq!(matrix.support(&to_itemset(&matrix, &["i"])).unwrap(), 2);
        assert_eq!(matrix.support(&to_itemset(&matrix, &["z"])).unwrap(), 4);
        assert_eq!(matrix.support(&to_itemset(&matrix, &["x"])).unwrap(), 4);
        assert_eq!(matrix.support(&to_itemset(&matrix, &["y"])).unwrap(), 2);
        assert_eq!(
            matrix.support(&to_itemset(&matrix, &["x", "z"])).unwrap(),
            4
        );
        assert_eq!(
            matrix
                .support(&to_itemset(&matrix, &["x", "y", "z"]))
                .unwrap(),
            2
        );
    }

    #[test]
    fn test_support_is_order_independent() {
        let mut matrix = TransactionMatrix::new();
        matrix.add_transaction(&["a", "b", "c"]);
        matrix.add_transaction(&["c", "a"]);
        matrix.add_transaction(&["b"]);

        let forward = to_itemset(&matrix, &["a", "c"]);
        let backward = to_itemset(&matrix, &["c", "a"]);
        assert_eq!(
            matrix.support(&forward).unwrap(),
            matrix.support(&backward).unwrap()
        );
        assert_eq!(matrix.support(&forward).unwrap(), 2);
    }

    #[test]
    fn test_row_permutation_preserves_support() {
        let columns = ["a", "b", "c"];
        let original = TransactionMatrix::from_flags(
            &columns,
            &[
                &[true, true, false],
                &[true, true, true],
                &[true, false, false],
            ],
        );
        let permuted = TransactionMatrix::from_flags(
            &columns,
            &[
                &[true, false, false],
                &[true, true, false],
                &[true, true, true],
            ],
        );
        let itemsets: &[&[&str]] = &[&["a"], &["a", "b"], &["a", "b", "c"]];
        for names in itemsets {
            assert_eq!(
                original.support(&to_itemset(&original, names)).unwrap(),
                permuted.support(&to_itemset(&permuted, names)).unwrap()
            );
        }
    }

    #[test]
    fn test_anti_monotonicity() {
        let mut matrix = TransactionMatrix::new();
        matrix.add_transaction(&["a", "b", "c"]);
        matrix.add_transaction(&["a", "b", "c"]);
        matrix.add_transaction(&["a", "b"]);
        matrix.add_transaction(&["a"]);

        let abc = to_itemset(&matrix, &["a", "b", "c"]);
        let abc_support = matrix.support(&abc).unwrap();
        let subsets: &[&[&str]] = &[&["a"], &["b"], &["c"], &["a", "b"], &["a", "c"], &["b", "c"]];
        for names in subsets {
            let support = matrix.support(&to_itemset(&matrix, names)).unwrap();
            assert!(support >= abc_support);
        }
    }

    #[test]
    fn test_contract_violations() {
        let mut matrix = TransactionMatrix::new();
        matrix.add_transaction(&["a"]);

        assert_eq!(
            matrix.support(&Itemset::new(vec![])),
            Err(Error::EmptyItemset)
        );
        assert_eq!(
            matrix.support(&Itemset::singleton(Item::with_id(7))),
            Err(Error::UnknownItem(7))
        );
    }

    #[test]
    #[should_panic]
    fn test_from_flags_rejects_ragged_row() {
        TransactionMatrix::from_flags(&["a", "b"], &[&[true, false], &[true]]);
    }

    #[test]
    fn test_cell_access() {
        let matrix = TransactionMatrix::from_flags(
            &["a", "b"],
            &[&[true, false], &[false, true]],
        );
        let a = matrix.item("a").unwrap();
        let b = matrix.item("b").unwrap();
        assert!(matrix.contains(0, a).unwrap());
        assert!(!matrix.contains(0, b).unwrap());
        assert!(!matrix.contains(1, a).unwrap());
        assert!(matrix.contains(1, b).unwrap());
    }
}
