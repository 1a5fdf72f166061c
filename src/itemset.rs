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

use crate::item::Item;

/// An unordered, duplicate-free set of items, stored sorted so that
/// equality, hashing and dedup are order-independent.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Itemset {
    items: Vec<Item>,
}

impl Itemset {
    pub fn new(mut items: Vec<Item>) -> Itemset {
        items.sort();
        items.dedup();
        Itemset { items }
    }

    pub fn singleton(item: Item) -> Itemset {
        Itemset { items: vec![item] }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn contains(&self, item: Item) -> bool {
        self.items.binary_search(&item).is_ok()
    }

    pub fn union(&self, other: &Itemset) -> Itemset {
        let a = &self.items;
        let b = &other.items;

        // Count the length required in the union, to avoid
        // paying for reallocations while pushing onto the end.
        let mut count = 0;
        let mut ap = 0;
        let mut bp = 0;
        while ap < a.len() && bp < b.len() {
            if a[ap] < b[bp] {
                ap += 1;
            } else if b[bp] < a[ap] {
                bp += 1;
            } else {
                ap += 1;
                bp += 1;
            }
            count += 1;
        }
        count += a.len() - ap;
        count += b.len() - bp;

        let mut c: Vec<Item> = Vec::with_capacity(count);
        let mut ap = 0;
        let mut bp = 0;
        while ap < a.len() && bp < b.len() {
            if a[ap] < b[bp] {
                c.push(a[ap]);
                ap += 1;
            } else if b[bp] < a[ap] {
                c.push(b[bp]);
                bp += 1;
            } else {
                c.push(a[ap]);
                ap += 1;
                bp += 1;
            }
        }
        c.extend_from_slice(&a[ap..]);
        c.extend_from_slice(&b[bp..]);

        // Inputs are sorted and deduped, so the merge output is too.
        Itemset { items: c }
    }

    pub fn is_disjoint(&self, other: &Itemset) -> bool {
        let a = &self.items;
        let b = &other.items;
        let mut ap = 0;
        let mut bp = 0;
        while ap < a.len() && bp < b.len() {
            if a[ap] < b[bp] {
                ap += 1;
            } else if b[bp] < a[ap] {
                bp += 1;
            } else {
                return false;
            }
        }
        true
    }

    /// Splits into (everything but `item`, just `item`).
    pub fn split_out_item(&self, item: Item) -> (Itemset, Itemset) {
        let rest: Vec<Item> = self.items.iter().filter(|&&x| x != item).cloned().collect();
        (Itemset { items: rest }, Itemset::singleton(item))
    }
}

impl<'a> IntoIterator for &'a Itemset {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;
    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
