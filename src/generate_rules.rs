use crate::error::{Error, Result};
use crate::itemset::Itemset;
use crate::matrix::TransactionMatrix;
use itertools::Itertools;
use std::hash::{Hash, Hasher};

/// An association rule `antecedent => consequent`, scored with the
/// confidence and combined-itemset support it was accepted with.
#[derive(Clone, Debug)]
pub struct Rule {
    antecedent: Itemset,
    consequent: Itemset,
    confidence: f64,
    support: usize,
}

impl PartialEq for Rule {
    fn eq(&self, other: &Rule) -> bool {
        self.antecedent == other.antecedent && self.consequent == other.consequent
    }
}

// Can't derive Eq as f64 doesn't satisfy Eq.
impl Eq for Rule {}

impl Hash for Rule {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.antecedent.hash(state);
        self.consequent.hash(state);
    }
}

impl Rule {
    /// Creates a Rule from (antecedent, consequent) if its confidence is at
    /// least `min_confidence`; `Ok(None)` means the rule was filtered out.
    /// Sides must be non-empty and disjoint.
    pub fn make(
        antecedent: Itemset,
        consequent: Itemset,
        matrix: &TransactionMatrix,
        min_confidence: f64,
    ) -> Result<Option<Rule>> {
        if antecedent.is_empty() || consequent.is_empty() {
            return Err(Error::MalformedRule);
        }
        if !antecedent.is_disjoint(&consequent) {
            return Err(Error::MalformedRule);
        }

        let combined = antecedent.union(&consequent);
        let combined_support = matrix.support(&combined)?;
        let antecedent_support = matrix.support(&antecedent)?;
        if antecedent_support == 0 {
            return Err(Error::ZeroAntecedentSupport);
        }

        let confidence = combined_support as f64 / antecedent_support as f64;
        if confidence < min_confidence {
            return Ok(None);
        }

        Ok(Some(Rule {
            antecedent,
            consequent,
            confidence,
            support: combined_support,
        }))
    }

    pub fn antecedent(&self) -> &Itemset {
        &self.antecedent
    }

    pub fn consequent(&self) -> &Itemset {
        &self.consequent
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    /// Support of antecedent ∪ consequent, as a transaction count.
    pub fn support(&self) -> usize {
        self.support
    }

    pub fn to_string(&self, matrix: &TransactionMatrix) -> Result<String> {
        let mut a: Vec<&str> = self
            .antecedent
            .items()
            .iter()
            .map(|&item| matrix.column_name(item))
            .collect::<Result<_>>()?;
        a.sort_unstable();
        let mut b: Vec<&str> = self
            .consequent
            .items()
            .iter()
            .map(|&item| matrix.column_name(item))
            .collect::<Result<_>>()?;
        b.sort_unstable();
        Ok(format!("{} => {}", a.iter().join(" "), b.iter().join(" ")))
    }
}

/// Enumerates the rule splits of an itemset: for each item, the
/// (rest => item) and (item => rest) pair, in item order. An itemset of
/// size n >= 2 yields exactly 2n splits; a single item yields none.
/// Consequents larger than one item (for the forward direction) are out of
/// scope by design.
pub fn rules_from_itemset(itemset: &Itemset) -> Result<Vec<(Itemset, Itemset)>> {
    if itemset.is_empty() {
        return Err(Error::EmptyItemset);
    }

    let mut splits = Vec::new();
    if itemset.len() < 2 {
        return Ok(splits);
    }
    for &item in itemset {
        let (rest, single) = itemset.split_out_item(item);
        splits.push((rest.clone(), single.clone()));
        splits.push((single, rest));
    }
    Ok(splits)
}

/// Generates the rules of every frequent itemset, scores their confidence
/// against the matrix, and keeps those meeting `min_confidence`. Output
/// order follows itemset order, then split order within each itemset.
pub fn generate_rules(
    itemsets: &[Itemset],
    matrix: &TransactionMatrix,
    min_confidence: f64,
) -> Result<Vec<Rule>> {
    let mut rules: Vec<Rule> = Vec::new();
    for itemset in itemsets {
        for (antecedent, consequent) in rules_from_itemset(itemset)? {
            if let Some(rule) = Rule::make(antecedent, consequent, matrix, min_confidence)? {
                rules.push(rule);
            }
        }
    }
    Ok(rules)
}
