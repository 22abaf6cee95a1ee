use crate::apriori::Mined;
use crate::itemset::Itemset;
use crate::rule::Rule;
use crate::support_table::SupportTable;
use crate::transaction::{count_support, Transaction};
use fnv::FnvHashSet;
use log::{debug, warn};
use rayon::prelude::*;

// Masks are u64, so larger itemsets can't be split. Nothing near this size
// is enumerable anyway.
const MAX_SPLIT_ITEMSET_LEN: usize = 63;

// All rules premise ==> itemset \ premise for the non-empty proper subsets
// of itemset, in mask order.
fn rules_from_itemset(
    itemset: &Itemset,
    table: &SupportTable,
    transactions: &[Transaction],
    min_confidence: f64,
) -> Vec<Rule> {
    let itemset_count = match table.get(itemset) {
        Some(count) => count,
        None => count_support(transactions, itemset),
    };
    let full: u64 = (1u64 << itemset.len()) - 1;
    let mut rules: Vec<Rule> = vec![];
    for mask in 1..full {
        let premise = itemset.subset_by_mask(mask);
        // Apriori counts every subset of a frequent itemset on the way up,
        // but fall back to a scan if the premise was never counted.
        let premise_count = match table.get(&premise) {
            Some(count) => count,
            None => {
                debug!("Recounting premise {:?}", premise);
                count_support(transactions, &premise)
            }
        };
        if let Some(rule) = Rule::make(
            premise,
            premise_count,
            itemset,
            itemset_count,
            table.num_transactions(),
            min_confidence,
        ) {
            rules.push(rule);
        }
    }
    rules
}

// Rules are built only from itemsets that cleared min_support, not from
// every itemset the miner counted. Output order follows the miner's level
// order, so it is the same from run to run.
pub fn generate_rules(
    mined: &Mined,
    transactions: &[Transaction],
    min_confidence: f64,
) -> Vec<Rule> {
    let itemsets: Vec<&Itemset> = mined
        .frequent_itemsets()
        .filter(|itemset| itemset.len() > 1)
        .filter(|itemset| {
            if itemset.len() > MAX_SPLIT_ITEMSET_LEN {
                warn!("Skipping rules for itemset of {} items", itemset.len());
                return false;
            }
            true
        })
        .collect();

    let candidates: Vec<Rule> = itemsets
        .par_iter()
        .flat_map(|itemset| rules_from_itemset(itemset, &mined.table, transactions, min_confidence))
        .collect();

    // Different itemsets can't produce the same (premise, implication)
    // pair, but keep the result a set regardless.
    let mut seen: FnvHashSet<Rule> = FnvHashSet::default();
    let mut rules: Vec<Rule> = Vec::with_capacity(candidates.len());
    for rule in candidates {
        if seen.insert(rule.clone()) {
            rules.push(rule);
        }
    }
    rules
}
