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
use crate::itemset::Itemset;
use crate::support_table::SupportTable;
use crate::transaction::{count_support, Transaction};
use itertools::Itertools;
use log::debug;
use rayon::prelude::*;

/// Frequent itemsets of one size, in canonical order.
#[derive(Clone, Debug, PartialEq)]
pub struct Level {
    pub k: usize,
    pub frequent: Vec<Itemset>,
}

/// Result of a mining run. The table holds the count of every candidate
/// that was counted; `levels` holds only those that cleared min_support.
#[derive(Clone, Debug)]
pub struct Mined {
    pub table: SupportTable,
    pub levels: Vec<Level>,
}

impl Mined {
    pub fn frequent_itemsets(&self) -> impl Iterator<Item = &Itemset> {
        self.levels.iter().flat_map(|level| level.frequent.iter())
    }

    pub fn num_frequent(&self) -> usize {
        self.levels.iter().map(|level| level.frequent.len()).sum()
    }
}

// Counts every candidate against every transaction. Candidates are counted
// in parallel; each count is a full sequential scan, and nothing is written
// to the table until the whole level is done.
fn count_level(
    candidates: Vec<Itemset>,
    transactions: &[Transaction],
    table: &mut SupportTable,
    min_support: f64,
) -> Vec<Itemset> {
    let counts: Vec<u32> = candidates
        .par_iter()
        .map(|candidate| count_support(transactions, candidate))
        .collect();

    let mut frequent: Vec<Itemset> = vec![];
    for (candidate, count) in candidates.into_iter().zip(counts) {
        if table.ratio(count) >= min_support {
            frequent.push(candidate.clone());
        }
        table.record(candidate, count);
    }
    frequent
}

// Joins every pair of frequent k-itemsets that share their first k-1 items.
// Input must be in canonical order; output is too.
pub fn generate_candidates(frequent: &[Itemset]) -> Vec<Itemset> {
    frequent
        .iter()
        .tuple_combinations()
        .filter_map(|(a, b)| a.join(b))
        .sorted()
        .collect()
}

pub fn mine<I>(items: I, transactions: &[Transaction], min_support: f64) -> Mined
where
    I: IntoIterator<Item = Item>,
{
    let mut table = SupportTable::new(transactions.len());
    let mut levels: Vec<Level> = vec![];

    let mut candidates: Vec<Itemset> = items.into_iter().map(Itemset::singleton).sorted().collect();
    let mut k = 1;
    loop {
        let num_candidates = candidates.len();
        let frequent = count_level(candidates, transactions, &mut table, min_support);
        debug!(
            "L({}): {} candidates, {} frequent",
            k,
            num_candidates,
            frequent.len()
        );
        if frequent.is_empty() {
            break;
        }
        candidates = generate_candidates(&frequent);
        levels.push(Level { k, frequent });
        k += 1;
    }

    Mined { table, levels }
}
