use crate::apriori::mine;
use crate::generate_rules::generate_rules;
use crate::item::Item;
use crate::transaction::Transaction;
use log::info;
use std::time::Instant;

/// Timings of one mining run in the sweep.
#[derive(Clone, Debug)]
pub struct SweepPoint {
    pub min_support: f64,
    pub mining_seconds: f64,
    pub rule_seconds: f64,
    pub num_itemsets: usize,
    pub num_rules: usize,
}

// Supports 0.1 through 1.0, computed from integers so 1.0 is hit exactly.
pub fn sweep_supports() -> Vec<f64> {
    (1..=10u32).map(|i| f64::from(i) / 10.0).collect()
}

// Mines and generates rules once per support in sweep_supports(), timing
// the two stages separately.
pub fn runtime_sweep(
    items: &[Item],
    transactions: &[Transaction],
    min_confidence: f64,
) -> Vec<SweepPoint> {
    sweep_supports()
        .into_iter()
        .map(|min_support| {
            let timer = Instant::now();
            let mined = mine(items.iter().cloned(), transactions, min_support);
            let mining_seconds = timer.elapsed().as_secs_f64();

            let timer = Instant::now();
            let rules = generate_rules(&mined, transactions, min_confidence);
            let rule_seconds = timer.elapsed().as_secs_f64();

            info!(
                "Sweep at support {:.1}: {} itemsets in {:.6}s, {} rules in {:.6}s",
                min_support,
                mined.num_frequent(),
                mining_seconds,
                rules.len(),
                rule_seconds
            );
            SweepPoint {
                min_support,
                mining_seconds,
                rule_seconds,
                num_itemsets: mined.num_frequent(),
                num_rules: rules.len(),
            }
        })
        .collect()
}
