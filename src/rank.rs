use crate::rule::Rule;
use ordered_float::OrderedFloat;
use std::cmp::Ordering;

type RankKey = (OrderedFloat<f64>, OrderedFloat<f64>, u32, u32);

fn rank_key(rule: &Rule) -> RankKey {
    (
        OrderedFloat(rule.confidence()),
        OrderedFloat(rule.support()),
        rule.implication_count(),
        rule.premise_count(),
    )
}

// Descending by confidence, then support, then implication count, then
// premise count.
pub fn compare(a: &Rule, b: &Rule) -> Ordering {
    rank_key(b).cmp(&rank_key(a))
}

// Stable, so rules equal on every key keep their generation order.
pub fn rank_rules(rules: &mut [Rule]) {
    rules.sort_by(compare);
}
