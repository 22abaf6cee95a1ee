use crate::encoder::Encoder;
use crate::item::Item;
use crate::itemset::Itemset;
use std::hash::{Hash, Hasher};

/// premise ==> implication, where the two sides partition one frequent
/// itemset. Identity is the (premise, implication) pair; the scores ride
/// along.
#[derive(Clone, Debug)]
pub struct Rule {
    premise: Itemset,
    premise_count: u32,
    implication: Itemset,
    implication_count: u32,
    confidence: f64,
    support: f64,
}

impl PartialEq for Rule {
    fn eq(&self, other: &Rule) -> bool {
        self.premise == other.premise && self.implication == other.implication
    }
}

// Can't derive Eq as f64 doesn't satisfy Eq.
impl Eq for Rule {}

impl Hash for Rule {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.premise.hash(state);
        self.implication.hash(state);
    }
}

impl Rule {
    // Creates the rule premise ==> itemset \ premise if its confidence is
    // at or above min_confidence. itemset_count is the support count of
    // the whole itemset, which is also the implication count shown in
    // reports.
    pub fn make(
        premise: Itemset,
        premise_count: u32,
        itemset: &Itemset,
        itemset_count: u32,
        num_transactions: usize,
        min_confidence: f64,
    ) -> Option<Rule> {
        let implication = itemset.difference(&premise);
        if premise.is_empty() || implication.is_empty() {
            return None;
        }
        // No rule can come from a premise no transaction contains.
        if premise_count == 0 || num_transactions == 0 {
            return None;
        }

        // support(itemset) / support(premise); the transaction count cancels.
        let support = (itemset_count as f64) / (num_transactions as f64);
        let confidence = (itemset_count as f64) / (premise_count as f64);
        if confidence < min_confidence {
            return None;
        }

        Some(Rule {
            premise,
            premise_count,
            implication,
            implication_count: itemset_count,
            confidence,
            support,
        })
    }

    pub fn premise(&self) -> &Itemset {
        &self.premise
    }

    pub fn implication(&self) -> &Itemset {
        &self.implication
    }

    pub fn premise_count(&self) -> u32 {
        self.premise_count
    }

    pub fn implication_count(&self) -> u32 {
        self.implication_count
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn support(&self) -> f64 {
        self.support
    }

    pub fn rounded_confidence(&self) -> f64 {
        round_half_up(self.confidence, 2)
    }

    pub fn rounded_support(&self) -> f64 {
        round_half_up(self.support, 2)
    }

    pub fn to_string(&self, encoder: &Encoder) -> String {
        format!(
            "{} {} ==> {} {}    <conf:({:.2})>    <sup:({:.2})>",
            Item::item_vec_to_string(self.premise().items(), encoder),
            self.premise_count,
            Item::item_vec_to_string(self.implication().items(), encoder),
            self.implication_count,
            self.rounded_confidence(),
            self.rounded_support()
        )
    }
}

// Only used for display; ranking compares the unrounded values.
pub fn round_half_up(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale + 0.5).floor() / scale
}
