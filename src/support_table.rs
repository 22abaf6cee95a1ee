use crate::itemset::Itemset;
use fnv::FnvHashMap;

/// Support count of every itemset counted during a mining run, whether or
/// not it cleared the support threshold. Append-only: once an itemset's
/// count is recorded it never changes.
#[derive(Clone, Debug, PartialEq)]
pub struct SupportTable {
    counter: FnvHashMap<Itemset, u32>,
    num_transactions: usize,
}

impl SupportTable {
    pub fn new(num_transactions: usize) -> SupportTable {
        SupportTable {
            counter: FnvHashMap::default(),
            num_transactions,
        }
    }

    pub fn record(&mut self, itemset: Itemset, count: u32) {
        let existing = *self.counter.entry(itemset).or_insert(count);
        debug_assert_eq!(existing, count, "itemset recounted with a different total");
    }

    pub fn get(&self, itemset: &Itemset) -> Option<u32> {
        self.counter.get(itemset).cloned()
    }

    pub fn ratio(&self, count: u32) -> f64 {
        (count as f64) / (self.num_transactions as f64)
    }

    pub fn num_transactions(&self) -> usize {
        self.num_transactions
    }

    pub fn len(&self) -> usize {
        self.counter.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.counter.is_empty()
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = (&Itemset, u32)> {
        self.counter.iter().map(|(itemset, &count)| (itemset, count))
    }
}

#[cfg(test)]
mod tests {
    use super::SupportTable;
    use crate::item::Item;
    use crate::itemset::Itemset;

    #[test]
    fn test_record_and_lookup() {
        let mut table = SupportTable::new(4);
        let a = Itemset::singleton(Item::with_id(0));
        let ab = Itemset::new(vec![Item::with_id(1), Item::with_id(0)]);
        table.record(a.clone(), 3);
        table.record(ab.clone(), 2);
        table.record(a.clone(), 3);

        assert_eq!(table.len(), 2);
        assert_eq!(table.get(&a), Some(3));
        assert_eq!(table.get(&ab).map(|c| table.ratio(c)), Some(0.5));
        assert_eq!(table.get(&Itemset::singleton(Item::with_id(7))), None);
        assert_eq!(table.ratio(1), 0.25);
    }
}
