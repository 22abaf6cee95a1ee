use crate::item::Item;
use crate::itemset::Itemset;
use crate::vec_sets::is_subset;

/// One encoded input record. Items are kept sorted so containment checks
/// are a single merge walk.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Transaction {
    items: Vec<Item>,
}

impl Transaction {
    pub fn new(mut items: Vec<Item>) -> Transaction {
        // Some input files repeat a value within a row. Remove any
        // duplicates here.
        items.sort();
        items.dedup();
        Transaction { items }
    }

    #[cfg(test)]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn contains(&self, itemset: &Itemset) -> bool {
        is_subset(itemset.items(), &self.items)
    }
}

/// Number of transactions that are supersets of itemset, by direct scan.
pub fn count_support(transactions: &[Transaction], itemset: &Itemset) -> u32 {
    transactions.iter().filter(|t| t.contains(itemset)).count() as u32
}

#[cfg(test)]
mod tests {
    use super::{count_support, Transaction};
    use crate::item::Item;
    use crate::itemset::Itemset;

    fn items(ids: &[u32]) -> Vec<Item> {
        ids.iter().map(|&i| Item::with_id(i)).collect()
    }

    #[test]
    fn test_new_sorts_and_dedupes() {
        let t = Transaction::new(items(&[5, 1, 5, 3, 1]));
        assert_eq!(t.items(), &items(&[1, 3, 5])[..]);
        assert_eq!(t.len(), 3);
        assert_eq!(t, Transaction::new(items(&[3, 5, 1])));
    }

    #[test]
    fn test_count_support() {
        let transactions = vec![
            Transaction::new(items(&[0, 1])),
            Transaction::new(items(&[0, 1, 2])),
            Transaction::new(items(&[0])),
            Transaction::new(items(&[1, 2])),
        ];
        assert_eq!(count_support(&transactions, &Itemset::new(items(&[0]))), 3);
        assert_eq!(count_support(&transactions, &Itemset::new(items(&[0, 1]))), 2);
        assert_eq!(count_support(&transactions, &Itemset::new(items(&[0, 2]))), 1);
        assert_eq!(count_support(&transactions, &Itemset::new(items(&[3]))), 0);
        // The empty itemset is contained in every transaction.
        assert_eq!(count_support(&transactions, &Itemset::new(vec![])), 4);
    }
}
