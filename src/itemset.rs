use crate::item::Item;
use crate::vec_sets::{difference, union};
use std::cmp;

/// A set of items in canonical (ascending, duplicate free) order, so two
/// itemsets with the same members compare and hash equal.
#[derive(Clone, Hash, PartialEq, Eq, Debug)]
pub struct Itemset {
    items: Vec<Item>,
}

// Shorter itemsets first, then lexicographic by item code.
impl Ord for Itemset {
    fn cmp(&self, other: &Itemset) -> cmp::Ordering {
        self.len()
            .cmp(&other.len())
            .then_with(|| self.items.cmp(&other.items))
    }
}

impl PartialOrd for Itemset {
    fn partial_cmp(&self, other: &Itemset) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Itemset {
    #[cfg(test)]
    pub fn new(items: Vec<Item>) -> Itemset {
        use itertools::Itertools;
        Itemset {
            items: items.into_iter().sorted().dedup().collect(),
        }
    }

    pub fn singleton(item: Item) -> Itemset {
        Itemset { items: vec![item] }
    }

    // Callers must already hold items in canonical order.
    fn from_sorted(items: Vec<Item>) -> Itemset {
        debug_assert!(items.windows(2).all(|w| w[0] < w[1]));
        Itemset { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn union(&self, other: &Itemset) -> Itemset {
        Itemset::from_sorted(union(&self.items, &other.items))
    }

    pub fn difference(&self, other: &Itemset) -> Itemset {
        Itemset::from_sorted(difference(&self.items, &other.items))
    }

    // Subset of the items picked by the set bits of mask; bit i selects
    // the i-th item in canonical order.
    pub fn subset_by_mask(&self, mask: u64) -> Itemset {
        let items = self
            .items
            .iter()
            .enumerate()
            .filter(|&(i, _)| mask & (1u64 << i) != 0)
            .map(|(_, &item)| item)
            .collect();
        Itemset::from_sorted(items)
    }

    // Apriori join. Two k-itemsets combine when they agree on their first
    // k-1 items and self's last item sorts strictly before other's. The
    // result then has exactly k+1 items; anything else is a false join.
    pub fn join(&self, other: &Itemset) -> Option<Itemset> {
        let k = self.len();
        if k == 0 || other.len() != k {
            return None;
        }
        if self.items[..k - 1] != other.items[..k - 1] {
            return None;
        }
        if self.items[k - 1] >= other.items[k - 1] {
            return None;
        }
        let candidate = self.union(other);
        if candidate.len() != k + 1 {
            return None;
        }
        Some(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::Itemset;
    use crate::item::Item;

    fn itemset(ids: &[u32]) -> Itemset {
        Itemset::new(ids.iter().map(|&i| Item::with_id(i)).collect())
    }

    #[test]
    fn test_canonical_order() {
        assert_eq!(itemset(&[3, 1, 2]), itemset(&[1, 2, 3]));
        assert_eq!(itemset(&[2, 2, 1]).items(), itemset(&[1, 2]).items());
        assert!(itemset(&[9]) < itemset(&[1, 2]));
        assert!(itemset(&[1, 2]) < itemset(&[1, 3]));
    }

    #[test]
    fn test_join() {
        // Shared prefix, ordered tails.
        assert_eq!(itemset(&[1, 2]).join(&itemset(&[1, 3])), Some(itemset(&[1, 2, 3])));
        assert_eq!(itemset(&[1]).join(&itemset(&[4])), Some(itemset(&[1, 4])));
        // Tails in the wrong order or equal.
        assert_eq!(itemset(&[1, 3]).join(&itemset(&[1, 2])), None);
        assert_eq!(itemset(&[1, 2]).join(&itemset(&[1, 2])), None);
        // Prefixes differ: union would have 4 items.
        assert_eq!(itemset(&[1, 2]).join(&itemset(&[3, 4])), None);
        // Prefixes differ even though the union has k+1 items.
        assert_eq!(itemset(&[1, 3]).join(&itemset(&[2, 3])), None);
        // Mismatched sizes.
        assert_eq!(itemset(&[1]).join(&itemset(&[1, 2])), None);
    }

    #[test]
    fn test_subset_by_mask() {
        let set = itemset(&[4, 7, 9]);
        assert_eq!(set.subset_by_mask(0b001), itemset(&[4]));
        assert_eq!(set.subset_by_mask(0b110), itemset(&[7, 9]));
        assert_eq!(set.subset_by_mask(0b111), set);
        assert!(set.subset_by_mask(0).is_empty());
    }

    #[test]
    fn test_difference() {
        let set = itemset(&[4, 7, 9]);
        assert_eq!(set.difference(&itemset(&[7])), itemset(&[4, 9]));
        assert_eq!(set.difference(&set), itemset(&[]));
    }
}
