use crate::dataset::Dataset;
use crate::item::Item;
use crate::transaction::Transaction;
use fnv::FnvHashMap;

/// Maps `attribute=value` labels to item codes and back. Codes are handed
/// out in first-seen order and never change during a run.
pub struct Encoder {
    label_to_item: FnvHashMap<String, Item>,
    item_to_label: Vec<String>,
}

impl Encoder {
    pub fn new() -> Encoder {
        Encoder {
            label_to_item: FnvHashMap::default(),
            item_to_label: vec![],
        }
    }

    pub fn id_of(&mut self, label: &str) -> Item {
        if let Some(item) = self.label_to_item.get(label) {
            return *item;
        }
        let item = Item::with_id(self.item_to_label.len() as u32);
        self.label_to_item.insert(String::from(label), item);
        self.item_to_label.push(String::from(label));
        item
    }

    pub fn label_of(&self, item: Item) -> &str {
        &self.item_to_label[item.as_index()]
    }

    pub fn num_items(&self) -> usize {
        self.item_to_label.len()
    }

    // Every code assigned so far, in code order.
    pub fn items(&self) -> impl Iterator<Item = Item> {
        (0..self.item_to_label.len() as u32).map(Item::with_id)
    }

    pub fn encode_record<S: AsRef<str>>(
        &mut self,
        attribute_names: &[S],
        values: &[S],
    ) -> Transaction {
        let items = attribute_names
            .iter()
            .zip(values.iter())
            .map(|(name, value)| self.id_of(&format!("{}={}", name.as_ref(), value.as_ref())))
            .collect();
        Transaction::new(items)
    }

    // Records are scanned in input order, so codes follow first appearance.
    pub fn encode_dataset(&mut self, dataset: &Dataset) -> Vec<Transaction> {
        dataset
            .records
            .iter()
            .map(|record| self.encode_record(&dataset.attribute_names, record))
            .collect()
    }
}

#[cfg(test)]
pub mod fixtures {
    use super::Encoder;
    use crate::itemset::Itemset;
    use crate::transaction::Transaction;

    // Encodes rows of bare labels, one item per label.
    pub fn transactions_of(rows: &[&[&str]]) -> (Encoder, Vec<Transaction>) {
        let mut encoder = Encoder::new();
        let transactions: Vec<Transaction> = rows
            .iter()
            .map(|row| Transaction::new(row.iter().map(|s| encoder.id_of(s)).collect()))
            .collect();
        (encoder, transactions)
    }

    pub fn itemset_of(encoder: &mut Encoder, labels: &[&str]) -> Itemset {
        Itemset::new(labels.iter().map(|s| encoder.id_of(s)).collect())
    }
}
