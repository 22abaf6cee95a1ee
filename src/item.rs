use crate::encoder::Encoder;

/// Opaque code for one `attribute=value` pair. Codes are dense and start
/// at zero, in the order the encoder first saw each pair.
#[derive(Copy, Clone, Hash, PartialOrd, PartialEq, Eq, Ord, Debug)]
pub struct Item {
    id: u32,
}

impl Item {
    pub fn with_id(id: u32) -> Item {
        Item { id }
    }
    pub fn as_index(&self) -> usize {
        self.id as usize
    }
    // Labels are emitted in code order, which is first-seen order, so
    // attributes come out in the dataset's column order.
    pub fn item_vec_to_string(items: &[Item], encoder: &Encoder) -> String {
        items
            .iter()
            .map(|&item| encoder.label_of(item))
            .collect::<Vec<&str>>()
            .join(" ")
    }
}
