//! Nested item records and the list operations shared by every section kind

use super::fields::{item_record, FieldSlot, FieldValue, Record};
use super::ItemId;

/// A record stored in a section's `items` or `links` list
pub trait ItemRecord: Record + Clone {
    /// A record with the given id and every field empty
    fn blank(id: ItemId) -> Self;
    fn id(&self) -> ItemId;
    fn set_id(&mut self, id: ItemId);
}

/// Placeholder text written into a freshly added item, by field name
pub fn placeholder_for(field: &str) -> Option<&'static str> {
    match field {
        "title" => Some("New Item"),
        "description" => Some("New Description"),
        "question" => Some("New Question?"),
        "answer" => Some("New Answer"),
        "name" => Some("New Name"),
        "text" => Some("New Link"),
        "year" => Some("2025"),
        "alt" => Some("Project"),
        _ => None,
    }
}

/// Fields tried, in order, for an item's display label
const LABEL_FIELDS: &[&str] = &["title", "name", "question", "text", "label", "year", "alt"];

/// Move the element at `old_index` to `new_index`, keeping the others in order.
///
/// Returns false and leaves the list alone when either index is out of range.
pub fn move_element<T>(list: &mut Vec<T>, old_index: usize, new_index: usize) -> bool {
    if old_index >= list.len() || new_index >= list.len() {
        return false;
    }
    if old_index != new_index {
        let element = list.remove(old_index);
        list.insert(new_index, element);
    }
    true
}

/// Operations on an item list, independent of the record type
pub trait ItemCollection {
    fn item_count(&self) -> usize;

    fn item_ids(&self) -> Vec<ItemId>;

    fn item_field(&self, id: ItemId, field: &str) -> Option<FieldValue>;

    /// Label shown for the item at `index` in structure editors
    fn item_label(&self, index: usize) -> Option<String>;

    /// Clone the first record with a fresh id and placeholder text
    fn add_from_first(&mut self) -> Option<ItemId>;

    fn remove_item(&mut self, id: ItemId) -> bool;

    fn update_item(&mut self, id: ItemId, field: &str, value: FieldValue) -> bool;

    fn reorder_items(&mut self, old_index: usize, new_index: usize) -> bool;
}

impl<T: ItemRecord> ItemCollection for Vec<T> {
    fn item_count(&self) -> usize {
        self.len()
    }

    fn item_ids(&self) -> Vec<ItemId> {
        self.iter().map(ItemRecord::id).collect()
    }

    fn item_field(&self, id: ItemId, field: &str) -> Option<FieldValue> {
        self.iter().find(|item| item.id() == id)?.field(field)
    }

    fn item_label(&self, index: usize) -> Option<String> {
        let item = self.get(index)?;
        let label = LABEL_FIELDS
            .iter()
            .filter_map(|name| item.field(name))
            .find_map(|value| value.as_text().filter(|s| !s.is_empty()).map(str::to_string));
        Some(label.unwrap_or_else(|| format!("Item {}", index + 1)))
    }

    fn add_from_first(&mut self) -> Option<ItemId> {
        let mut item = self.first()?.clone();
        let id = ItemId::new();
        item.set_id(id);
        for name in T::FIELDS {
            if let Some(placeholder) = placeholder_for(name) {
                item.set_field(name, FieldValue::text(placeholder));
            }
        }
        self.push(item);
        Some(id)
    }

    fn remove_item(&mut self, id: ItemId) -> bool {
        let before = self.len();
        self.retain(|item| item.id() != id);
        self.len() != before
    }

    fn update_item(&mut self, id: ItemId, field: &str, value: FieldValue) -> bool {
        match self.iter_mut().find(|item| item.id() == id) {
            Some(item) => item.set_field(field, value),
            None => false,
        }
    }

    fn reorder_items(&mut self, old_index: usize, new_index: usize) -> bool {
        move_element(self, old_index, new_index)
    }
}

/// Item lists can be replaced wholesale from field rows; each row gets a fresh id
impl<T: ItemRecord> FieldSlot for Vec<T> {
    fn to_value(&self) -> FieldValue {
        FieldValue::Records(
            self.iter()
                .map(|item| {
                    T::FIELDS
                        .iter()
                        .filter_map(|name| item.field(name).map(|v| (name.to_string(), v)))
                        .collect()
                })
                .collect(),
        )
    }

    fn assign(&mut self, value: FieldValue) -> bool {
        let rows = match value {
            FieldValue::Records(rows) => rows,
            FieldValue::List(list) if list.is_empty() => Vec::new(),
            _ => return false,
        };
        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            let mut item = T::blank(ItemId::new());
            if item.apply_fields(&row).is_err() {
                return false;
            }
            items.push(item);
        }
        *self = items;
        true
    }
}

item_record! {
    /// A navigation link
    pub struct NavLink {
        pub text: String,
        pub href: String,
    }
}

item_record! {
    /// Feature or process step: title plus description
    pub struct FeatureItem {
        pub title: String,
        pub description: String,
    }
}

item_record! {
    pub struct TimelineEntry {
        pub year: String,
        pub title: String,
        pub description: String,
    }
}

item_record! {
    pub struct GalleryImage {
        pub alt: String,
    }
}

item_record! {
    pub struct BlogPost {
        pub title: String,
        pub date: String,
        pub description: String,
    }
}

item_record! {
    pub struct Quote {
        pub quote: String,
        pub author: String,
        pub role: String,
    }
}

item_record! {
    /// Pricing tier; `price` is the bare monthly amount
    pub struct PricingPlan {
        pub name: String,
        pub price: String,
        pub popular: bool,
        pub features: Vec<String>,
    }
}

item_record! {
    pub struct FaqEntry {
        pub question: String,
        pub answer: String,
    }
}

item_record! {
    pub struct LogoEntry {
        pub name: String,
    }
}

item_record! {
    pub struct TeamMember {
        pub name: String,
        pub role: String,
    }
}

item_record! {
    pub struct StatEntry {
        pub label: String,
        pub value: String,
    }
}

/// Build a record of type `T` from literal field values
pub(crate) fn item<T: ItemRecord>(fields: &[(&str, FieldValue)]) -> T {
    let mut item = T::blank(ItemId::new());
    for (name, value) in fields {
        item.set_field(name, value.clone());
    }
    item
}

#[cfg(test)]
mod tests {
    use super::*;

    fn faq(question: &str, answer: &str) -> FaqEntry {
        item(&[
            ("question", FieldValue::text(question)),
            ("answer", FieldValue::text(answer)),
        ])
    }

    #[test]
    fn test_move_element_is_a_move_not_a_swap() {
        let mut list = vec!['a', 'b', 'c', 'd'];
        assert!(move_element(&mut list, 0, 2));
        assert_eq!(list, vec!['b', 'c', 'a', 'd']);
        assert!(move_element(&mut list, 2, 0));
        assert_eq!(list, vec!['a', 'b', 'c', 'd']);
    }

    #[test]
    fn test_move_element_noop_and_out_of_range() {
        let mut list = vec![1, 2, 3];
        assert!(move_element(&mut list, 1, 1));
        assert_eq!(list, vec![1, 2, 3]);
        assert!(!move_element(&mut list, 3, 0));
        assert!(!move_element(&mut list, 0, 5));
        assert_eq!(list, vec![1, 2, 3]);
    }

    #[test]
    fn test_add_from_first_resets_text_fields() {
        let mut list = vec![faq("Is it compatible?", "Yes.")];
        let id = list.add_from_first().expect("list has a first item");
        assert_eq!(list.len(), 2);
        assert_ne!(list[1].id, list[0].id);
        assert_eq!(list[1].id, id);
        assert_eq!(list[1].question, "New Question?");
        assert_eq!(list[1].answer, "New Answer");
        assert_eq!(list[0].question, "Is it compatible?");
    }

    #[test]
    fn test_add_from_first_keeps_unrecognised_fields() {
        let mut plans = vec![item::<PricingPlan>(&[
            ("name", FieldValue::text("Starter")),
            ("price", FieldValue::text("0")),
            ("popular", FieldValue::Flag(true)),
            ("features", FieldValue::List(vec!["Email".to_string()])),
        ])];
        plans.add_from_first();
        assert_eq!(plans[1].name, "New Name");
        assert_eq!(plans[1].price, "0");
        assert!(plans[1].popular);
        assert_eq!(plans[1].features, vec!["Email".to_string()]);
    }

    #[test]
    fn test_add_to_empty_list_is_noop() {
        let mut list: Vec<FaqEntry> = Vec::new();
        assert_eq!(list.add_from_first(), None);
        assert_eq!(list.item_count(), 0);
    }

    #[test]
    fn test_remove_and_update_by_id() {
        let mut list = vec![faq("A", "1"), faq("B", "2")];
        let first = list[0].id;
        assert!(list.update_item(first, "answer", FieldValue::text("one")));
        assert_eq!(list[0].answer, "one");
        assert!(!list.update_item(ItemId::new(), "answer", FieldValue::text("x")));
        assert!(list.remove_item(first));
        assert!(!list.remove_item(first));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_label_falls_back_to_position() {
        let list = vec![item::<GalleryImage>(&[]), item::<GalleryImage>(&[("alt", FieldValue::text("Shot"))])];
        assert_eq!(list.item_label(0), Some("Item 1".to_string()));
        assert_eq!(list.item_label(1), Some("Shot".to_string()));
        assert_eq!(list.item_label(2), None);
    }

    #[test]
    fn test_assign_rows_mints_fresh_ids() {
        let mut list = vec![faq("A", "1")];
        let old = list[0].id;
        let rows = vec![vec![("question".to_string(), FieldValue::text("Q"))]];
        assert!(list.assign(FieldValue::Records(rows)));
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].question, "Q");
        assert_eq!(list[0].answer, "");
        assert_ne!(list[0].id, old);
    }
}
