//! Page model operations driven through the public API

use page_composer::{export_source, FieldValue, ItemId, NodeId, PageModel, SectionKind, StyleCategory};
use pretty_assertions::assert_eq;

fn item_text(page: &PageModel, node: NodeId, item: ItemId, field: &str) -> Option<String> {
    page.node(node)?
        .props
        .items()?
        .item_field(item, field)?
        .as_text()
        .map(str::to_string)
}

fn item_ids(page: &PageModel, node: NodeId) -> Vec<ItemId> {
    page.node(node)
        .and_then(|n| n.props.items())
        .map(|items| items.item_ids())
        .unwrap_or_default()
}

#[test]
fn test_add_faq_item_resets_text_fields() {
    let mut page = PageModel::new();
    let faq = page.add_component(SectionKind::Faq);
    let first = item_ids(&page, faq)[0];
    assert!(page.update_item(faq, first, "question", FieldValue::text("Is it compatible?")));
    assert!(page.update_item(faq, first, "answer", FieldValue::text("Yes.")));

    let added = page.add_item(faq).expect("faq has items");
    let ids = item_ids(&page, faq);
    assert_eq!(ids.len(), 4);
    assert_eq!(ids.last(), Some(&added));
    assert!(!ids[..3].contains(&added));
    assert_eq!(item_text(&page, faq, added, "question").as_deref(), Some("New Question?"));
    assert_eq!(item_text(&page, faq, added, "answer").as_deref(), Some("New Answer"));
    assert_eq!(item_text(&page, faq, first, "question").as_deref(), Some("Is it compatible?"));
}

#[test]
fn test_add_pricing_item_keeps_unrecognised_fields() {
    let mut page = PageModel::new();
    let pricing = page.add_component(SectionKind::Pricing);
    let added = page.add_item(pricing).expect("pricing has items");
    let items = page.node(pricing).and_then(|n| n.props.items()).expect("items");
    assert_eq!(items.item_field(added, "name"), Some(FieldValue::text("New Name")));
    assert_eq!(items.item_field(added, "price"), Some(FieldValue::text("0")));
    assert_eq!(items.item_field(added, "popular"), Some(FieldValue::Flag(false)));
}

#[test]
fn test_add_item_to_empty_list_is_noop() {
    let mut page = PageModel::new();
    let gallery = page.add_component(SectionKind::Gallery);
    for id in item_ids(&page, gallery) {
        assert!(page.remove_item(gallery, id));
    }
    assert_eq!(page.add_item(gallery), None);
    assert!(item_ids(&page, gallery).is_empty());
}

#[test]
fn test_item_ops_on_missing_ids_are_noops() {
    let mut page = PageModel::new();
    let team = page.add_component(SectionKind::Team);
    let before = page.node(team).cloned();

    assert!(!page.remove_item(team, ItemId::new()));
    assert!(!page.update_item(team, ItemId::new(), "name", FieldValue::text("x")));
    assert!(!page.remove_item(NodeId::new(), ItemId::new()));
    assert!(!page.reorder_items(NodeId::new(), 0, 1));
    assert_eq!(page.node(team).cloned(), before);
}

#[test]
fn test_reorder_items_is_a_move() {
    let mut page = PageModel::new();
    let gallery = page.add_component(SectionKind::Gallery);
    let original = item_ids(&page, gallery);

    assert!(page.reorder_items(gallery, 0, 3));
    let moved = item_ids(&page, gallery);
    assert_eq!(moved[3], original[0]);
    assert_eq!(&moved[..3], &original[1..4]);
    assert_eq!(&moved[4..], &original[4..]);

    assert!(page.reorder_items(gallery, 3, 0));
    assert_eq!(item_ids(&page, gallery), original);

    assert!(page.reorder_items(gallery, 2, 2));
    assert_eq!(item_ids(&page, gallery), original);
}

#[test]
fn test_reorder_components_is_a_permutation() {
    let mut page = PageModel::new();
    let ids: Vec<NodeId> = [SectionKind::Nav, SectionKind::Hero, SectionKind::Faq, SectionKind::Footer]
        .into_iter()
        .map(|kind| page.add_component(kind))
        .collect();
    let order = |page: &PageModel| page.components().iter().map(|n| n.id).collect::<Vec<_>>();

    for (i, j) in [(0, 3), (3, 1), (1, 2)] {
        assert!(page.reorder_components(i, j));
        let mut sorted = order(&page);
        sorted.sort_by_key(|id| ids.iter().position(|x| x == id));
        assert_eq!(sorted, ids);
        assert!(page.reorder_components(j, i));
        assert_eq!(order(&page), ids);
    }
    assert!(!page.reorder_components(0, 9));
    assert_eq!(order(&page), ids);
}

#[test]
fn test_style_operations_through_model() {
    let mut page = PageModel::new();
    let hero = page.add_component(SectionKind::Hero);
    page.set_classes(hero, "md:py-8 border-2 border-dashed border-zinc-500");

    assert!(page.set_style(hero, StyleCategory::PaddingY, "py-12 md:py-24"));
    assert!(page.set_style(hero, StyleCategory::BorderWidth, "border-8"));
    assert_eq!(
        page.node(hero).map(|n| n.style.to_string()).as_deref(),
        Some("border-dashed border-zinc-500 py-12 md:py-24 border-8")
    );
    assert!(page.is_style_active(hero, "py-12 md:py-24"));
    assert!(!page.is_style_active(hero, "py-12 md:py-16"));
    assert_eq!(
        page.display_value(hero, &["border-zinc", "border-slate"]).as_deref(),
        Some("border-zinc-500")
    );
}

#[test]
fn test_custom_classes_kept_verbatim() {
    let mut page = PageModel::new();
    let hero = page.add_component(SectionKind::Hero);
    page.set_classes(hero, "  ring-1 shadow  ring-1 ");
    assert_eq!(
        page.node(hero).map(|n| n.style.to_string()).as_deref(),
        Some("ring-1 shadow ring-1")
    );
    assert!(page.set_style_named(hero, "shadow", "shadow"));
    assert_eq!(
        page.node(hero).map(|n| n.style.to_string()).as_deref(),
        Some("ring-1 shadow ring-1 shadow")
    );
}

#[test]
fn test_template_instantiation_appends_and_selects_first() {
    let mut page = PageModel::new();
    let nav = page.add_component(SectionKind::Nav);
    let ids = page.instantiate_template("template-course");
    assert!(!ids.is_empty());
    assert_eq!(page.components()[0].id, nav);
    assert_eq!(page.components().len(), ids.len() + 1);
    assert_eq!(page.selected(), ids.first().copied());
    assert!(page.components().iter().skip(1).all(|n| n.style.is_empty()));
}

#[test]
fn test_unknown_template_changes_nothing() {
    let mut page = PageModel::new();
    let hero = page.add_component(SectionKind::Hero);
    assert!(page.instantiate_template("template-none").is_empty());
    assert_eq!(page.components().len(), 1);
    assert_eq!(page.selected(), Some(hero));
}

#[test]
fn test_template_sections_exported_in_order() {
    let mut page = PageModel::new();
    page.instantiate_template("template-saas");
    let source = export_source(&page).expect("export succeeds");

    let mut cursor = 0;
    for node in page.components() {
        let comment = match node.variant() {
            Some(variant) => format!("{{/* {}: {} */}}", node.kind().label(), variant),
            None => format!("{{/* {} */}}", node.kind().label()),
        };
        let found = source[cursor..]
            .find(&comment)
            .unwrap_or_else(|| panic!("missing {comment} after byte {cursor}"));
        cursor += found + comment.len();
    }
}

#[test]
fn test_instances_get_distinct_ids() {
    let mut page = PageModel::new();
    let first = page.instantiate_template("template-app");
    let second = page.instantiate_template("template-app");
    assert_eq!(first.len(), second.len());
    assert!(first.iter().all(|id| !second.contains(id)));

    let a = item_ids(&page, first[2]);
    let b = item_ids(&page, second[2]);
    assert!(!a.is_empty());
    assert!(a.iter().all(|id| !b.contains(id)));
}
