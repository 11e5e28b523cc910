use super::*;

fn rect(x0: i64, y0: i64) -> VisualElement {
    VisualElement::new(ShapeKind::Rectangle, x0, y0, x0 + 10, y0 + 5)
}

#[test]
fn link_merges_identical_elements() {
    let mut t = AssociationTable::new();
    let a = t.link(rect(0, 0), Entity::gene("hsa:1"));
    let b = t.link(rect(0, 0), Entity::gene("hsa:2"));
    let c = t.link(rect(20, 0), Entity::compound("cpd:C00031"));

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(t.len(), 2);
    assert_eq!(
        t.entities(a),
        &[Entity::gene("hsa:1"), Entity::gene("hsa:2")]
    );
}

#[test]
fn link_deduplicates_entities_per_element() {
    let mut t = AssociationTable::new();
    let a = t.link(rect(0, 0), Entity::gene("hsa:1"));
    t.link(rect(0, 0), Entity::gene("hsa:1"));
    assert_eq!(t.entities(a).len(), 1);
}

#[test]
fn same_id_with_different_kind_is_a_different_entity() {
    let mut t = AssociationTable::new();
    let a = t.link(rect(0, 0), Entity::gene("x"));
    t.link(rect(0, 0), Entity::compound("x"));
    assert_eq!(t.entities(a).len(), 2);
}

#[test]
fn iteration_keeps_first_seen_order() {
    let mut t = AssociationTable::new();
    t.link(rect(50, 0), Entity::gene("b"));
    t.link(rect(0, 0), Entity::gene("a"));
    let order: Vec<i64> = t.iter().map(|(_, el, _)| el.x0).collect();
    assert_eq!(order, vec![50, 0]);
    assert_eq!(t.id_of(&rect(0, 0)), Some(ElementId(1)));
}

#[test]
fn element_size_never_negative() {
    let el = VisualElement::new(ShapeKind::Circle, 10, 10, 5, 5);
    assert_eq!(el.width(), 0);
    assert_eq!(el.height(), 0);
}
