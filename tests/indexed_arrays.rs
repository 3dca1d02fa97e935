use formtree::{parse, parse_with_options, Entry, ParseOptions};
use rstest::rstest;
use serde_json::json;

fn entries(pairs: &[(&str, &str)]) -> Vec<Entry> {
    pairs.iter().map(|&(path, text)| Entry::text(path, text)).collect()
}

#[rstest]
fn test_explicit_indexes_order_by_index_not_input() {
    let tree = parse(entries(&[("foo[1]", "x"), ("foo[0]", "y")])).unwrap();
    assert_eq!(serde_json::to_value(&tree).unwrap(), json!({"foo": ["y", "x"]}));
}

#[rstest]
fn test_compaction_removes_gaps_preserving_index_order() {
    let tree = parse(entries(&[
        ("foo[21].a", "x"),
        ("foo[21].b", "y"),
        ("foo[0].a", "z"),
        ("foo[0].c", "w"),
    ]))
    .unwrap();
    assert_eq!(
        serde_json::to_value(&tree).unwrap(),
        json!({"foo": [{"a": "z", "c": "w"}, {"a": "x", "b": "y"}]})
    );
}

#[rstest]
fn test_nested_ordered_arrays_are_compacted() {
    let tree = parse(entries(&[("grid[2][4]", "x"), ("grid[2][1]", "y"), ("grid[0][0]", "z")]))
        .unwrap();
    assert_eq!(
        serde_json::to_value(&tree).unwrap(),
        json!({"grid": [["z"], ["y", "x"]]})
    );
}

#[rstest]
fn test_reused_index_extends_the_same_element() {
    let tree = parse(entries(&[("rows[3].id", "7"), ("rows[3].name", "n")])).unwrap();
    assert_eq!(
        serde_json::to_value(&tree).unwrap(),
        json!({"rows": [{"id": "7", "name": "n"}]})
    );
}

#[rstest]
fn test_compaction_runs_on_survivors_after_empty_string_removal() {
    let options = ParseOptions::new().with_remove_empty_string(true);
    let tree = parse_with_options(
        entries(&[("foo[5]", ""), ("foo[2]", "kept"), ("foo[9]", "also")]),
        &options,
    )
    .unwrap();
    assert_eq!(
        serde_json::to_value(&tree).unwrap(),
        json!({"foo": ["kept", "also"]})
    );
}

#[rstest]
fn test_giant_indices_cost_one_slot_each() {
    // Sparse storage: the written index orders the element but never
    // sizes any allocation.
    let top = format!("a[{}]", usize::MAX);
    let tree = parse(vec![
        Entry::text("a[40000000000]", "mid"),
        Entry::text(top, "high"),
        Entry::text("a[7]", "low"),
    ])
    .unwrap();
    assert_eq!(
        serde_json::to_value(&tree).unwrap(),
        json!({"a": ["low", "mid", "high"]})
    );
}

#[rstest]
fn test_index_zero_alone_makes_a_one_element_array() {
    let tree = parse(entries(&[("a[0]", "only")])).unwrap();
    assert_eq!(serde_json::to_value(&tree).unwrap(), json!({"a": ["only"]}));
}
