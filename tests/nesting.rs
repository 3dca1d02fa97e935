use formtree::{parse, Entry, Value};
use rstest::rstest;
use serde_json::json;

fn entries(pairs: &[(&str, &str)]) -> Vec<Entry> {
    pairs.iter().map(|&(path, text)| Entry::text(path, text)).collect()
}

fn as_json(tree: &Value) -> serde_json::Value {
    serde_json::to_value(tree).unwrap()
}

#[rstest]
fn test_no_entries_yield_empty_root_object() {
    let tree = parse([]).unwrap();
    assert_eq!(as_json(&tree), json!({}));
}

#[rstest]
fn test_single_entry_is_preserved_verbatim() {
    let tree = parse(entries(&[("p", "v")])).unwrap();
    assert_eq!(tree.get("p"), Some(&Value::from("v")));
}

#[rstest]
fn test_dotted_paths_nest_objects() {
    let tree = parse(entries(&[("a.b.c", "1"), ("a.b.d", "2"), ("a.e", "3")])).unwrap();
    assert_eq!(
        as_json(&tree),
        json!({"a": {"b": {"c": "1", "d": "2"}, "e": "3"}})
    );
}

#[rstest]
fn test_push_arrays_track_input_order() {
    let tree = parse(entries(&[("foo[]", "x"), ("foo[]", "y")])).unwrap();
    assert_eq!(as_json(&tree), json!({"foo": ["x", "y"]}));

    let tree = parse(entries(&[("foo[]", "y"), ("foo[]", "x")])).unwrap();
    assert_eq!(as_json(&tree), json!({"foo": ["y", "x"]}));
}

#[rstest]
fn test_round_trip_across_nested_array_and_object() {
    let tree = parse(entries(&[("a[0].b.c", "1"), ("a[1].b.c", "2")])).unwrap();
    assert_eq!(
        as_json(&tree),
        json!({"a": [{"b": {"c": "1"}}, {"b": {"c": "2"}}]})
    );
}

#[rstest]
fn test_push_segments_create_one_element_per_entry() {
    let tree = parse(entries(&[("a[].b", "1"), ("a[].b", "2")])).unwrap();
    assert_eq!(as_json(&tree), json!({"a": [{"b": "1"}, {"b": "2"}]}));
}

#[rstest]
fn test_push_into_nested_array_of_arrays() {
    let tree = parse(entries(&[("a[][0]", "x")])).unwrap();
    assert_eq!(as_json(&tree), json!({"a": [["x"]]}));
}

#[rstest]
fn test_very_deep_paths_materialize_without_stack_growth() {
    let depth = 20_000;
    let path = vec!["d"; depth].join(".");
    let tree = parse(vec![Entry::text(path, "bottom")]).unwrap();

    // Disassemble level by level so the assertion (and the drop) stay
    // iterative too.
    let mut level = tree;
    for _ in 0..depth {
        level = match level {
            Value::Object(mut members) => members.swap_remove("d").unwrap(),
            other => panic!("expected nested object, found {other:?}"),
        };
    }
    assert_eq!(level, Value::from("bottom"));
}

#[rstest]
fn test_sibling_paths_share_intermediate_containers() {
    let tree = parse(entries(&[
        ("user.name", "Ada"),
        ("user.langs[]", "rust"),
        ("user.langs[]", "fortran"),
    ]))
    .unwrap();
    assert_eq!(
        as_json(&tree),
        json!({"user": {"name": "Ada", "langs": ["rust", "fortran"]}})
    );
}
